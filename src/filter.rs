//! Recency and noise filtering.
//!
//! [`select_posts`] is a lazy single pass over the feed: each entry is
//! checked for age first, then for the short-support-request pattern, and
//! survivors are turned into [`Post`]s in feed order.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use tracing::debug;

use crate::digest::Post;
use crate::source::FeedEntry;

/// Title substrings that mark a likely support request.
pub const NOISE_KEYWORDS: [&str; 6] = ["help", "issue", "problem", "not working", "error", "broken"];

/// Titles at least this long are kept even when they contain a keyword.
pub const SHORT_TITLE_LEN: usize = 50;

/// Oldest publish time still accepted for a window of `days_back` days.
pub fn cutoff(now: DateTime<Utc>, days_back: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(days_back)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// True for short titles that mention one of [`NOISE_KEYWORDS`].
pub fn is_noise(title: &str) -> bool {
    if title.chars().count() >= SHORT_TITLE_LEN {
        return false;
    }
    let lower = title.to_lowercase();
    NOISE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Lazily filter `entries` against `cutoff` and map survivors to posts.
pub fn select_posts<I>(entries: I, cutoff: DateTime<Utc>) -> impl Iterator<Item = Post>
where
    I: IntoIterator<Item = FeedEntry>,
{
    entries.into_iter().filter_map(move |entry| {
        // Compare at whole-second precision.
        let Some(published) = entry.published.map(|p| p.trunc_subsecs(0)) else {
            debug!(title = %entry.title, "skipping entry without a date");
            return None;
        };
        if published < cutoff {
            debug!(title = %entry.title, %published, "skipping old entry");
            return None;
        }
        if is_noise(&entry.title) {
            debug!(title = %entry.title, "skipping short support-style title");
            return None;
        }
        Some(Post::from_entry(entry, published))
    })
}
