//! Fetch-and-filter entry point.
//!
//! Everything that can go wrong while fetching is reported here and turned
//! into an empty post list, so callers always get something to print.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::digest::Post;
use crate::filter::{cutoff, select_posts};
use crate::source::{DataSource, FetchError, RedditSource};

/// Subreddit used when none is given.
pub const DEFAULT_SUBREDDIT: &str = "ClaudeCode";

/// Recency window used by [`fetch_posts`] callers that have no preference.
#[cfg(test)]
pub const DEFAULT_DAYS_BACK: u32 = 1;

/// Fetch the newest posts of `subreddit` published within `days_back` days.
///
/// Never fails: fetch and parse errors are logged and yield an empty list.
pub fn fetch_posts(subreddit: &str, days_back: u32) -> Vec<Post> {
    fetch_posts_from(&RedditSource::new(subreddit), days_back, Utc::now())
}

/// Like [`fetch_posts`], for any source and an explicit `now`.
pub fn fetch_posts_from(source: &dyn DataSource, days_back: u32, now: DateTime<Utc>) -> Vec<Post> {
    match source.fetch() {
        Ok(entries) => {
            let total = entries.len();
            let posts: Vec<Post> = select_posts(entries, cutoff(now, days_back)).collect();
            info!(
                source = source.name(),
                total,
                kept = posts.len(),
                "filtered feed entries"
            );
            posts
        }
        Err(FetchError::Parse(e)) => {
            error!("Error parsing RSS feed: {e}");
            Vec::new()
        }
        Err(e) => {
            error!("Error fetching Reddit posts: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Digest;
    use crate::source::FeedEntry;
    use chrono::{Duration, TimeZone};

    /// In-memory source serving a fixed result.
    struct StaticSource {
        result: fn() -> Result<Vec<FeedEntry>, FetchError>,
    }

    impl DataSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        fn fetch(&self) -> Result<Vec<FeedEntry>, FetchError> {
            (self.result)()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
    }

    fn sample_entries() -> Result<Vec<FeedEntry>, FetchError> {
        Ok(vec![
            FeedEntry::new("Error installing on Windows", "https://example.com/1").published_at(now()),
            FeedEntry::new(
                "Deep dive: how I debugged a tricky concurrency error in my 200-line Claude Code automation pipeline",
                "https://example.com/2",
            )
            .published_at(now())
            .by("/u/writer")
            .with_summary("<p>long read</p>"),
            FeedEntry::new("Release notes", "https://example.com/3")
                .published_at(now() - Duration::days(40)),
            FeedEntry::new("Workflow tips", "https://example.com/4")
                .published_at(now() - Duration::days(2)),
        ])
    }

    fn malformed_feed() -> Result<Vec<FeedEntry>, FetchError> {
        RedditSource::parse_feed(b"<html><body>blocked</body></html>")
    }

    #[test]
    fn applies_both_filters_in_feed_order() {
        let source = StaticSource { result: sample_entries };
        let posts = fetch_posts_from(&source, 30, now());

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Deep dive: how I debugged a tricky concurrency error in my 200-line Claude Code automation pipeline",
                "Workflow tips",
            ]
        );
        assert_eq!(posts[0].author, "/u/writer");
        assert_eq!(posts[0].summary, "<p>long read</p>");
        assert_eq!(posts[1].author, "Unknown");
        assert_eq!(posts[1].summary, "");
    }

    #[test]
    fn narrower_window_drops_more() {
        let source = StaticSource { result: sample_entries };
        let posts = fetch_posts_from(&source, DEFAULT_DAYS_BACK, now());
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn parse_failure_yields_empty_digest() {
        let source = StaticSource { result: malformed_feed };
        let posts = fetch_posts_from(&source, 30, now());
        assert!(posts.is_empty());

        let digest = Digest::new(now(), posts);
        assert_eq!(digest.post_count(), 0);
        assert!(digest.posts().is_empty());
    }

    #[test]
    fn http_failure_yields_no_posts() {
        let mut source = RedditSource::new("test");
        // Nothing listens on port 1.
        source.url = "http://127.0.0.1:1/r/test/new/.rss".to_string();
        assert!(fetch_posts_from(&source, 30, now()).is_empty());
    }

    #[test]
    fn empty_feed_yields_no_posts() {
        let source = StaticSource { result: || Ok(Vec::new()) };
        assert!(fetch_posts_from(&source, 30, now()).is_empty());
    }
}
