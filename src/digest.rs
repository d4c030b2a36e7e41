//! Output types: [`Post`] and the [`Digest`] envelope printed on stdout.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::source::FeedEntry;

/// Author shown when the feed entry names nobody.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// An entry that survived filtering, ready for serialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub title: String,
    pub link: String,
    pub published: DateTime<Utc>,
    pub author: String,
    pub summary: String,
}

impl Post {
    /// Build a post from an entry, filling in the documented defaults.
    ///
    /// `published` is passed separately because the caller has already
    /// resolved (and truncated) the entry's timestamp.
    pub fn from_entry(entry: FeedEntry, published: DateTime<Utc>) -> Self {
        Self {
            title: entry.title,
            link: entry.link,
            published,
            author: entry.author.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            summary: entry.summary.unwrap_or_default(),
        }
    }
}

/// The JSON document emitted by a run.
///
/// `post_count` is derived from `posts` at construction and the fields are
/// not mutable afterwards, so the two always agree.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    fetch_time: DateTime<Utc>,
    post_count: usize,
    posts: Vec<Post>,
}

impl Digest {
    pub fn new(fetch_time: DateTime<Utc>, posts: Vec<Post>) -> Self {
        Self {
            fetch_time,
            post_count: posts.len(),
            posts,
        }
    }

    pub fn post_count(&self) -> usize {
        self.post_count
    }

    #[cfg(test)]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Render as JSON indented by two spaces.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 7, 0, 0).unwrap()
    }

    #[test]
    fn missing_author_becomes_unknown() {
        let post = Post::from_entry(FeedEntry::new("t", "l"), ts());
        assert_eq!(post.author, "Unknown");
        assert_eq!(post.summary, "");
    }

    #[test]
    fn present_author_is_kept() {
        let entry = FeedEntry::new("t", "l").by("/u/alice").with_summary("s");
        let post = Post::from_entry(entry, ts());
        assert_eq!(post.author, "/u/alice");
        assert_eq!(post.summary, "s");
    }

    #[test]
    fn post_count_matches_posts() {
        let posts = vec![
            Post::from_entry(FeedEntry::new("a", "1"), ts()),
            Post::from_entry(FeedEntry::new("b", "2"), ts()),
        ];
        let digest = Digest::new(ts(), posts);
        assert_eq!(digest.post_count(), 2);
        assert_eq!(digest.posts().len(), digest.post_count());

        let empty = Digest::new(ts(), Vec::new());
        assert_eq!(empty.post_count(), 0);
        assert!(empty.posts().is_empty());
    }

    #[test]
    fn json_shape_and_indentation() {
        let entry = FeedEntry::new("Hello", "https://example.com/1").by("/u/bob");
        let digest = Digest::new(ts(), vec![Post::from_entry(entry, ts())]);
        let json = digest.to_json_pretty().unwrap();

        assert!(json.starts_with("{\n  \"fetch_time\": \"2025-06-02T07:00:00Z\",\n  \"post_count\": 1,\n  \"posts\": ["));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let post = &value["posts"][0];
        assert_eq!(post["title"], "Hello");
        assert_eq!(post["link"], "https://example.com/1");
        assert_eq!(post["published"], "2025-06-02T07:00:00Z");
        assert_eq!(post["author"], "/u/bob");
        assert_eq!(post["summary"], "");
    }

    #[test]
    fn empty_digest_serialises_empty_array() {
        let json = Digest::new(ts(), Vec::new()).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["post_count"], 0);
        assert_eq!(value["posts"], serde_json::json!([]));
    }
}
