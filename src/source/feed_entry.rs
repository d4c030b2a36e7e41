//! The entry type shared by every feed source.
//!
//! Sources convert their native representation (Atom `<entry>`, RSS
//! `<item>`) into `FeedEntry` so that filtering never needs to know which
//! format the feed used.

use chrono::{DateTime, Utc};

/// A single feed entry, normalised from any data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Headline as published. Empty when the feed omitted it.
    pub title: String,

    /// URL of the post. Empty when the feed omitted it.
    pub link: String,

    /// Publication timestamp.
    ///
    /// `None` means the source gave neither a publish nor an update date.
    pub published: Option<DateTime<Utc>>,

    /// Author name, e.g. `/u/someone` for Reddit.
    pub author: Option<String>,

    /// Summary or body text (HTML for Reddit).
    pub summary: Option<String>,
}

/// Builder helpers for constructing entries in tests.
#[cfg(test)]
impl FeedEntry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published: None,
            author: None,
            summary: None,
        }
    }

    pub fn published_at(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }

    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
