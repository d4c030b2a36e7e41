//! Reddit "new" listing source.
//!
//! Reddit serves each subreddit's newest submissions as an Atom document at
//! `/r/<name>/new/.rss`. Parsing goes through [`feed_rs`], which also accepts
//! plain RSS 2.0, so the same code handles either shape.

use std::time::Duration;

use feed_rs::model::Entry;
use tracing::debug;

use super::{DataSource, FeedEntry, FetchError};

/// Reddit rejects the default client user agent far more often than a
/// browser one.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build the feed URL for a subreddit's newest posts.
pub fn feed_url(subreddit: &str) -> String {
    format!("https://www.reddit.com/r/{subreddit}/new/.rss")
}

/// A subreddit's "new" feed.
pub struct RedditSource {
    /// Subreddit name without the `r/` prefix.
    pub subreddit: String,
    /// Full feed URL, derived from `subreddit`.
    pub url: String,
}

impl RedditSource {
    pub fn new(subreddit: impl Into<String>) -> Self {
        let subreddit = subreddit.into();
        let url = feed_url(&subreddit);
        Self { subreddit, url }
    }

    /// Parse a fetched feed body into [`FeedEntry`]s.
    ///
    /// No I/O happens here, so tests can feed it fixtures directly.
    pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>, FetchError> {
        let feed = feed_rs::parser::parse(body)?;
        Ok(feed.entries.iter().map(convert_entry).collect())
    }
}

impl DataSource for RedditSource {
    fn name(&self) -> &str {
        &self.subreddit
    }

    fn fetch(&self) -> Result<Vec<FeedEntry>, FetchError> {
        // No request timeout: a stalled connection blocks until the peer or
        // the OS gives up.
        let client = reqwest::blocking::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;

        debug!(url = %self.url, "fetching feed");
        let body = client.get(&self.url).send()?.error_for_status()?.bytes()?;
        debug!(bytes = body.len(), "feed fetched");

        Self::parse_feed(body.as_ref())
    }
}

fn convert_entry(entry: &Entry) -> FeedEntry {
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .unwrap_or_default();

    // Prefer the alternate (HTML) link, fall back to whatever comes first.
    let link = entry
        .links
        .iter()
        .find(|l| l.rel.as_deref().map_or(true, |rel| rel == "alternate"))
        .or_else(|| entry.links.first())
        .map(|l| l.href.clone())
        .unwrap_or_default();

    let author = entry
        .authors
        .first()
        .map(|p| p.name.trim())
        .filter(|name| !name.is_empty())
        .map(String::from);

    // Reddit puts the post body in <content>, not <summary>.
    let summary = entry
        .summary
        .as_ref()
        .map(|t| t.content.clone())
        .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()));

    FeedEntry {
        title,
        link,
        published: entry.published.or(entry.updated),
        author,
        summary,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
