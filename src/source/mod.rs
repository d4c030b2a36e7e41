//! Data source abstraction layer.
//!
//! This module defines the [`DataSource`] trait, the [`FeedEntry`] type every
//! source produces, and the [`FetchError`] raised when a fetch goes wrong.
//! The only concrete implementation is [`RedditSource`].

mod feed_entry;
mod reddit;

pub use feed_entry::FeedEntry;
pub use reddit::RedditSource;

use thiserror::Error;

/// Why a fetch produced no entries.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or a non-success HTTP status.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The body was fetched but is not a well-formed feed.
    #[error("{0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}

/// Trait that every data source must implement.
///
/// ## Implementing a new source
///
/// ```ignore
/// pub struct MySource { /* config fields */ }
///
/// impl DataSource for MySource {
///     fn name(&self) -> &str { "my-source" }
///
///     fn fetch(&self) -> Result<Vec<FeedEntry>, FetchError> {
///         // Perform HTTP / IO, then convert into FeedEntry values.
///         todo!()
///     }
/// }
/// ```
pub trait DataSource {
    /// Human-readable label used in log lines.
    fn name(&self) -> &str;

    /// Fetch the current entries, in the order the feed lists them.
    fn fetch(&self) -> Result<Vec<FeedEntry>, FetchError>;
}
