//! reddit-digest — print a JSON digest of a subreddit's newest posts.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐ FeedEntry ┌───────────┐  Post  ┌───────────┐
//! │ source/   │ ────────► │ filter.rs │ ─────► │ digest.rs │ ──► stdout (JSON)
//! │ (HTTP+XML)│           │ (lazy)    │        │ (serde)   │
//! └───────────┘           └───────────┘        └───────────┘
//!        ▲                      ▲
//!        └──── fetch.rs ────────┘   errors collapse to "no posts" here
//! ```
//!
//! * **`source/`** — the `DataSource` trait and the Reddit implementation.
//! * **`filter`** — recency cutoff and short-support-request filter.
//! * **`digest`** — `Post` and the output envelope.
//! * **`fetch`** — runs a source through the filters, logging failures.
//! * **`config`** — positional arguments and defaults.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the JSON.

mod config;
mod digest;
mod fetch;
mod filter;
mod source;

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use chrono::Utc;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use config::Config;
use digest::Digest;

/// Build the log subscriber. Colour codes only make sense on a terminal.
fn log_subscriber<W>(make_writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(ansi)
        .finish()
}

fn init_logging() {
    log_subscriber(io::stderr, io::stderr().is_terminal()).init();
}

/// Line written to stderr when a run found nothing.
fn empty_notice(digest: &Digest, days_back: u32) -> Option<String> {
    (digest.post_count() == 0).then(|| format!("No new posts found in the last {days_back} days."))
}

fn main() -> Result<()> {
    init_logging();

    let config = Config::from_args(std::env::args().skip(1))?;

    let posts = fetch::fetch_posts(&config.subreddit, config.days_back);
    let digest = Digest::new(Utc::now(), posts);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", digest.to_json_pretty()?)?;
    stdout.flush()?;

    // Printed regardless of RUST_LOG.
    if let Some(notice) = empty_notice(&digest, config.days_back) {
        eprintln!("{notice}");
    }

    Ok(())
}
