//! Run configuration from positional command-line arguments.

use anyhow::{bail, Context, Result};

use crate::fetch::DEFAULT_SUBREDDIT;

/// Window used by the binary, wider than the library default.
pub const CLI_DAYS_BACK: u32 = 30;

pub const USAGE: &str = "usage: reddit-digest [SUBREDDIT] [DAYS_BACK]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub subreddit: String,
    pub days_back: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subreddit: DEFAULT_SUBREDDIT.to_string(),
            days_back: CLI_DAYS_BACK,
        }
    }
}

impl Config {
    /// Build from arguments, program name already stripped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(subreddit) = args.next() {
            let trimmed = subreddit.trim();
            let name = trimmed.strip_prefix("r/").unwrap_or(trimmed);
            if name.is_empty() {
                bail!("subreddit name must not be empty\n{USAGE}");
            }
            if name.contains('/') {
                bail!("invalid subreddit {subreddit:?}\n{USAGE}");
            }
            config.subreddit = name.to_string();
        }
        if let Some(days) = args.next() {
            config.days_back = days
                .trim()
                .parse()
                .with_context(|| format!("invalid DAYS_BACK {days:?}\n{USAGE}"))?;
        }
        if args.next().is_some() {
            bail!("too many arguments\n{USAGE}");
        }

        Ok(config)
    }
}
