//! Configuration — connection settings sourced from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use crate::persist;

const DEFAULT_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the account API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server root; routes live under `/api/v1/` beneath it.
    pub base_url: String,
    /// Per-request timeout for API calls.
    pub timeout: Duration,
    /// Where remembered session tokens are written.
    pub token_file: PathBuf,
}

impl Config {
    /// Load settings from `TELLER_BASE_URL`, `TELLER_TIMEOUT_SECS`, and
    /// `TELLER_TOKEN_FILE`, falling back to the defaults for anything unset
    /// or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("TELLER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout: Duration::from_secs(env_parse("TELLER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            token_file: std::env::var("TELLER_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| persist::default_token_path()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_file: persist::default_token_path(),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
