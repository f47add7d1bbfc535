//! # Config - diff settings
//!
//! Settings that drive a store comparison. Values can be built in code or
//! read from the environment:
//!
//! ```text
//! KVSTORE_DIFF_SKIP_PREFIXES      comma-separated key prefixes whose values
//!                                 are not compared     (default: none)
//! KVSTORE_DIFF_PROGRESS_INTERVAL  log progress every N compared pairs,
//!                                 0 = disabled         (default: 10000)
//! ```
//!
//! Unparseable values fall back to the defaults.

pub const SKIP_PREFIXES_VAR: &str = "KVSTORE_DIFF_SKIP_PREFIXES";
pub const PROGRESS_INTERVAL_VAR: &str = "KVSTORE_DIFF_PROGRESS_INTERVAL";

/// Default number of compared pairs between two progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Settings for comparing two ordered stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    /// Keys starting with any of these prefixes only need to match by key;
    /// their values are not compared.
    pub skip_prefixes: Vec<Vec<u8>>,
    /// Emit a progress trace every this many compared pairs. `0` disables it.
    pub progress_interval: u64,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            skip_prefixes: Vec::new(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl DiffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_prefix(mut self, prefix: impl Into<Vec<u8>>) -> Self {
        self.skip_prefixes.push(prefix.into());
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable lookup.
    ///
    /// Used by [`DiffConfig::from_env`]; lets callers (and tests) supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let skip_prefixes = lookup(SKIP_PREFIXES_VAR)
            .map(|raw| parse_prefix_list(&raw))
            .unwrap_or_default();
        let progress_interval = lookup(PROGRESS_INTERVAL_VAR)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL);

        Self {
            skip_prefixes,
            progress_interval,
        }
    }

    /// Borrowed view of the skip prefixes, as taken by the diff functions.
    pub fn skip_prefix_slices(&self) -> Vec<&[u8]> {
        self.skip_prefixes.iter().map(Vec::as_slice).collect()
    }
}

/// Splits a comma-separated list; empty segments are ignored.
fn parse_prefix_list(raw: &str) -> Vec<Vec<u8>> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.as_bytes().to_vec())
        .collect()
}
