//! CLI configuration.

use std::time::Duration;

use settle_core::DEFAULT_TRUNCATE_LEN;

/// CLI defaults, overridable per command.
pub struct Config {
    /// Per-task timeout for `batch` (milliseconds).
    pub batch_timeout_ms: u64,

    /// Maximum string length for `truncate`.
    pub truncate_len: usize,
}

impl Config {
    /// Batch timeout as a Duration.
    pub fn batch_timeout(&self) -> Duration {
        Duration::from_millis(self.batch_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_timeout_ms: 1000,
            truncate_len: DEFAULT_TRUNCATE_LEN,
        }
    }
}
