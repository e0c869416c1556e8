//! Core domain errors.

use thiserror::Error;

/// Core errors for Settle helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input was not a decimal integer that fits the target width.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// String could not be parsed as a UUID.
    #[error("Invalid UUID '{uuid}': {reason}")]
    InvalidUuid { uuid: String, reason: String },

    /// Filesystem error while reading host configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
