//! Runtime errors.

use std::time::Duration;

use thiserror::Error;

/// Failure of an operation raced against a deadline.
#[derive(Debug, Error)]
pub enum DeadlineError<E> {
    /// The deadline elapsed before the operation settled.
    #[error("operation timed out")]
    Exceeded { after: Duration },

    /// The operation settled first, with its own failure.
    #[error("operation failed: {0}")]
    Failed(E),
}

impl<E> DeadlineError<E> {
    /// Returns true if this is a timeout rather than an operation failure.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    /// Returns the operation's own error, if it failed before the deadline.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Exceeded { .. } => None,
        }
    }
}
