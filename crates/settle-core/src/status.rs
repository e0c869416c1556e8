//! Status enums for deadline races and batch settlements.

use std::fmt;

/// Result of racing an operation against a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceResult<T> {
    /// The operation settled before the deadline.
    Completed(T),
    /// The deadline elapsed first.
    TimedOut,
}

impl<T> RaceResult<T> {
    /// Returns true if the deadline elapsed first.
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut)
    }

    /// Returns the completed output, if any.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(output) => Some(output),
            Self::TimedOut => None,
        }
    }
}

/// Why a task in a batch produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Deadline elapsed before the task settled.
    TimedOut,
    /// Task settled with a failure.
    Failed,
    /// Task panicked while being polled.
    Panicked,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TimedOut => "timed_out",
            Self::Failed => "failed",
            Self::Panicked => "panicked",
        };
        f.write_str(name)
    }
}

/// Final state of one task in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement<T> {
    /// Task settled successfully within the deadline.
    Fulfilled(T),
    /// Task was dropped.
    Rejected(Rejection),
}

impl<T> Settlement<T> {
    /// Returns true if the task produced a value.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    /// Returns the value of a fulfilled task.
    pub fn fulfilled(self) -> Option<T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Fulfilled(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}
