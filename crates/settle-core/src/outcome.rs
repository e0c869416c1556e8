//! Failure-free result marker and the contract for reading operation outputs.

/// Result of running an operation through a safe invoker.
///
/// Any failure collapses into `Absent`; no error detail survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Present(T),
    /// The operation failed.
    Absent,
}

impl<T> Outcome<T> {
    /// Returns true if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true if the operation failed.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Convert into an `Option`, dropping the absence marker.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Map the present value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Present(value) => Outcome::Present(f(value)),
            Self::Absent => Outcome::Absent,
        }
    }

    /// Return the present value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_option()
    }
}

/// Output of an operation that can be read as success or failure.
///
/// Implemented for the shapes operations usually return so that the invoker
/// and the batch executor accept them without adapters.
pub trait Settled {
    /// The success value.
    type Value;

    /// Collapse the output into an [`Outcome`].
    fn into_outcome(self) -> Outcome<Self::Value>;
}

impl<T, E> Settled for Result<T, E> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Present(value),
            Err(_) => Outcome::Absent,
        }
    }
}

impl<T> Settled for Option<T> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        self.into()
    }
}

impl<T> Settled for Outcome<T> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        self
    }
}
