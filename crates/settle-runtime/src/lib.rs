//! Timeout-bounded concurrent task execution.
//!
//! Three layers, leaves first:
//! - [`invoke`]: run an operation and turn any failure into [`Outcome::Absent`]
//! - [`deadline`]: race one operation against a fixed duration
//! - [`batch`]: race many operations with a shared duration and keep the
//!   ones that finished in time, in submission order
//!
//! None of these cancel work. An operation that misses its deadline is
//! detached and keeps running on the tokio runtime until it settles on its
//! own; only its result is discarded. Operations handed to [`deadline`] or
//! [`batch`] must therefore be safe to abandon, and long-running abandoned
//! operations keep holding whatever resources they hold.

pub mod batch;
pub mod deadline;
pub mod error;
pub mod invoke;

pub use batch::{run_all_with_timeout, settle_all, BatchExecutor};
pub use deadline::{race, with_deadline};
pub use error::DeadlineError;
pub use invoke::{safe_await, safe_call, safe_call_async};

pub use settle_core::{Outcome, RaceResult, Rejection, Settled, Settlement};
