//! Run many operations under one shared deadline and keep what finished.
//!
//! Every task gets its own [`race`] with the same timeout. All races are
//! driven together on the calling task: they start in submission order,
//! settle in whatever order they finish, and the join waits for every one of
//! them. Timeouts, failures and panics are dropped; the caller only ever sees
//! a shorter result list.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::future::join_all;
use futures_util::FutureExt;
use tracing::debug;

use settle_core::{Outcome, RaceResult, Rejection, Settled, Settlement};

use crate::deadline::race;

/// Batch runner with a fixed per-task timeout.
#[derive(Debug, Clone, Copy)]
pub struct BatchExecutor {
    timeout: Duration,
}

impl BatchExecutor {
    /// Create a new BatchExecutor.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Create a BatchExecutor from a timeout in milliseconds.
    pub fn from_millis(timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(timeout_ms))
    }

    /// Per-task timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `tasks` and return the values of those that succeeded in time.
    pub async fn run<I, F>(&self, tasks: I) -> Vec<<F::Output as Settled>::Value>
    where
        I: IntoIterator<Item = F>,
        F: Future + Send + 'static,
        F::Output: Settled,
    {
        run_all_with_timeout(tasks, self.timeout).await
    }

    /// Run `tasks` and report how each one settled.
    pub async fn settle<I, F>(&self, tasks: I) -> Vec<Settlement<<F::Output as Settled>::Value>>
    where
        I: IntoIterator<Item = F>,
        F: Future + Send + 'static,
        F::Output: Settled,
    {
        settle_all(tasks, self.timeout).await
    }
}

/// Race every task against `timeout` and report one settlement per task.
///
/// The returned list has the same length and order as `tasks`.
pub async fn settle_all<I, F>(tasks: I, timeout: Duration) -> Vec<Settlement<<F::Output as Settled>::Value>>
where
    I: IntoIterator<Item = F>,
    F: Future + Send + 'static,
    F::Output: Settled,
{
    let races = tasks.into_iter().map(|task| settle_one(task, timeout));
    let settlements = join_all(races).await;

    for (index, settlement) in settlements.iter().enumerate() {
        if let Some(reason) = settlement.rejection() {
            debug!(index, reason = %reason, "Dropping task from batch");
        }
    }

    settlements
}

/// Race every task against `timeout` and return the successful values.
///
/// Survivors keep their relative submission order. The result is never
/// longer than `tasks` and carries no indication of which tasks were dropped.
pub async fn run_all_with_timeout<I, F>(tasks: I, timeout: Duration) -> Vec<<F::Output as Settled>::Value>
where
    I: IntoIterator<Item = F>,
    F: Future + Send + 'static,
    F::Output: Settled,
{
    let settlements = settle_all(tasks, timeout).await;
    let total = settlements.len();

    let values: Vec<_> = settlements
        .into_iter()
        .filter_map(Settlement::fulfilled)
        .collect();

    debug!(
        total,
        fulfilled = values.len(),
        timeout_ms = timeout.as_millis() as u64,
        "Batch settled"
    );

    values
}

async fn settle_one<F>(task: F, timeout: Duration) -> Settlement<<F::Output as Settled>::Value>
where
    F: Future + Send + 'static,
    F::Output: Settled,
{
    let guarded = AssertUnwindSafe(task).catch_unwind();

    match race(guarded, timeout).await {
        RaceResult::TimedOut => Settlement::Rejected(Rejection::TimedOut),
        RaceResult::Completed(Err(_)) => Settlement::Rejected(Rejection::Panicked),
        RaceResult::Completed(Ok(output)) => match output.into_outcome() {
            Outcome::Present(value) => Settlement::Fulfilled(value),
            Outcome::Absent => Settlement::Rejected(Rejection::Failed),
        },
    }
}
