//! Race a single operation against a deadline.
//!
//! The timer starts when the race is first polled. The operation is polled
//! before the timer on every wake-up, so an operation that is ready at the
//! same instant the deadline fires wins, and a zero timeout still lets an
//! already-ready operation through.
//!
//! Losing the race does not cancel the operation. Its future, already
//! started, is moved onto the tokio runtime and runs to completion in the
//! background with its output dropped.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::trace;

use settle_core::RaceResult;

use crate::DeadlineError;

/// Race `operation` against `timeout`.
///
/// The operation's own output, success or failure, is returned unchanged
/// inside [`RaceResult::Completed`].
///
/// # Panics
///
/// Panics if called outside a tokio runtime with the time driver enabled.
pub async fn race<F>(operation: F, timeout: Duration) -> RaceResult<F::Output>
where
    F: Future + Send + 'static,
{
    let deadline = tokio::time::sleep(timeout);
    let mut operation = Box::pin(operation);

    tokio::select! {
        biased;

        output = &mut operation => RaceResult::Completed(output),
        _ = deadline => {
            trace!(timeout_ms = timeout.as_millis() as u64, "Deadline elapsed, detaching operation");
            detach(operation);
            RaceResult::TimedOut
        }
    }
}

/// Race a fallible operation, folding the timeout into its error type.
pub async fn with_deadline<F, T, E>(operation: F, timeout: Duration) -> Result<T, DeadlineError<E>>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
{
    match race(operation, timeout).await {
        RaceResult::Completed(Ok(value)) => Ok(value),
        RaceResult::Completed(Err(e)) => Err(DeadlineError::Failed(e)),
        RaceResult::TimedOut => Err(DeadlineError::Exceeded { after: timeout }),
    }
}

fn detach<F>(operation: Pin<Box<F>>)
where
    F: Future + Send + 'static,
{
    tokio::spawn(async move {
        let _ = operation.await;
        trace!("Abandoned operation settled after its deadline");
    });
}
