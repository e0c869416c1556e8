//! Safe invocation: run an operation and absorb every failure.
//!
//! A failure is an `Err`, a `None` or a panic. All three come back as
//! [`Outcome::Absent`]; the returned value (or future) itself never fails.
//! There is no timeout here, so a future that never settles keeps
//! [`safe_await`] pending. Pair it with [`crate::deadline`] when that matters.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;
use tracing::debug;

use settle_core::{Outcome, Settled};

/// Run a synchronous operation inline.
pub fn safe_call<F, R>(op: F) -> Outcome<R::Value>
where
    F: FnOnce() -> R,
    R: Settled,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(output) => absorb(output),
        Err(_) => {
            debug!("Operation panicked, suppressing");
            Outcome::Absent
        }
    }
}

/// Await an already-created future.
pub async fn safe_await<F>(operation: F) -> Outcome<<F::Output as Settled>::Value>
where
    F: Future,
    F::Output: Settled,
{
    match AssertUnwindSafe(operation).catch_unwind().await {
        Ok(output) => absorb(output),
        Err(_) => {
            debug!("Operation panicked while polled, suppressing");
            Outcome::Absent
        }
    }
}

/// Invoke an async operation and await it.
///
/// Unlike [`safe_await`], a panic raised while *creating* the future is
/// absorbed too.
pub async fn safe_call_async<F, Fut>(op: F) -> Outcome<<Fut::Output as Settled>::Value>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    Fut::Output: Settled,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(operation) => safe_await(operation).await,
        Err(_) => {
            debug!("Operation panicked before returning a future, suppressing");
            Outcome::Absent
        }
    }
}

fn absorb<R: Settled>(output: R) -> Outcome<R::Value> {
    let outcome = output.into_outcome();
    if outcome.is_absent() {
        debug!("Operation failed, suppressing");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
        input.parse()
    }

    #[test]
    fn test_safe_call_success() {
        assert_eq!(safe_call(|| parse("42")), Outcome::Present(42));
    }

    #[test]
    fn test_safe_call_error_is_absent() {
        assert_eq!(safe_call(|| parse("forty-two")), Outcome::Absent);
    }

    #[test]
    fn test_safe_call_none_is_absent() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(safe_call(|| empty.first().copied()), Outcome::Absent);
    }

    #[test]
    fn test_safe_call_panic_is_absent() {
        let outcome = safe_call(|| -> Result<u8, String> { panic!("boom") });
        assert_eq!(outcome, Outcome::Absent);
    }

    #[tokio::test]
    async fn test_safe_await_success() {
        let outcome = safe_await(async { Ok::<_, String>("done") }).await;
        assert_eq!(outcome, Outcome::Present("done"));
    }

    #[tokio::test]
    async fn test_safe_await_rejection_is_absent() {
        let outcome = safe_await(async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            Err::<u8, _>("rejected")
        })
        .await;
        assert_eq!(outcome, Outcome::Absent);
    }

    #[tokio::test]
    async fn test_safe_await_panic_is_absent() {
        let outcome = safe_await(async {
            tokio::task::yield_now().await;
            if true {
                panic!("panicked mid-flight");
            }
            Ok::<u8, String>(1)
        })
        .await;
        assert_eq!(outcome, Outcome::Absent);
    }

    #[tokio::test]
    async fn test_safe_call_async_absorbs_creation_panic() {
        let outcome = safe_call_async(|| -> std::future::Ready<Result<u8, String>> {
            panic!("could not build future")
        })
        .await;
        assert_eq!(outcome, Outcome::Absent);

        let outcome = safe_call_async(|| async { Some(9) }).await;
        assert_eq!(outcome, Outcome::Present(9));
    }

    #[tokio::test(start_paused = true)]
    async fn test_safe_await_has_no_timeout() {
        let pending = safe_await(std::future::pending::<Result<u8, String>>());
        let waited = tokio::time::timeout(Duration::from_secs(3600), pending).await;
        assert!(waited.is_err());
    }
}
