//! Simulated operations for the `batch` command.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::trace;

/// How a simulated task ends once its delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    Fail,
    Panic,
    /// Never settles.
    Hang,
}

/// A simulated task, parsed from `DELAY_MS[:ok|fail|panic|hang]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    pub delay_ms: u64,
    pub behavior: Behavior,
}

/// Errors parsing a task description.
#[derive(Debug, Error)]
pub enum TaskSpecError {
    #[error("Invalid delay '{0}': expected milliseconds")]
    InvalidDelay(String),

    #[error("Unknown behavior '{0}': expected ok, fail, panic or hang")]
    UnknownBehavior(String),
}

/// Failure reported by a simulated task.
#[derive(Debug, Error)]
#[error("task {index} failed after {delay_ms}ms")]
pub struct SimulatedFailure {
    pub index: usize,
    pub delay_ms: u64,
}

impl FromStr for TaskSpec {
    type Err = TaskSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (delay, behavior) = s.split_once(':').unwrap_or((s, "ok"));

        let delay_ms = delay
            .trim()
            .parse()
            .map_err(|_| TaskSpecError::InvalidDelay(delay.to_string()))?;

        let behavior = match behavior.trim() {
            "ok" => Behavior::Succeed,
            "fail" => Behavior::Fail,
            "panic" => Behavior::Panic,
            "hang" => Behavior::Hang,
            other => return Err(TaskSpecError::UnknownBehavior(other.to_string())),
        };

        Ok(Self { delay_ms, behavior })
    }
}

impl TaskSpec {
    /// Build the operation for the task at `index`.
    pub fn into_task(
        self,
        index: usize,
    ) -> impl Future<Output = Result<String, SimulatedFailure>> + Send + 'static {
        async move {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            trace!(index, delay_ms = self.delay_ms, behavior = ?self.behavior, "Simulated task woke");

            match self.behavior {
                Behavior::Succeed => Ok(format!("task-{index}")),
                Behavior::Fail => Err(SimulatedFailure {
                    index,
                    delay_ms: self.delay_ms,
                }),
                Behavior::Panic => panic!("simulated panic in task {index}"),
                Behavior::Hang => std::future::pending().await,
            }
        }
    }
}
