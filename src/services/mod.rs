//! Startup services module.
//!
//! The app's sync and notification initialization used to be commented out at
//! the composition root. Here they are modeled explicitly: each service is an
//! injected, optional asynchronous task the root awaits under a bounded
//! per-task timeout, with an explicit `Skipped` outcome for disabled services.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::errors::ContentError;

type BoxedStartup = Pin<Box<dyn Future<Output = Result<(), ContentError>> + Send>>;

/// Outcome of one startup task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupOutcome {
    Completed,
    /// The service was disabled; its task never ran.
    Skipped,
    /// The task did not finish within the budget.
    TimedOut,
    Failed(String),
}

/// A named startup task, enabled or disabled by configuration.
pub struct StartupTask {
    name: String,
    task: Option<BoxedStartup>,
}

impl StartupTask {
    pub fn enabled<F>(name: impl Into<String>, task: F) -> Self
    where
        F: Future<Output = Result<(), ContentError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            task: Some(Box::pin(task)),
        }
    }

    pub fn disabled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            task: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Run startup tasks in order, each under its own timeout budget.
///
/// Outcomes are reported, never propagated: a failed or slow service must not
/// prevent the app from starting.
pub async fn run_startup_tasks(
    tasks: Vec<StartupTask>,
    budget: Duration,
) -> Vec<(String, StartupOutcome)> {
    let mut outcomes = Vec::with_capacity(tasks.len());

    for StartupTask { name, task } in tasks {
        let outcome = match task {
            None => {
                tracing::info!(task = %name, "Startup task skipped (disabled)");
                StartupOutcome::Skipped
            }
            Some(task) => match tokio::time::timeout(budget, task).await {
                Ok(Ok(())) => {
                    tracing::info!(task = %name, "Startup task completed");
                    StartupOutcome::Completed
                }
                Ok(Err(err)) => {
                    tracing::warn!(task = %name, error = %err, "Startup task failed");
                    StartupOutcome::Failed(err.to_string())
                }
                Err(_) => {
                    tracing::warn!(task = %name, budget_ms = budget.as_millis() as u64, "Startup task timed out");
                    StartupOutcome::TimedOut
                }
            },
        };
        outcomes.push((name, outcome));
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_task_is_skipped() {
        let tasks = vec![StartupTask::disabled("notifications")];
        let outcomes = run_startup_tasks(tasks, Duration::from_millis(50)).await;
        assert_eq!(
            outcomes,
            vec![("notifications".to_string(), StartupOutcome::Skipped)]
        );
    }

    #[tokio::test]
    async fn test_enabled_task_completes() {
        let tasks = vec![StartupTask::enabled("sync", async { Ok(()) })];
        let outcomes = run_startup_tasks(tasks, Duration::from_millis(50)).await;
        assert_eq!(outcomes[0].1, StartupOutcome::Completed);
    }

    #[tokio::test]
    async fn test_slow_task_times_out() {
        let tasks = vec![StartupTask::enabled("sync", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })];
        let outcomes = run_startup_tasks(tasks, Duration::from_millis(10)).await;
        assert_eq!(outcomes[0].1, StartupOutcome::TimedOut);
    }

    #[tokio::test]
    async fn test_failed_task_reports_error() {
        let tasks = vec![StartupTask::enabled("sync", async {
            Err(ContentError::SourceUnavailable("no remote".to_string()))
        })];
        let outcomes = run_startup_tasks(tasks, Duration::from_millis(50)).await;
        match &outcomes[0].1 {
            StartupOutcome::Failed(msg) => assert!(msg.contains("SOURCE_UNAVAILABLE")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
