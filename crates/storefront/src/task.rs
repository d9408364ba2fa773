//! Cancellable handles for the page's background work.
//!
//! Checkout and contact-form sends run as spawned tokio tasks. The page keeps
//! the [`TaskHandle`] and either awaits it or aborts it.

use std::future::Future;

use thiserror::Error;
use tokio::task::JoinHandle;

/// Ways a background task can end without a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The task ran and reported a failure.
    #[error("{0}")]
    Failed(String),

    /// The task was aborted through its handle.
    #[error("task was cancelled")]
    Cancelled,

    /// The task panicked.
    #[error("task panicked: {0}")]
    Panicked(String),
}

/// Handle to a spawned task producing `Result<T, TaskError>`.
#[derive(Debug)]
pub struct TaskHandle<T> {
    label: &'static str,
    inner: JoinHandle<Result<T, TaskError>>,
}

impl<T: Send + 'static> TaskHandle<T> {
    /// Spawn `future` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = Result<T, TaskError>> + Send + 'static,
    {
        tracing::debug!(task = label, "Spawning task");
        Self {
            label,
            inner: tokio::spawn(future),
        }
    }

    /// Name given at spawn time.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Request cancellation. The next `join` reports [`TaskError::Cancelled`]
    /// unless the task had already finished.
    pub fn abort(&self) {
        tracing::debug!(task = self.label, "Aborting task");
        self.inner.abort();
    }

    /// Wait for the task's outcome.
    ///
    /// Must not be called again after it has returned.
    pub async fn join(&mut self) -> Result<T, TaskError> {
        match (&mut self.inner).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(TaskError::Cancelled),
            Err(e) => Err(TaskError::Panicked(e.to_string())),
        }
    }
}
