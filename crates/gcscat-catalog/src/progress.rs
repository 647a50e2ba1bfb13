//! Progress notifications emitted while downloading.

use crate::TRACING_TARGET_FETCH;
use crate::error::BoxedError;

/// Receiver of download progress.
///
/// Every call is awaited before the download continues. An `Err` aborts the
/// download.
#[async_trait::async_trait]
pub trait ProgressLog: Send + Sync {
    /// A new high-level step started.
    async fn step(&self, message: &str) -> Result<(), BoxedError>;

    /// A measurable task started; `total` is `None` when the size is unknown.
    async fn task(&self, name: &str, label: &str, total: Option<u64>) -> Result<(), BoxedError>;

    /// `current` units of task `name` are done.
    async fn progress(&self, name: &str, current: u64) -> Result<(), BoxedError>;

    /// The operation failed with `message`.
    async fn error(&self, message: &str) -> Result<(), BoxedError>;
}

/// [`ProgressLog`] that records notifications as tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

#[async_trait::async_trait]
impl ProgressLog for TracingProgress {
    async fn step(&self, message: &str) -> Result<(), BoxedError> {
        tracing::info!(target: TRACING_TARGET_FETCH, step = message, "download step");
        Ok(())
    }

    async fn task(&self, name: &str, label: &str, total: Option<u64>) -> Result<(), BoxedError> {
        tracing::info!(target: TRACING_TARGET_FETCH, task = name, label, total, "download task started");
        Ok(())
    }

    async fn progress(&self, name: &str, current: u64) -> Result<(), BoxedError> {
        tracing::debug!(target: TRACING_TARGET_FETCH, task = name, current, "download progress");
        Ok(())
    }

    async fn error(&self, message: &str) -> Result<(), BoxedError> {
        tracing::error!(target: TRACING_TARGET_FETCH, reason = message, "download error");
        Ok(())
    }
}
