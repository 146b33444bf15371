//! Queue-wide failure reporting.

use std::sync::Arc;

/// Process-wide failure handler shared across every command the queue runs.
pub type SharedFailureHandler = Arc<dyn Fn(anyhow::Error) + Send + Sync + 'static>;

/// Destination for failures of commands that carry no handler of their own.
///
/// Selected once at construction. Either a configured handler receives each
/// failure value, or the failure is emitted on the diagnostic channel;
/// failures are never silently swallowed.
pub enum ReportingSink {
    /// A configured process-wide handler.
    Handler(SharedFailureHandler),
    /// Fallback: report through `tracing::error!` with the command id.
    Diagnostic,
}

impl ReportingSink {
    /// Wrap a closure as the configured handler variant.
    pub fn handler<H>(handler: H) -> Self
    where
        H: Fn(anyhow::Error) + Send + Sync + 'static,
    {
        Self::Handler(Arc::new(handler))
    }

    /// Deliver a failure attributed to `command_id`.
    pub fn report(&self, command_id: &str, failure: anyhow::Error) {
        match self {
            Self::Handler(handler) => handler(failure),
            Self::Diagnostic => {
                tracing::error!(command = %command_id, error = %failure, "command failed");
            }
        }
    }
}

impl Default for ReportingSink {
    fn default() -> Self {
        Self::Diagnostic
    }
}
