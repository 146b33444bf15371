//! Builder to assemble a command queue from configuration.

use std::time::Duration;

use crate::config::QueueConfig;
use crate::core::{CommandQueue, ReportingSink, SchedulerError, Spawn};
use crate::runtime::TokioSpawner;

/// Assembles a [`CommandQueue`] from configuration plus optional wiring.
///
/// ```rust,ignore
/// let queue = CommandQueueBuilder::new()
///     .fail_fast(true)
///     .default_timeout(Duration::from_secs(2))
///     .default_error_handler(|failure| tracing::warn!("dropped: {failure}"))
///     .build()?;
/// ```
pub struct CommandQueueBuilder {
    config: QueueConfig,
    sink: ReportingSink,
}

impl CommandQueueBuilder {
    /// Start from default configuration and the diagnostic reporting sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: QueueConfig::default(),
            sink: ReportingSink::Diagnostic,
        }
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: QueueConfig) -> Self {
        Self {
            config,
            sink: ReportingSink::Diagnostic,
        }
    }

    /// Discard the remaining backlog whenever a command fails.
    #[must_use]
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.config.fail_fast = enabled;
        self
    }

    /// Watchdog duration for commands without their own override.
    #[must_use]
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout_ms =
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Install a process-wide failure handler, replacing the diagnostic
    /// fallback. Invoked for every failing command without a handler of its
    /// own.
    #[must_use]
    pub fn default_error_handler<H>(mut self, handler: H) -> Self
    where
        H: Fn(anyhow::Error) + Send + Sync + 'static,
    {
        self.sink = ReportingSink::handler(handler);
        self
    }

    /// Validate the configuration and start the queue on the current tokio
    /// runtime.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::InvalidConfig`] when validation fails.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn build(self) -> Result<CommandQueue, SchedulerError> {
        self.build_with_spawner(TokioSpawner::current())
    }

    /// Validate the configuration and start the queue on `spawner`.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::InvalidConfig`] when validation fails.
    pub fn build_with_spawner<S>(self, spawner: S) -> Result<CommandQueue, SchedulerError>
    where
        S: Spawn + Clone + Send + Sync + 'static,
    {
        self.config
            .validate()
            .map_err(SchedulerError::InvalidConfig)?;
        Ok(CommandQueue::with_spawner(self.config, self.sink, spawner))
    }
}

impl Default for CommandQueueBuilder {
    fn default() -> Self {
        Self::new()
    }
}
