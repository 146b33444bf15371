//! Error types for the command scheduler.

use std::time::Duration;

use thiserror::Error;

/// Settlement of a command's action: success, or an arbitrary failure value.
///
/// Failure values are deliberately opaque: an action may fail with a
/// structured error, a bare message, or anything else convertible into
/// [`anyhow::Error`]. Handlers receive the value unchanged and must not
/// assume a particular concrete type.
pub type ActionResult = Result<(), anyhow::Error>;

/// Structured failure attributed to a single command.
///
/// Built by the scheduler when the watchdog fires, and constructible by
/// command authors for their own failures. The display rendering is the
/// message alone; the command id rides along as context and can be read
/// back through [`CommandError::command_id`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
    command_id: String,
}

impl CommandError {
    /// Create a failure with a message attributed to `command_id`.
    #[must_use]
    pub fn new(message: impl Into<String>, command_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            command_id: command_id.into(),
        }
    }

    /// Failure synthesized when a command's watchdog fires.
    #[must_use]
    pub fn timed_out(command_id: impl Into<String>, after: Duration) -> Self {
        Self::new(
            format!("timeout after {} milliseconds", after.as_millis()),
            command_id,
        )
    }

    /// Human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Id of the command this failure is attributed to.
    #[must_use]
    pub fn command_id(&self) -> &str {
        &self.command_id
    }
}

/// Errors surfaced synchronously by queue construction and dispatch.
///
/// These are configuration errors, rejected before anything is queued.
/// Failures *inside* commands never take this shape; they flow through the
/// per-command handler chain instead.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The command id collides with an id the queue reserves internally.
    #[error("command id `{0}` is reserved for internal use")]
    ReservedId(String),
    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
