//! The command contract and a closure-backed implementation.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::error::{ActionResult, CommandError};

/// One-shot handler invoked with the failure value when its command fails.
///
/// Overrides the queue-wide reporting sink for that command only. The
/// handler receives the failure value exactly as the action produced it.
pub type FailureHandler = Box<dyn FnOnce(anyhow::Error) + Send + 'static>;

/// Boxed future produced by a command action.
pub type BoxedActionFuture = Pin<Box<dyn Future<Output = ActionResult> + Send + 'static>>;

type BoxedAction = Box<dyn FnOnce() -> BoxedActionFuture + Send + 'static>;

/// A unit of asynchronous work consumed by the queue.
///
/// Commands are created by the caller, handed to
/// [`CommandQueue::dispatch`](crate::core::CommandQueue::dispatch), and run
/// exactly once when their turn arrives. Ids are the removal/matching key
/// and are not required to be unique; several pending commands may share
/// one.
#[async_trait]
pub trait Command: Send + 'static {
    /// Identifier used for backlog matching and failure attribution.
    fn id(&self) -> &str;

    /// Execute the unit of work. May suspend; settles `Ok(())` or with an
    /// arbitrary failure value.
    async fn run(&mut self) -> ActionResult;

    /// Watchdog duration for this command; `None` falls back to the queue's
    /// configured default.
    fn timeout(&self) -> Option<Duration> {
        None
    }

    /// Take this command's dedicated failure handler, if any.
    ///
    /// Called at most once, before the action starts. Returning `Some`
    /// routes this command's failure to the returned handler instead of the
    /// queue-wide sink.
    fn error_handler(&mut self) -> Option<FailureHandler> {
        None
    }
}

/// Closure-backed [`Command`] for callers that do not want a dedicated type.
///
/// ```rust,ignore
/// let cmd = FnCommand::new("sync-profile", || async {
///     push_profile().await
/// })
/// .with_timeout(Duration::from_millis(250))
/// .with_error_handler(|failure| tracing::warn!("profile sync failed: {failure}"));
/// queue.dispatch(cmd)?;
/// ```
pub struct FnCommand {
    id: String,
    action: Option<BoxedAction>,
    timeout: Option<Duration>,
    error_handler: Option<FailureHandler>,
}

impl FnCommand {
    /// Build a command from an id and an action closure.
    pub fn new<F, Fut>(id: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ActionResult> + Send + 'static,
    {
        Self {
            id: id.into(),
            action: Some(Box::new(move || -> BoxedActionFuture {
                Box::pin(action())
            })),
            timeout: None,
            error_handler: None,
        }
    }

    /// Override the queue's default watchdog duration for this command.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a dedicated failure handler for this command.
    #[must_use]
    pub fn with_error_handler<H>(mut self, handler: H) -> Self
    where
        H: FnOnce(anyhow::Error) + Send + 'static,
    {
        self.error_handler = Some(Box::new(handler));
        self
    }
}

#[async_trait]
impl Command for FnCommand {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&mut self) -> ActionResult {
        match self.action.take() {
            Some(action) => action().await,
            None => Err(CommandError::new("action already consumed", self.id.as_str()).into()),
        }
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn error_handler(&mut self) -> Option<FailureHandler> {
        self.error_handler.take()
    }
}
