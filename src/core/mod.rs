//! Core scheduling abstractions: the command contract and the serial queue.

pub mod backlog;
pub mod command;
pub mod error;
pub mod queue;
pub mod sink;

pub use backlog::DRAIN_MARKER_ID;
pub use command::{BoxedActionFuture, Command, FailureHandler, FnCommand};
pub use error::{ActionResult, CommandError, SchedulerError};
pub use queue::{CommandQueue, Spawn};
pub use sink::{ReportingSink, SharedFailureHandler};
