//! Configuration models for the command queue.

pub mod queue;

pub use queue::QueueConfig;
