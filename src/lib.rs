//! # Serial Dispatch
//!
//! A strictly ordered command queue for asynchronous workloads.
//!
//! This library provides a serial task scheduler: a queue of asynchronous
//! units of work ("commands") that execute one at a time, in dispatch order,
//! regardless of how many are enqueued concurrently or how long each takes
//! to settle.
//!
//! ## Core Problem Solved
//!
//! Independent callers often submit operations that must not interleave:
//! sequential state mutations, ordered network calls, protocol handshakes.
//! Guarding those with a lock moves the race into "who gets the lock next";
//! a serial queue removes it entirely:
//!
//! - **Strict ordering**: completion order equals dispatch order
//! - **No interleaving**: the next command never starts until the previous
//!   one's settlement has been fully processed
//! - **Local failure handling**: a failing command is resolved by its own
//!   handler (or the queue-wide sink) and never aborts the pipeline
//! - **Watchdog timeouts**: an overdue command is reported without halting
//!   its actual execution
//!
//! ## Key Features
//!
//! - **Single worker pipeline**: one dedicated task drains the backlog; the
//!   backlog itself is the only shared state
//! - **Fail-fast or fail-safe**: a failure either discards the remaining
//!   backlog or is isolated to the failing command, chosen at construction
//! - **Per-command timeout override** falling back to a configured default
//! - **Drain barriers**: `finish()` resolves once everything dispatched
//!   before the call has settled
//! - **Runtime seam**: spawning goes through the [`core::Spawn`] trait, with
//!   a tokio adapter provided
//!
//! ## Example
//!
//! ```rust,ignore
//! use serial_dispatch::builders::CommandQueueBuilder;
//! use serial_dispatch::core::FnCommand;
//! use std::time::Duration;
//!
//! let queue = CommandQueueBuilder::new()
//!     .default_timeout(Duration::from_secs(5))
//!     .default_error_handler(|failure| tracing::warn!("command failed: {failure}"))
//!     .build()?;
//!
//! queue.dispatch(FnCommand::new("save-settings", || async {
//!     persist_settings().await
//! }))?;
//! queue.dispatch(
//!     FnCommand::new("notify-peer", || async { push_update().await })
//!         .with_timeout(Duration::from_millis(250)),
//! )?;
//!
//! queue.finish().await; // both commands have settled
//! ```
//!
//! A timed-out command is *detected*, not cancelled: its action keeps
//! running detached and any late settlement is discarded. An action that
//! never settles therefore keeps a task alive indefinitely; cooperative
//! cancellation tokens are an extension left to command authors.
//!
//! For complete examples, see `tests/serial_queue_test.rs` and
//! `tests/watchdog_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: commands, queue, errors, reporting.
pub mod core;
/// Configuration models for the queue.
pub mod config;
/// Builders to construct queue components from configuration.
pub mod builders;
/// Runtime adapters for task spawning.
pub mod runtime;
/// Shared utilities.
pub mod util;
