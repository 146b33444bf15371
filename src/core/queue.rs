//! The serial command queue: dispatch, removal, drain waits, and the worker
//! pipeline.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{oneshot, Notify};

use crate::config::QueueConfig;
use crate::core::backlog::{Backlog, Entry, DRAIN_MARKER_ID};
use crate::core::command::Command;
use crate::core::error::{CommandError, SchedulerError};
use crate::core::sink::ReportingSink;
use crate::runtime::TokioSpawner;

/// Abstraction for spawning task execution on a runtime.
///
/// The queue spawns its worker and every command action through this seam.
/// The worker itself uses tokio timers for the watchdog, so the spawner must
/// place tasks where a tokio time driver is available.
pub trait Spawn {
    /// Spawn an async task to completion.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Shared state between the queue handle and its worker task.
struct QueueInner {
    backlog: Mutex<Backlog>,
    /// Wakes the worker when the backlog transitions from empty.
    wake: Notify,
    shutdown: AtomicBool,
    fail_fast: bool,
    default_timeout: Duration,
    sink: ReportingSink,
}

impl QueueInner {
    fn discard_backlog(&self) {
        self.backlog.lock().clear_commands();
    }
}

/// A queue of asynchronous commands that run one at a time, strictly in
/// dispatch order.
///
/// Serialization comes from a single dedicated worker task draining the
/// backlog: the next command never starts until the previous one's
/// settlement (success, handled failure, or watchdog timeout) has been
/// fully processed. Dispatching while a command runs only appends to the
/// backlog; dispatching while the queue is idle wakes the worker.
///
/// Failures are resolved locally per command (dedicated handler, else the
/// queue-wide sink) and never stop the pipeline. With `fail_fast` enabled, a
/// failure additionally discards all not-yet-started commands.
///
/// Dropping the queue stops the worker after the in-flight command settles;
/// undrained backlog entries are discarded.
pub struct CommandQueue {
    inner: Arc<QueueInner>,
}

impl std::fmt::Debug for CommandQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandQueue")
            .field("fail_fast", &self.inner.fail_fast)
            .field("default_timeout", &self.inner.default_timeout)
            .finish_non_exhaustive()
    }
}

impl CommandQueue {
    /// Create a queue on the current tokio runtime with the diagnostic
    /// reporting sink.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn new(config: QueueConfig) -> Self {
        Self::with_spawner(config, ReportingSink::Diagnostic, TokioSpawner::current())
    }

    /// Create a queue from explicit parts and start its worker on `spawner`.
    pub fn with_spawner<S>(config: QueueConfig, sink: ReportingSink, spawner: S) -> Self
    where
        S: Spawn + Clone + Send + Sync + 'static,
    {
        let inner = Arc::new(QueueInner {
            backlog: Mutex::new(Backlog::new()),
            wake: Notify::new(),
            shutdown: AtomicBool::new(false),
            fail_fast: config.fail_fast,
            default_timeout: Duration::from_millis(config.default_timeout_ms),
            sink,
        });
        spawner.spawn(worker_loop(Arc::clone(&inner), spawner.clone()));
        Self { inner }
    }

    /// Append a command to the backlog; it runs after everything dispatched
    /// before it has settled.
    ///
    /// Duplicate ids are permitted and processed independently. Failures
    /// inside the command never propagate through `dispatch`.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::ReservedId`] when the command carries the internal
    /// drain-marker id; the command is not queued.
    pub fn dispatch<C: Command>(&self, command: C) -> Result<(), SchedulerError> {
        if command.id() == DRAIN_MARKER_ID {
            return Err(SchedulerError::ReservedId(command.id().to_owned()));
        }
        self.inner.backlog.lock().push_command(Box::new(command));
        self.inner.wake.notify_one();
        Ok(())
    }

    /// Remove every pending command matching `command_id`, preserving the
    /// relative order of survivors.
    ///
    /// Best-effort: no match is not an error, and a command already popped
    /// and running is unaffected. A removed command never executes and never
    /// triggers any handler.
    pub fn remove(&self, command_id: &str) {
        self.inner.backlog.lock().remove(command_id);
    }

    /// Drop all pending commands immediately, without invoking any handler.
    ///
    /// The currently running command is unaffected and runs to completion.
    /// Outstanding [`finish`](Self::finish) waits still resolve.
    pub fn clear(&self) {
        self.inner.discard_backlog();
    }

    /// Whether this queue was constructed with fail-fast enabled.
    #[must_use]
    pub fn fail_fast_enabled(&self) -> bool {
        self.inner.fail_fast
    }

    /// Wait for everything dispatched before this call to settle.
    ///
    /// Enqueues a drain marker at the current backlog tail and resolves when
    /// the worker reaches it. Commands dispatched after the call extend the
    /// backlog past the marker and are not awaited.
    pub fn finish(&self) -> impl Future<Output = ()> + Send + 'static {
        let (done_tx, done_rx) = oneshot::channel();
        {
            let mut backlog = self.inner.backlog.lock();
            backlog.push_marker(done_tx);
        }
        self.inner.wake.notify_one();
        async move {
            // The sender is dropped if the queue shuts down first; either
            // way the chain up to the marker is no longer outstanding.
            let _ = done_rx.await;
        }
    }
}

impl Drop for CommandQueue {
    fn drop(&mut self) {
        self.inner.shutdown.store(true, Ordering::Release);
        self.inner.wake.notify_one();
    }
}

/// Single consumer of the backlog. At most one command action is awaited at
/// any instant; the loop parks on the wake signal when the backlog empties.
async fn worker_loop<S: Spawn>(inner: Arc<QueueInner>, spawner: S) {
    loop {
        if inner.shutdown.load(Ordering::Acquire) {
            tracing::debug!("command queue worker stopping");
            break;
        }
        let next = inner.backlog.lock().pop();
        match next {
            Some(Entry::Command(command)) => run_command(&inner, &spawner, command).await,
            Some(Entry::DrainMarker(done)) => {
                let _ = done.send(());
            }
            None => inner.wake.notified().await,
        }
    }
}

/// One pipeline step: run a command race against its watchdog, then route
/// the settlement.
async fn run_command<S: Spawn>(inner: &QueueInner, spawner: &S, mut command: Box<dyn Command>) {
    let command_id = command.id().to_owned();
    let timeout = command.timeout().unwrap_or(inner.default_timeout);
    let handler = command.error_handler();

    // The action runs as its own task so a watchdog timeout leaves it
    // running; dropping the receiver discards any late settlement.
    let (settled_tx, settled_rx) = oneshot::channel();
    spawner.spawn(async move {
        let _ = settled_tx.send(command.run().await);
    });

    tracing::debug!(command = %command_id, ?timeout, "command started");

    let outcome = tokio::select! {
        biased;
        settled = settled_rx => settled.unwrap_or_else(|_| {
            // The action task died without settling (e.g. panicked).
            Err(CommandError::new("terminated without settling", command_id.as_str()).into())
        }),
        () = tokio::time::sleep(timeout) => {
            Err(CommandError::timed_out(command_id.as_str(), timeout).into())
        }
    };

    match outcome {
        Ok(()) => tracing::debug!(command = %command_id, "command completed"),
        Err(failure) => {
            tracing::debug!(command = %command_id, "routing command failure");
            match handler {
                Some(handler) => handler(failure),
                None => inner.sink.report(&command_id, failure),
            }
            if inner.fail_fast {
                inner.discard_backlog();
            }
        }
    }
}
