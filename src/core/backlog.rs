//! FIFO backlog of dispatched-but-not-yet-started work.

use std::collections::VecDeque;

use tokio::sync::oneshot;

use crate::core::command::Command;

/// Command id reserved for the queue's internal drain markers.
///
/// [`CommandQueue::dispatch`](crate::core::CommandQueue::dispatch) rejects
/// commands carrying this id so caller work can never be confused with a
/// [`finish`](crate::core::CommandQueue::finish) barrier.
pub const DRAIN_MARKER_ID: &str = "__drain_marker__";

/// A single backlog slot.
pub(crate) enum Entry {
    /// Caller work awaiting its turn.
    Command(Box<dyn Command>),
    /// Barrier recording a `finish` call; signalled when the worker reaches it.
    DrainMarker(oneshot::Sender<()>),
}

/// Ordered backlog. Insertion order is dispatch order; nothing reorders it.
pub(crate) struct Backlog {
    entries: VecDeque<Entry>,
}

impl Backlog {
    pub(crate) fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub(crate) fn push_command(&mut self, command: Box<dyn Command>) {
        self.entries.push_back(Entry::Command(command));
    }

    pub(crate) fn push_marker(&mut self, done: oneshot::Sender<()>) {
        self.entries.push_back(Entry::DrainMarker(done));
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.entries.pop_front()
    }

    /// Drop every pending command whose id matches, preserving the relative
    /// order of survivors. Markers never match.
    pub(crate) fn remove(&mut self, command_id: &str) {
        self.entries.retain(|entry| match entry {
            Entry::Command(command) => command.id() != command_id,
            Entry::DrainMarker(_) => true,
        });
    }

    /// Drop every pending command. Markers are retained so outstanding drain
    /// waits still resolve.
    pub(crate) fn clear_commands(&mut self) {
        self.entries
            .retain(|entry| matches!(entry, Entry::DrainMarker(_)));
    }

    #[cfg(test)]
    pub(crate) fn pending_commands(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, Entry::Command(_)))
            .count()
    }
}
