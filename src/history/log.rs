//! Bounded, newest-first event log.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Keeps the most recent `capacity` events, newest first.
///
/// Entries are never modified once recorded; the oldest is dropped when a
/// new one would exceed the capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<GameEvent>,
    capacity: usize,
}

impl EventLog {
    /// An empty log holding at most `capacity` entries (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event as the newest entry.
    pub fn record(&mut self, event: GameEvent) {
        self.entries.push_front(event);
        self.entries.truncate(self.capacity);
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&GameEvent> {
        self.entries.front()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Plain-text rendering, one `HH:MM:SS message` line per entry,
    /// newest first.
    #[must_use]
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for event in &self.entries {
            out.push_str(&format!("{} {}\n", event.time_label(), event.message));
        }
        out
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}
