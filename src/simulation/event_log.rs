//! Short history of notable happenings, shown in the HUD.
//!
//! Entries are kept newest first. Once the log is full the oldest entry is
//! dropped for every new one.

use std::collections::VecDeque;

/// Entries kept by [`EventLog::default`].
pub const DEFAULT_CAPACITY: usize = 20;

/// What kind of happening an entry describes. The HUD picks a tint per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColor {
    /// The player ate something.
    Food,
    /// A shrub fruited or a seed sprouted.
    Growth,
    /// Food rotted away.
    Decay,
    /// A shrub withered.
    Death,
    /// One of the player's status flags flipped.
    Status,
}

/// One entry of the log.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    /// Play time in seconds when it happened.
    pub time: f32,
    /// Text shown to the player.
    pub description: String,
    /// Kind of happening.
    pub color: EventColor,
}

/// Bounded, newest-first event history.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventLog {
    /// Creates an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a happening at play time `time`.
    pub fn log(&mut self, time: f32, description: impl Into<String>, color: EventColor) {
        self.entries.push_front(LoggedEvent {
            time,
            description: description.into(),
            color,
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.entries
    }
}
