//! Bounded queue of timestamped player messages.

use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of messages kept at once.
pub const CAPACITY: usize = 3;

/// How long a message stays visible after it is pushed.
pub const DISPLAY_WINDOW: Duration = Duration::from_millis(5000);

/// A message and the time it was pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Text shown to the player.
    pub text: String,
    /// Session time at insertion.
    pub at: Duration,
}

/// FIFO queue holding the last [`CAPACITY`] messages.
///
/// Only [`MessageQueue::push`] evicts. An expired message is hidden from
/// [`MessageQueue::visible_at`] but keeps its slot until newer messages push
/// it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageQueue {
    entries: VecDeque<Message>,
}

impl MessageQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, dropping the oldest if over capacity.
    pub fn push(&mut self, text: impl Into<String>, at: Duration) {
        self.entries.push_back(Message {
            text: text.into(),
            at,
        });
        while self.entries.len() > CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Texts still inside the display window at `now`, oldest first.
    pub fn visible_at(&self, now: Duration) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|m| now.saturating_sub(m.at) < DISPLAY_WINDOW)
            .map(|m| m.text.as_str())
            .collect()
    }

    /// All queued messages, oldest first, regardless of age.
    pub fn entries(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    /// Number of queued messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
