//! Feedback messages emitted by the simulation for the UI message pane.

use serde::{Deserialize, Serialize};

use crate::constants::{FEEDBACK_CAPACITY, FEEDBACK_DROP};
use crate::enums::AlertLevel;

/// One line in the feedback pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub turn: u32,
}

/// Bounded feedback log. Holds at most [`FEEDBACK_CAPACITY`] entries; pushing
/// past that drops the oldest [`FEEDBACK_DROP`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackLog {
    entries: Vec<Alert>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: u32, level: AlertLevel, message: impl Into<String>) {
        self.entries.push(Alert {
            level,
            message: message.into(),
            turn,
        });
        if self.entries.len() > FEEDBACK_CAPACITY {
            self.entries.drain(..FEEDBACK_DROP);
        }
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[Alert] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Alert> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
