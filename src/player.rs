//! Player progress counters.

use serde::{Deserialize, Serialize};

/// Per-run player bookkeeping. Position lives on the maze; the session
/// combines both into a [`PlayerSnapshot`] for the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    /// Cumulative score. Penalties can push it negative.
    pub score: i64,
    /// Questions answered correctly.
    pub questions_answered: u32,
    pub hints_used: u32,
    pub doors_opened: u32,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero everything for a fresh run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Current (row, col) room.
    pub position: (usize, usize),
    pub score: i64,
    pub questions_answered: u32,
}
