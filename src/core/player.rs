//! Player identification and per-player roll history.
//!
//! ## PlayerId
//!
//! Opaque identity handed to us by the chat platform (a user ID).
//! The engine never interprets it beyond equality.
//!
//! ## Player
//!
//! A registered participant: display name plus the die faces rolled so far,
//! in roll order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Platform-issued player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw platform ID.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User {}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Roll history sized for a standard three-round game without heap allocation.
pub type Rolls = SmallVec<[u8; 3]>;

/// A registered participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Platform identity.
    pub id: PlayerId,

    /// Name shown in announcements.
    pub name: String,

    /// Faces rolled so far, oldest first.
    rolls: Rolls,
}

impl Player {
    /// Create a player with an empty roll history.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rolls: SmallVec::new(),
        }
    }

    /// Faces rolled so far.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Number of rolls taken.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Append a face to the history.
    pub fn push_roll(&mut self, value: u8) {
        self.rolls.push(value);
    }

    /// Sum of all rolls.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.rolls.iter().map(|&r| u32::from(r)).sum()
    }
}
