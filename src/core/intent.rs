//! Intents: the platform-agnostic requests a chat front end can make.
//!
//! The set is closed. A front end maps its own callback types (button
//! presses, slash commands) onto these variants and hands them to a
//! [`Table`](crate::table::Table).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A request to change session state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Take a seat in the room's game.
    Join {
        /// Who is joining.
        player: PlayerId,
        /// Name to show in announcements.
        name: String,
    },
    /// Roll the die on the caller's turn.
    Roll {
        /// Who is rolling.
        player: PlayerId,
    },
}

impl Intent {
    /// Create a join intent.
    pub fn join(player: PlayerId, name: impl Into<String>) -> Self {
        Intent::Join {
            player,
            name: name.into(),
        }
    }

    /// Create a roll intent.
    pub fn roll(player: PlayerId) -> Self {
        Intent::Roll { player }
    }

    /// The player who issued this intent.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Intent::Join { player, .. } | Intent::Roll { player } => *player,
        }
    }
}
