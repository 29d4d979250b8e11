//! Rejections returned by session operations.
//!
//! Every variant is recoverable. `Display` is the reply shown to the user
//! in chat.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an intent was rejected. A rejected intent leaves the session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameError {
    /// Join attempted with both seats taken.
    #[error("The game is already full!")]
    GameFull,

    /// Same identity tried to join twice.
    #[error("You are already registered in the game!")]
    AlreadyRegistered,

    /// Roll attempted while no game is running.
    #[error("Game has not started. Please wait for players to join.")]
    GameNotActive,

    /// Roll attempted by someone who never joined.
    #[error("You are not part of the game.")]
    NotAParticipant,

    /// Roll attempted out of turn order.
    #[error("It's not your turn to roll the dice.")]
    NotYourTurn,

    /// A platform-supplied face outside the die's range.
    #[error("That is not a valid die face.")]
    InvalidDieValue,
}

impl GameError {
    /// Stable snake_case identifier, for logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            GameError::GameFull => "game_full",
            GameError::AlreadyRegistered => "already_registered",
            GameError::GameNotActive => "game_not_active",
            GameError::NotAParticipant => "not_a_participant",
            GameError::NotYourTurn => "not_your_turn",
            GameError::InvalidDieValue => "invalid_die_value",
        }
    }
}
