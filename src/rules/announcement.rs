//! Announcements: what a transition asks the front end to say.
//!
//! Each variant carries the data needed to render it; `Display` produces the
//! plain chat text. Front ends with richer rendering (buttons, markup) can
//! match on the variant instead.

use serde::{Deserialize, Serialize};

use super::scoring::GameSummary;

/// Outbound notification describing a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Announcement {
    /// Invitation to join. Front ends attach their join control here.
    Welcome,
    /// A player took a seat.
    PlayerJoined { name: String },
    /// Both seats taken; rolling begins.
    GameStarting { rounds: u32 },
    /// Whose roll is accepted next.
    TurnPrompt { name: String, round: u32, rounds: u32 },
    /// A roll was recorded.
    Rolled { name: String, value: u8 },
    /// Final standings.
    Results(GameSummary),
}

fn times(rounds: u32) -> String {
    match rounds {
        1 => "once".to_string(),
        2 => "twice".to_string(),
        3 => "three times".to_string(),
        n => format!("{n} times"),
    }
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Announcement::Welcome => write!(f, "Welcome to the Dice Game! Click below to join."),
            Announcement::PlayerJoined { name } => write!(f, "{name} has joined the game."),
            Announcement::GameStarting { rounds } => write!(
                f,
                "Game is starting now! Each player will roll dice {}.",
                times(*rounds)
            ),
            Announcement::TurnPrompt { name, round, rounds } => {
                write!(f, "{name}'s turn to roll. Round {round}/{rounds}")
            }
            Announcement::Rolled { name, value } => write!(f, "{name} rolled a {value}!"),
            Announcement::Results(summary) => write!(f, "{summary}"),
        }
    }
}
