//! Game configuration types.
//!
//! Defaults reproduce the classic chat game: two players, three rounds,
//! one six-sided die, ties won by whoever joined first.
//!
//! Fields are private so every `GameConfig` in existence has at least one
//! round and at least one die face. Builders assert; deserialization
//! returns [`ConfigError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seats per game. Not configurable.
pub const PLAYERS_PER_GAME: usize = 2;

/// Rounds in a standard game.
pub const DEFAULT_ROUNDS: u32 = 3;

/// Faces on the standard die.
pub const DEFAULT_DIE_SIDES: u8 = 6;

/// How equal top totals are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The earliest joiner among the tied players wins.
    #[default]
    FirstJoined,
    /// Every tied player is announced as a winner.
    Shared,
}

/// A configuration that cannot describe a playable game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `rounds` was 0.
    #[error("rounds must be at least 1")]
    ZeroRounds,
    /// `die_sides` was 0.
    #[error("die must have at least 1 side")]
    ZeroDieSides,
}

/// Per-session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rounds: u32,
    die_sides: u8,
    tie_break: TieBreak,
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
#[serde(default)]
struct RawGameConfig {
    rounds: u32,
    die_sides: u8,
    tie_break: TieBreak,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            die_sides: DEFAULT_DIE_SIDES,
            tie_break: TieBreak::default(),
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        if raw.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if raw.die_sides == 0 {
            return Err(ConfigError::ZeroDieSides);
        }
        Ok(Self {
            rounds: raw.rounds,
            die_sides: raw.die_sides,
            tie_break: raw.tie_break,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            die_sides: DEFAULT_DIE_SIDES,
            tie_break: TieBreak::default(),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must play at least 1 round");
        self.rounds = rounds;
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u8) -> Self {
        assert!(sides > 0, "Die must have at least 1 side");
        self.die_sides = sides;
        self
    }

    /// Set the tie policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Number of rounds; every player rolls once per round. Always >= 1.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Faces on the die. Always >= 1.
    #[must_use]
    pub fn die_sides(&self) -> u8 {
        self.die_sides
    }

    /// Tie resolution policy.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Check that a face could have come from this die.
    #[must_use]
    pub fn is_valid_face(&self, value: u8) -> bool {
        (1..=self.die_sides).contains(&value)
    }
}
