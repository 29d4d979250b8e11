//! Session state: who is seated, whose turn it is, which round.
//!
//! ## Invariants
//!
//! - At most [`PLAYERS_PER_GAME`] players, kept in join order.
//! - While `InProgress`: exactly two players, `turn_index` points at one of
//!   them, `current_round` is within `1..=rounds`.
//! - Otherwise `current_round == 0` and `turn_index == 0`.
//!
//! `SessionState` only stores data. The transitions live in
//! [`GameSession`](crate::rules::GameSession).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::PLAYERS_PER_GAME;
use super::player::{Player, PlayerId};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Seats open.
    #[default]
    WaitingForPlayers,
    /// Players are rolling.
    InProgress,
    /// Results are being computed. Never observed between intents.
    Ended,
}

/// Raw session data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Seated players in join order.
    pub players: SmallVec<[Player; PLAYERS_PER_GAME]>,

    /// Current lifecycle phase.
    pub phase: Phase,

    /// 1-based round while in progress, 0 otherwise.
    pub current_round: u32,

    /// Index into `players` of whoever rolls next.
    pub turn_index: usize,
}

impl SessionState {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether both seats are taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= PLAYERS_PER_GAME
    }

    /// Join-order position of a player.
    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Whether a player is seated.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.position(id).is_some()
    }

    /// Look up a seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The player whose turn it is, if a game is running.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.players.get(self.turn_index)
    }

    /// Clear everything back to an empty, joinable session.
    pub fn reset(&mut self) {
        self.players.clear();
        self.phase = Phase::WaitingForPlayers;
        self.current_round = 0;
        self.turn_index = 0;
    }
}
