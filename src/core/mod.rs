//! Core types: players, session state, intents, errors, die sources, configuration.
//!
//! Nothing in here knows about the chat platform. Front ends translate their
//! events into [`Intent`]s and render announcements however they like.

pub mod player;
pub mod rng;
pub mod config;
pub mod intent;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId, Rolls};
pub use rng::{GameRng, RandomSource, ScriptedDice};
pub use config::{ConfigError, GameConfig, TieBreak, DEFAULT_DIE_SIDES, DEFAULT_ROUNDS, PLAYERS_PER_GAME};
pub use intent::Intent;
pub use error::GameError;
pub use state::{Phase, SessionState};
