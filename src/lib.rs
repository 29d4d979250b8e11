//! # dice-duel
//!
//! A two-player dice game for chat bots.
//!
//! Two players join, then take turns rolling a die for three rounds. The
//! highest total wins; equal totals go to whoever joined first (or are
//! shared, see [`TieBreak`]). The session then resets so a new game can
//! start straight away.
//!
//! ## Design Principles
//!
//! 1. **Platform-Agnostic**: the crate consumes [`Intent`]s and produces
//!    [`Announcement`]s. Buttons, slash commands and message delivery
//!    belong to the front end.
//!
//! 2. **Validate, Then Mutate**: a rejected intent returns a [`GameError`]
//!    and leaves the session untouched.
//!
//! 3. **Injected Randomness**: dice come from a [`RandomSource`], so games
//!    replay exactly under a seed or a script.
//!
//! ## Modules
//!
//! - `core`: players, state, intents, errors, dice, configuration
//! - `rules`: the `GameSession` state machine, scoring, announcements
//! - `table`: per-room sessions and the `Table` entry point
//!
//! ## Example
//!
//! ```
//! use dice_duel::{GameConfig, Intent, PlayerId, RecordingNotifier, ScriptedDice, Table};
//!
//! let mut table = Table::new(
//!     GameConfig::default(),
//!     ScriptedDice::new([3, 6, 5, 1, 2, 4]),
//!     RecordingNotifier::new(),
//! );
//! let (alice, bob) = (PlayerId::new(1), PlayerId::new(2));
//! let room = 42_i64;
//!
//! table.handle(&room, Intent::join(alice, "Alice")).unwrap();
//! table.handle(&room, Intent::join(bob, "Bob")).unwrap();
//! for _ in 0..3 {
//!     table.handle(&room, Intent::roll(alice)).unwrap();
//!     table.handle(&room, Intent::roll(bob)).unwrap();
//! }
//!
//! let last = table.notifier().messages_for(&room).last().copied().unwrap();
//! assert!(last.ends_with("The winner is Bob with a score of 11."));
//! ```

pub mod core;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, Intent, Phase, Player, PlayerId,
    RandomSource, ScriptedDice, SessionState, TieBreak, PLAYERS_PER_GAME,
};

pub use crate::rules::{Announcement, Announcements, GameResult, GameSession, GameSummary, Standing};

pub use crate::table::{Notifier, RecordingNotifier, SessionRegistry, Table};
