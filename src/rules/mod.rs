//! Game rules: the session state machine, scoring, and announcements.
//!
//! [`GameSession`] owns one room's state and exposes the join and roll
//! operations. Every successful operation returns the [`Announcement`]s to
//! deliver; it never talks to the chat platform itself.

pub mod announcement;
pub mod engine;
pub mod scoring;

pub use announcement::Announcement;
pub use engine::{Announcements, GameSession};
pub use scoring::{GameResult, GameSummary, Standing};
