//! Multi-room play: one independent session per chat room.
//!
//! - `SessionRegistry`: room key to `GameSession`
//! - `Notifier`: where announcement text goes
//! - `Table`: intents in, announcements out

pub mod dispatch;
pub mod notifier;
pub mod registry;

pub use dispatch::Table;
pub use notifier::{Notifier, RecordingNotifier};
pub use registry::SessionRegistry;
