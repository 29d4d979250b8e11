//! The single entry point a chat front end talks to.
//!
//! [`Table::handle`] runs one intent to completion: the room's session is
//! mutated first, then each announcement is delivered in order. A rejected
//! intent delivers its user-facing message to the same room instead.
//!
//! Only a join opens a room. Once a game's results are out the room's
//! session is dropped, so idle rooms hold nothing.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::notifier::Notifier;
use super::registry::SessionRegistry;
use crate::core::{GameConfig, GameError, Intent, PlayerId, RandomSource};
use crate::rules::{Announcement, Announcements, GameSession};

/// Rooms, a die source and a notifier wired together.
#[derive(Debug)]
pub struct Table<K, R, N> {
    registry: SessionRegistry<K>,
    dice: R,
    notifier: N,
}

impl<K, R, N> Table<K, R, N>
where
    K: Eq + Hash + Clone + Debug,
    R: RandomSource,
    N: Notifier<K>,
{
    /// Create a table with no open rooms.
    pub fn new(config: GameConfig, dice: R, notifier: N) -> Self {
        Self {
            registry: SessionRegistry::new(config),
            dice,
            notifier,
        }
    }

    /// Process one intent for `room`.
    ///
    /// Returns what happened so callers can react beyond the chat text
    /// (e.g. attach a button to a `Welcome`).
    pub fn handle(&mut self, room: &K, intent: Intent) -> Result<Announcements, GameError> {
        debug!(room = ?room, ?intent, "handling intent");
        let result = match intent {
            Intent::Join { .. } => self.registry.session_mut(room).apply(intent, &mut self.dice),
            Intent::Roll { .. } => match self.registry.get_mut(room) {
                Some(session) => session.apply(intent, &mut self.dice),
                None => Err(GameError::GameNotActive),
            },
        };
        self.finish(room, &result);
        self.deliver(room, &result);
        result
    }

    /// Record a roll whose face was decided by the platform.
    pub fn handle_roll_value(
        &mut self,
        room: &K,
        player: PlayerId,
        value: u8,
    ) -> Result<Announcements, GameError> {
        debug!(room = ?room, %player, value, "handling platform roll");
        let result = match self.registry.get_mut(room) {
            Some(session) => session.record_roll(player, value),
            None => Err(GameError::GameNotActive),
        };
        self.finish(room, &result);
        self.deliver(room, &result);
        result
    }

    /// Post the join invitation to `room`.
    pub fn welcome(&mut self, room: &K) -> Announcement {
        let announcement = Announcement::Welcome;
        self.notifier.announce(room, &announcement.to_string());
        announcement
    }

    fn finish(&mut self, room: &K, result: &Result<Announcements, GameError>) {
        let ended = matches!(result, Ok(announcements)
            if announcements.iter().any(|a| matches!(a, Announcement::Results(_))));
        if ended && self.registry.remove(room).is_some() {
            debug!(room = ?room, "closing finished session");
        }
    }

    fn deliver(&mut self, room: &K, result: &Result<Announcements, GameError>) {
        match result {
            Ok(announcements) => {
                for announcement in announcements {
                    self.notifier.announce(room, &announcement.to_string());
                }
            }
            Err(err) => {
                debug!(room = ?room, code = err.code(), "intent rejected");
                self.notifier.announce(room, &err.to_string());
            }
        }
    }

    /// A room's session, if it has one.
    #[must_use]
    pub fn session(&self, room: &K) -> Option<&GameSession> {
        self.registry.get(room)
    }
}

impl<K, R, N> Table<K, R, N> {
    /// All sessions.
    #[must_use]
    pub fn registry(&self) -> &SessionRegistry<K> {
        &self.registry
    }

    /// Mutable access to the sessions, e.g. for pruning.
    pub fn registry_mut(&mut self) -> &mut SessionRegistry<K> {
        &mut self.registry
    }

    /// Where announcements go.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the notifier, e.g. to drain recorded messages.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Mutable access to the die source, e.g. to queue scripted faces.
    pub fn dice_mut(&mut self) -> &mut R {
        &mut self.dice
    }
}
