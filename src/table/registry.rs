//! Independent sessions keyed by room.
//!
//! Sessions are created when someone joins and never interact. A room's
//! session keeps its own players, turn order and lifecycle.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{GameConfig, Phase};
use crate::rules::GameSession;

/// Map from room key to that room's [`GameSession`].
#[derive(Clone, Debug)]
pub struct SessionRegistry<K> {
    config: GameConfig,
    sessions: FxHashMap<K, GameSession>,
}

impl<K> Default for SessionRegistry<K> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<K> SessionRegistry<K> {
    /// Create an empty registry. New sessions use `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            sessions: FxHashMap::default(),
        }
    }

    /// Configuration given to new sessions.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of rooms with a session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no room has a session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Iterate over (room, session) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &GameSession)> {
        self.sessions.iter()
    }
}

impl<K: Eq + Hash + Clone + Debug> SessionRegistry<K> {
    /// Get a room's session, if it has one.
    #[must_use]
    pub fn get(&self, room: &K) -> Option<&GameSession> {
        self.sessions.get(room)
    }

    /// Get a room's session mutably, without creating one.
    pub fn get_mut(&mut self, room: &K) -> Option<&mut GameSession> {
        self.sessions.get_mut(room)
    }

    /// Get a room's session, creating it on first use.
    pub fn session_mut(&mut self, room: &K) -> &mut GameSession {
        let config = &self.config;
        self.sessions.entry(room.clone()).or_insert_with(|| {
            debug!(room = ?room, "opening session");
            GameSession::new(config.clone())
        })
    }

    /// Drop a room's session, returning it.
    pub fn remove(&mut self, room: &K) -> Option<GameSession> {
        self.sessions.remove(room)
    }

    /// Drop sessions with nobody seated. Returns how many were removed.
    pub fn prune_idle(&mut self) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, s| s.phase() != Phase::WaitingForPlayers || !s.players().is_empty());
        let removed = before - self.sessions.len();
        if removed > 0 {
            debug!(removed, "pruned idle sessions");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, TieBreak};

    #[test]
    fn test_session_created_on_first_use() {
        let mut registry: SessionRegistry<i64> = SessionRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get(&-100).is_none());

        registry.session_mut(&-100);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&-100).is_some());
    }

    #[test]
    fn test_sessions_inherit_config() {
        let config = GameConfig::new().with_tie_break(TieBreak::Shared);
        let mut registry: SessionRegistry<&str> = SessionRegistry::new(config.clone());

        assert_eq!(registry.session_mut(&"lobby").config(), &config);
    }

    #[test]
    fn test_rooms_are_independent() {
        let mut registry: SessionRegistry<u32> = SessionRegistry::default();
        registry
            .session_mut(&1)
            .register_player(PlayerId::new(10), "Alice")
            .unwrap();

        assert_eq!(registry.session_mut(&1).players().len(), 1);
        assert!(registry.session_mut(&2).players().is_empty());
    }

    #[test]
    fn test_prune_idle() {
        let mut registry: SessionRegistry<u32> = SessionRegistry::default();
        registry.session_mut(&1);
        registry
            .session_mut(&2)
            .register_player(PlayerId::new(10), "Alice")
            .unwrap();

        assert_eq!(registry.prune_idle(), 1);
        assert!(registry.get(&1).is_none());
        assert!(registry.get(&2).is_some());
    }

    #[test]
    fn test_get_mut_does_not_create() {
        let mut registry: SessionRegistry<u32> = SessionRegistry::default();
        assert!(registry.get_mut(&3).is_none());
        assert!(registry.is_empty());

        registry.session_mut(&3);
        assert!(registry.get_mut(&3).is_some());
    }

    #[test]
    fn test_remove() {
        let mut registry: SessionRegistry<u32> = SessionRegistry::default();
        registry.session_mut(&7);
        assert!(registry.remove(&7).is_some());
        assert!(registry.remove(&7).is_none());
    }
}
