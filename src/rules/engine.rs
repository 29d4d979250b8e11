//! The game state machine.
//!
//! ```text
//! WaitingForPlayers --(second join)--> InProgress --(last roll)--> Ended
//!        ^                                                           |
//!        +-------------------------(reset)---------------------------+
//! ```
//!
//! Operations validate first and mutate second: a rejected intent returns
//! `Err` and leaves the session exactly as it was. A successful one returns
//! the announcements to deliver, in order, after the mutation is complete.
//! `Ended` is transient; the session is back to `WaitingForPlayers` before
//! any operation returns.

use tracing::{debug, info, warn};

use super::announcement::Announcement;
use super::scoring::GameSummary;
use crate::core::{GameConfig, GameError, Intent, Phase, Player, PlayerId, RandomSource, SessionState};

/// Ordered announcements produced by one transition.
pub type Announcements = Vec<Announcement>;

/// One room's game.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    config: GameConfig,
    state: SessionState,
}

impl GameSession {
    /// Create an empty session.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: SessionState::new(),
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Raw state, for inspection.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current round (0 when no game is running).
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.state.current_round
    }

    /// Whose roll is accepted next.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    /// Seated players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    /// Look up a seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    /// Route an intent to the matching operation.
    pub fn apply(
        &mut self,
        intent: Intent,
        dice: &mut dyn RandomSource,
    ) -> Result<Announcements, GameError> {
        match intent {
            Intent::Join { player, name } => self.register_player(player, name),
            Intent::Roll { player } => self.attempt_roll(player, dice),
        }
    }

    /// Seat a player.
    ///
    /// The second seat filled starts the game: round 1, first joiner to roll.
    pub fn register_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<Announcements, GameError> {
        if self.state.is_full() {
            return Err(GameError::GameFull);
        }
        if self.state.contains(id) {
            return Err(GameError::AlreadyRegistered);
        }

        let player = Player::new(id, name);
        let mut out = vec![Announcement::PlayerJoined {
            name: player.name.clone(),
        }];
        debug!(player = %id, name = %player.name, "player joined");
        self.state.players.push(player);

        if self.state.is_full() {
            self.state.phase = Phase::InProgress;
            self.state.current_round = 1;
            self.state.turn_index = 0;
            info!(rounds = self.config.rounds(), "game starting");
            out.push(Announcement::GameStarting {
                rounds: self.config.rounds(),
            });
            out.extend(self.turn_prompt());
        }

        Ok(out)
    }

    /// Roll for `id`, drawing the face from `dice`.
    ///
    /// `dice` is only consulted once every precondition has passed.
    pub fn attempt_roll<R: RandomSource + ?Sized>(
        &mut self,
        id: PlayerId,
        dice: &mut R,
    ) -> Result<Announcements, GameError> {
        let index = self.check_roll(id)?;
        let value = dice.roll(self.config.die_sides());
        Ok(self.apply_roll(index, value))
    }

    /// Roll for `id` with a face decided elsewhere (e.g. the platform's dice).
    pub fn record_roll(&mut self, id: PlayerId, value: u8) -> Result<Announcements, GameError> {
        let index = self.check_roll(id)?;
        if !self.config.is_valid_face(value) {
            return Err(GameError::InvalidDieValue);
        }
        Ok(self.apply_roll(index, value))
    }

    fn check_roll(&self, id: PlayerId) -> Result<usize, GameError> {
        if self.state.phase != Phase::InProgress {
            return Err(GameError::GameNotActive);
        }
        let index = self.state.position(id).ok_or(GameError::NotAParticipant)?;
        if index != self.state.turn_index {
            return Err(GameError::NotYourTurn);
        }
        Ok(index)
    }

    fn apply_roll(&mut self, index: usize, value: u8) -> Announcements {
        let player = &mut self.state.players[index];
        player.push_roll(value);
        debug!(player = %player.id, round = self.state.current_round, value, "rolled");

        let mut out = vec![Announcement::Rolled {
            name: player.name.clone(),
            value,
        }];
        self.advance_turn(&mut out);
        out
    }

    fn advance_turn(&mut self, out: &mut Announcements) {
        let rounds = self.config.rounds();
        // Unreachable through the public API; only a hand-built state gets here.
        if self.state.current_round > rounds {
            warn!(round = self.state.current_round, "round past the end; ending game");
            self.end_game(out);
            return;
        }

        self.state.turn_index = (self.state.turn_index + 1) % self.state.player_count();
        if self.state.turn_index == 0 {
            self.state.current_round += 1;
        }

        if self.state.current_round > rounds {
            self.end_game(out);
            return;
        }

        out.extend(self.turn_prompt());
    }

    fn end_game(&mut self, out: &mut Announcements) {
        self.state.phase = Phase::Ended;

        match GameSummary::tally(&self.state.players, self.config.tie_break()) {
            Some(summary) => {
                info!(result = ?summary.result, "game ended");
                out.push(Announcement::Results(summary));
            }
            None => warn!("game ended with no players"),
        }

        self.state.reset();
    }

    fn turn_prompt(&self) -> Option<Announcement> {
        self.state.current_player().map(|p| Announcement::TurnPrompt {
            name: p.name.clone(),
            round: self.state.current_round,
            rounds: self.config.rounds(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use crate::rules::GameResult;

    const ALICE: PlayerId = PlayerId::new(1);
    const BOB: PlayerId = PlayerId::new(2);

    fn started() -> GameSession {
        let mut session = GameSession::default();
        session.register_player(ALICE, "Alice").unwrap();
        session.register_player(BOB, "Bob").unwrap();
        session
    }

    #[test]
    fn test_round_past_end_ends_game() {
        let mut session = started();
        session.state.current_round = session.config.rounds() + 1;
        session.state.turn_index = 0;

        let out = session.record_roll(ALICE, 4).unwrap();

        assert_eq!(out[0], Announcement::Rolled { name: "Alice".into(), value: 4 });
        match out.last() {
            Some(Announcement::Results(summary)) => {
                assert_eq!(summary.standing(ALICE).unwrap().total, 4);
                assert!(summary.result.is_winner(ALICE));
            }
            other => panic!("expected results, got {other:?}"),
        }
        assert_eq!(out.len(), 2);
        assert_eq!(session.phase(), Phase::WaitingForPlayers);
        assert!(session.players().is_empty());
    }

    #[test]
    fn test_first_join() {
        let mut session = GameSession::default();
        let out = session.register_player(ALICE, "Alice").unwrap();

        assert_eq!(out, vec![Announcement::PlayerJoined { name: "Alice".into() }]);
        assert_eq!(session.phase(), Phase::WaitingForPlayers);
        assert_eq!(session.current_round(), 0);
    }

    #[test]
    fn test_second_join_starts_game() {
        let mut session = GameSession::default();
        session.register_player(ALICE, "Alice").unwrap();
        let out = session.register_player(BOB, "Bob").unwrap();

        assert_eq!(
            out,
            vec![
                Announcement::PlayerJoined { name: "Bob".into() },
                Announcement::GameStarting { rounds: 3 },
                Announcement::TurnPrompt {
                    name: "Alice".into(),
                    round: 1,
                    rounds: 3
                },
            ]
        );
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.current_round(), 1);
        assert_eq!(session.current_player().map(|p| p.id), Some(ALICE));
    }

    #[test]
    fn test_join_full_checked_before_duplicate() {
        let mut session = started();
        assert_eq!(session.register_player(ALICE, "Alice"), Err(GameError::GameFull));
        assert_eq!(
            session.register_player(PlayerId::new(3), "Carol"),
            Err(GameError::GameFull)
        );
    }

    #[test]
    fn test_duplicate_join() {
        let mut session = GameSession::default();
        session.register_player(ALICE, "Alice").unwrap();
        assert_eq!(
            session.register_player(ALICE, "Alice again"),
            Err(GameError::AlreadyRegistered)
        );
        assert_eq!(session.players().len(), 1);
        assert_eq!(session.players()[0].name, "Alice");
    }

    #[test]
    fn test_roll_before_start() {
        let mut session = GameSession::default();
        session.register_player(ALICE, "Alice").unwrap();
        let mut dice = ScriptedDice::new([4]);

        assert_eq!(session.attempt_roll(ALICE, &mut dice), Err(GameError::GameNotActive));
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn test_roll_by_stranger() {
        let mut session = started();
        let mut dice = ScriptedDice::new([4]);

        assert_eq!(
            session.attempt_roll(PlayerId::new(99), &mut dice),
            Err(GameError::NotAParticipant)
        );
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn test_roll_out_of_turn() {
        let mut session = started();
        let mut dice = ScriptedDice::new([4]);

        assert_eq!(session.attempt_roll(BOB, &mut dice), Err(GameError::NotYourTurn));
        assert!(session.player(BOB).unwrap().rolls().is_empty());
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn test_roll_announces_and_passes_turn() {
        let mut session = started();
        let mut dice = ScriptedDice::new([5]);

        let out = session.attempt_roll(ALICE, &mut dice).unwrap();
        assert_eq!(
            out,
            vec![
                Announcement::Rolled {
                    name: "Alice".into(),
                    value: 5
                },
                Announcement::TurnPrompt {
                    name: "Bob".into(),
                    round: 1,
                    rounds: 3
                },
            ]
        );
        assert_eq!(session.player(ALICE).unwrap().rolls(), &[5]);
        assert_eq!(session.current_player().map(|p| p.id), Some(BOB));
    }

    #[test]
    fn test_round_advances_on_wrap() {
        let mut session = started();
        session.record_roll(ALICE, 1).unwrap();
        let out = session.record_roll(BOB, 2).unwrap();

        assert_eq!(session.current_round(), 2);
        assert_eq!(
            out.last(),
            Some(&Announcement::TurnPrompt {
                name: "Alice".into(),
                round: 2,
                rounds: 3
            })
        );
    }

    #[test]
    fn test_full_game_resets() {
        let mut session = started();
        let mut dice = ScriptedDice::new([3, 6, 5, 1, 2, 4]);

        for _ in 0..5 {
            let id = session.current_player().unwrap().id;
            session.attempt_roll(id, &mut dice).unwrap();
        }
        let out = session.attempt_roll(BOB, &mut dice).unwrap();

        match out.last() {
            Some(Announcement::Results(summary)) => {
                assert_eq!(
                    summary.result,
                    GameResult::Winner {
                        player: BOB,
                        score: 11
                    }
                );
            }
            other => panic!("expected results, got {other:?}"),
        }
        assert_eq!(session.phase(), Phase::WaitingForPlayers);
        assert!(session.players().is_empty());
        assert_eq!(session.current_round(), 0);
        assert_eq!(session.state().turn_index, 0);
    }

    #[test]
    fn test_record_roll_rejects_bad_face() {
        let mut session = started();
        assert_eq!(session.record_roll(ALICE, 0), Err(GameError::InvalidDieValue));
        assert_eq!(session.record_roll(ALICE, 7), Err(GameError::InvalidDieValue));
        assert!(session.player(ALICE).unwrap().rolls().is_empty());
    }

    #[test]
    fn test_record_roll_precondition_order() {
        let mut session = started();
        // Turn order is checked before the face.
        assert_eq!(session.record_roll(BOB, 9), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_apply_routes_intents() {
        let mut session = GameSession::default();
        let mut dice = ScriptedDice::new([6]);

        session.apply(Intent::join(ALICE, "Alice"), &mut dice).unwrap();
        session.apply(Intent::join(BOB, "Bob"), &mut dice).unwrap();
        let out = session.apply(Intent::roll(ALICE), &mut dice).unwrap();

        assert_eq!(
            out[0],
            Announcement::Rolled {
                name: "Alice".into(),
                value: 6
            }
        );
    }

    #[test]
    fn test_single_round_config() {
        let mut session = GameSession::new(GameConfig::new().with_rounds(1));
        session.register_player(ALICE, "Alice").unwrap();
        session.register_player(BOB, "Bob").unwrap();

        session.record_roll(ALICE, 2).unwrap();
        let out = session.record_roll(BOB, 2).unwrap();

        assert!(matches!(out.last(), Some(Announcement::Results(_))));
        assert_eq!(session.phase(), Phase::WaitingForPlayers);
    }
}
