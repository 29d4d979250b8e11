//! End-of-game tally.
//!
//! Totals are plain sums of each player's rolls. The winner is found with a
//! single pass in join order keeping the first strictly greater total, so
//! under [`TieBreak::FirstJoined`] the earlier joiner takes a tie.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, Rolls, TieBreak};

/// One player's line in the results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player identity.
    pub id: PlayerId,
    /// Display name at join time.
    pub name: String,
    /// Faces rolled, in round order.
    pub rolls: Rolls,
    /// Sum of `rolls`.
    pub total: u32,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            rolls: player.rolls().iter().copied().collect(),
            total: player.total(),
        }
    }
}

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameResult {
    /// Single winner.
    Winner { player: PlayerId, score: u32 },
    /// Several players share the top score.
    SharedWin { players: Vec<PlayerId>, score: u32 },
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner { player: p, .. } => *p == player,
            GameResult::SharedWin { players, .. } => players.contains(&player),
        }
    }

    /// The winning total.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            GameResult::Winner { score, .. } | GameResult::SharedWin { score, .. } => *score,
        }
    }
}

/// Final standings in join order plus the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// One entry per player, in join order.
    pub standings: Vec<Standing>,
    /// Who won, and with what score.
    pub result: GameResult,
}

impl GameSummary {
    /// Tally a finished game. Returns `None` when nobody played.
    #[must_use]
    pub fn tally<'a>(
        players: impl IntoIterator<Item = &'a Player>,
        tie_break: TieBreak,
    ) -> Option<Self> {
        let standings: Vec<Standing> = players.into_iter().map(Standing::from).collect();

        let mut best: Option<&Standing> = None;
        for standing in &standings {
            if best.map_or(true, |b| standing.total > b.total) {
                best = Some(standing);
            }
        }
        let best = best?;

        let result = match tie_break {
            TieBreak::FirstJoined => GameResult::Winner {
                player: best.id,
                score: best.total,
            },
            TieBreak::Shared => {
                let tied: Vec<PlayerId> = standings
                    .iter()
                    .filter(|s| s.total == best.total)
                    .map(|s| s.id)
                    .collect();
                if tied.len() > 1 {
                    GameResult::SharedWin {
                        players: tied,
                        score: best.total,
                    }
                } else {
                    GameResult::Winner {
                        player: best.id,
                        score: best.total,
                    }
                }
            }
        };

        Some(Self { standings, result })
    }

    /// Look up a standing by player.
    #[must_use]
    pub fn standing(&self, player: PlayerId) -> Option<&Standing> {
        self.standings.iter().find(|s| s.id == player)
    }

    /// Names of the winners, in join order.
    pub fn winner_names(&self) -> impl Iterator<Item = &str> {
        self.standings
            .iter()
            .filter(|s| self.result.is_winner(s.id))
            .map(|s| s.name.as_str())
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game ended. Here are the results:")?;
        for standing in &self.standings {
            writeln!(f, "{} scored: {}", standing.name, standing.total)?;
        }
        let names: Vec<&str> = self.winner_names().collect();
        match &self.result {
            GameResult::Winner { score, .. } => {
                write!(f, "The winner is {} with a score of {}.", names.join(""), score)
            }
            GameResult::SharedWin { score, .. } => {
                write!(f, "It's a tie between {} with a score of {}.", names.join(" and "), score)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u64, name: &str, rolls: &[u8]) -> Player {
        let mut p = Player::new(PlayerId::new(id), name);
        for &r in rolls {
            p.push_roll(r);
        }
        p
    }

    #[test]
    fn test_higher_total_wins() {
        let players = [player(1, "A", &[3, 5, 2]), player(2, "B", &[6, 1, 4])];
        let summary = GameSummary::tally(&players, TieBreak::FirstJoined).unwrap();

        assert_eq!(summary.standings[0].total, 10);
        assert_eq!(summary.standings[1].total, 11);
        assert_eq!(
            summary.result,
            GameResult::Winner {
                player: PlayerId::new(2),
                score: 11
            }
        );
    }

    #[test]
    fn test_tie_goes_to_first_joined() {
        let players = [player(1, "A", &[4, 4, 4]), player(2, "B", &[5, 5, 2])];
        let summary = GameSummary::tally(&players, TieBreak::FirstJoined).unwrap();

        assert!(summary.result.is_winner(PlayerId::new(1)));
        assert!(!summary.result.is_winner(PlayerId::new(2)));
        assert_eq!(summary.result.score(), 12);
    }

    #[test]
    fn test_tie_shared() {
        let players = [player(1, "A", &[4, 4, 4]), player(2, "B", &[5, 5, 2])];
        let summary = GameSummary::tally(&players, TieBreak::Shared).unwrap();

        assert_eq!(
            summary.result,
            GameResult::SharedWin {
                players: vec![PlayerId::new(1), PlayerId::new(2)],
                score: 12
            }
        );
    }

    #[test]
    fn test_shared_policy_without_tie() {
        let players = [player(1, "A", &[1]), player(2, "B", &[2])];
        let summary = GameSummary::tally(&players, TieBreak::Shared).unwrap();
        assert_eq!(
            summary.result,
            GameResult::Winner {
                player: PlayerId::new(2),
                score: 2
            }
        );
    }

    #[test]
    fn test_no_players() {
        let players: [Player; 0] = [];
        assert!(GameSummary::tally(&players, TieBreak::FirstJoined).is_none());
    }

    #[test]
    fn test_render_winner() {
        let players = [player(1, "Alice", &[3, 5, 2]), player(2, "Bob", &[6, 1, 4])];
        let summary = GameSummary::tally(&players, TieBreak::FirstJoined).unwrap();

        assert_eq!(
            summary.to_string(),
            "Game ended. Here are the results:\n\
             Alice scored: 10\n\
             Bob scored: 11\n\
             The winner is Bob with a score of 11."
        );
    }

    #[test]
    fn test_render_shared() {
        let players = [player(1, "Alice", &[6]), player(2, "Bob", &[6])];
        let summary = GameSummary::tally(&players, TieBreak::Shared).unwrap();

        assert!(summary
            .to_string()
            .ends_with("It's a tie between Alice and Bob with a score of 6."));
    }

    #[test]
    fn test_standing_lookup() {
        let players = [player(1, "Alice", &[2, 2]), player(2, "Bob", &[1])];
        let summary = GameSummary::tally(&players, TieBreak::FirstJoined).unwrap();

        let alice = summary.standing(PlayerId::new(1)).unwrap();
        assert_eq!(alice.rolls.as_slice(), &[2, 2]);
        assert_eq!(alice.total, 4);
        assert!(summary.standing(PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_standings_follow_join_order() {
        let players = [player(9, "Zed", &[1, 6, 3]), player(2, "Amy", &[5, 5, 1])];
        let summary = GameSummary::tally(&players, TieBreak::FirstJoined).unwrap();

        let names: Vec<_> = summary.standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Zed", "Amy"]);
        assert_eq!(summary.standings[0].rolls.as_slice(), &[1, 6, 3]);
        for standing in &summary.standings {
            let sum: u32 = standing.rolls.iter().map(|&r| u32::from(r)).sum();
            assert_eq!(standing.total, sum);
        }
        assert_eq!(summary.result, GameResult::Winner { player: PlayerId::new(2), score: 11 });
    }
}
