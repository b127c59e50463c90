//! Cumulative match score.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::RoundResult;

/// Read-only view of the match score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl ScoreSnapshot {
    /// Wins for one player.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total rounds counted.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.x + self.o + self.draws
    }
}

/// Win/draw counters for a match.
///
/// A plain counter: the controller guarantees one `increment` per round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    counts: ScoreSnapshot,
}

impl MatchScore {
    /// Create a zeroed score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one concluded round.
    pub fn increment(&mut self, result: RoundResult) {
        match result {
            RoundResult::Winner(Player::X) => self.counts.x += 1,
            RoundResult::Winner(Player::O) => self.counts.o += 1,
            RoundResult::Draw => self.counts.draws += 1,
        }
    }

    /// Current counts.
    #[must_use]
    pub fn snapshot(&self) -> ScoreSnapshot {
        self.counts
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        self.counts = ScoreSnapshot::default();
    }
}
