//! Round status for presentation: a status line and an end-of-round banner.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerNames};
use crate::rules::GameState;

/// Where the round stands, from the presentation layer's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// A player holds a meta-line.
    Won(Player),
    /// Every sub-board concluded without a meta-line.
    Drawn,
    /// Waiting for `turn` to move.
    InProgress {
        /// Player to move.
        turn: Player,
        /// True when any unconcluded sub-board may be played.
        free_choice: bool,
    },
}

impl RoundStatus {
    /// Derive the status from a state.
    ///
    /// Reads the board directly, so it is correct even before the controller
    /// has recorded the round result.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        if let Some(winner) = state.meta_winner() {
            RoundStatus::Won(winner)
        } else if state.is_round_draw() {
            RoundStatus::Drawn
        } else {
            RoundStatus::InProgress {
                turn: state.turn(),
                free_choice: state.is_free_choice(),
            }
        }
    }

    /// Check if the round is over.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        !matches!(self, RoundStatus::InProgress { .. })
    }

    /// One-line status text.
    ///
    /// The separator before the turn hint is a plain ASCII `-`, not a
    /// typographic dash. Names go through [`PlayerNames::name_for`], which
    /// trims them.
    ///
    /// ```
    /// use ultimate_ttt::core::{Player, PlayerNames};
    /// use ultimate_ttt::round::RoundStatus;
    ///
    /// let names = PlayerNames::new("Alice", "");
    /// let status = RoundStatus::InProgress { turn: Player::X, free_choice: true };
    /// assert_eq!(status.status_line(&names), "Turn: Alice (X) - play anywhere");
    /// assert_eq!(RoundStatus::Won(Player::O).status_line(&names), "Winner: Player O (O)");
    /// ```
    #[must_use]
    pub fn status_line(&self, names: &PlayerNames) -> String {
        match *self {
            RoundStatus::Won(p) => format!("Winner: {} ({})", names.name_for(p), p),
            RoundStatus::Drawn => "Round ended: Draw".to_string(),
            RoundStatus::InProgress { turn, free_choice } => {
                let hint = if free_choice {
                    "play anywhere"
                } else {
                    "play in the highlighted board"
                };
                format!("Turn: {} ({}) - {}", names.name_for(turn), turn, hint)
            }
        }
    }

    /// End-of-round banner text, `None` while the round is in progress.
    #[must_use]
    pub fn banner(&self, names: &PlayerNames) -> Option<String> {
        match *self {
            RoundStatus::Won(p) => Some(format!("Round winner: {} ({})", names.name_for(p), p)),
            RoundStatus::Drawn => Some("Round result: Draw".to_string()),
            RoundStatus::InProgress { .. } => None,
        }
    }
}
