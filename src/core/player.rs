//! Player marks.
//!
//! ## Player
//!
//! The two sides of a match. X always opens a round.
//!
//! ## Mark
//!
//! A cell (or a sub-board outcome) is either empty or holds a player's mark.
//! Represented as `Option<Player>` so that "empty" can never be confused with
//! a third player.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first every round).
    X,
    /// Player O.
    O,
}

/// Contents of a cell or a sub-board outcome: `None` is empty.
pub type Mark = Option<Player>;

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the other player.
    ///
    /// ```
    /// use ultimate_ttt::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol for this player's mark.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
