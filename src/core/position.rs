//! Positions on the grid: which sub-board, which cell, and moves built from them.
//!
//! Both indices are row-major 0-8. They are validated once at construction so
//! that every later lookup is infallible:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! A cell index doubles as the sub-board the opponent is sent to next, hence
//! `From<CellId> for BoardId`.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::Player;

/// Number of sub-boards, and of cells per sub-board.
pub const GRID_SIZE: usize = 9;

/// Sub-board identifier (0-8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardId(u8);

impl BoardId {
    /// Create a board ID, failing fast on an out-of-range index.
    pub fn new(index: usize) -> Result<Self, EngineError> {
        if index < GRID_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::BoardOutOfRange(index))
        }
    }

    /// Get the raw index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all nine sub-boards in index order.
    pub fn all() -> impl Iterator<Item = BoardId> {
        (0..GRID_SIZE as u8).map(BoardId)
    }
}

impl TryFrom<usize> for BoardId {
    type Error = EngineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<BoardId> for usize {
    fn from(board: BoardId) -> Self {
        board.index()
    }
}

impl From<CellId> for BoardId {
    fn from(cell: CellId) -> Self {
        BoardId(cell.0)
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.0)
    }
}

/// Cell identifier within a sub-board (0-8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellId(u8);

impl CellId {
    /// Create a cell ID, failing fast on an out-of-range index.
    pub fn new(index: usize) -> Result<Self, EngineError> {
        if index < GRID_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::CellOutOfRange(index))
        }
    }

    /// Get the raw index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all nine cells in index order.
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..GRID_SIZE as u8).map(CellId)
    }
}

impl TryFrom<usize> for CellId {
    type Error = EngineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<CellId> for usize {
    fn from(cell: CellId) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// A candidate move: a cell on a sub-board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target sub-board.
    pub board: BoardId,
    /// Target cell within that sub-board.
    pub cell: CellId,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(board: BoardId, cell: CellId) -> Self {
        Self { board, cell }
    }

    /// Create a move from raw indices.
    ///
    /// ```
    /// use ultimate_ttt::core::{EngineError, Move};
    ///
    /// let mv = Move::from_indices(4, 0).unwrap();
    /// assert_eq!(mv.board.index(), 4);
    /// assert_eq!(mv.sends_to().index(), 0);
    ///
    /// assert_eq!(Move::from_indices(9, 0), Err(EngineError::BoardOutOfRange(9)));
    /// ```
    pub fn from_indices(board: usize, cell: usize) -> Result<Self, EngineError> {
        Ok(Self::new(BoardId::new(board)?, CellId::new(cell)?))
    }

    /// The sub-board the opponent is sent to after this move.
    #[must_use]
    pub fn sends_to(self) -> BoardId {
        self.cell.into()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.board.0, self.cell.0)
    }
}

/// An accepted move with metadata for the round's move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: Player,

    /// The move made.
    pub mv: Move,

    /// Position in the round's move log (starts at 0).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(player: Player, mv: Move, sequence: u32) -> Self {
        Self {
            player,
            mv,
            sequence,
        }
    }
}
