//! # ultimate-ttt
//!
//! Rules engine for Ultimate Tic-Tac-Toe: nine 3×3 sub-boards arranged in a
//! 3×3 meta-board, where the cell you play decides which sub-board your
//! opponent must play next.
//!
//! ## Rules Summary
//!
//! 1. **Forced board**: a move in cell `c` sends the opponent to sub-board
//!    `c`. If that sub-board is already won or full, the opponent may play in
//!    any sub-board that is neither.
//!
//! 2. **Two-level wins**: three in a row wins a sub-board; three won
//!    sub-boards in a row win the round.
//!
//! 3. **Drawn sub-boards are blanks**: a full sub-board with no line belongs
//!    to nobody and never counts toward a meta-line. The round is drawn once
//!    every sub-board is won or full and nobody holds a meta-line.
//!
//! 4. **Match scoring**: each round's result is recorded exactly once;
//!    X wins, O wins and draws accumulate until the match is reset.
//!
//! ## Architecture
//!
//! - **Pure rules, single owner**: `board` and `rules` are pure functions over
//!   [`GameState`]; [`RoundController`] is the only thing that mutates it.
//!
//! - **Rejections are not errors**: illegal moves come back as
//!   [`MoveOutcome::Rejected`] with the state untouched. Only out-of-range
//!   indices produce an [`EngineError`].
//!
//! - **Cheap snapshots**: the move log uses `im` so cloning a state is O(1)
//!   in its length.
//!
//! ## Modules
//!
//! - `core`: players, positions, errors, configuration
//! - `board`: sub-board line checks and meta-board evaluation
//! - `rules`: round state, move legality and application
//! - `round`: round lifecycle, match score, status text

pub mod core;
pub mod board;
pub mod rules;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    BoardId, CellId, Move, MoveRecord, GRID_SIZE,
    Mark, Player,
    ConfigError, EngineError, StateError,
    MatchConfig, PlayerNames,
};

pub use crate::board::{MetaOutcome, SubBoard};

pub use crate::rules::{GameState, MoveOutcome, RejectReason, RoundResult};

pub use crate::round::{MatchScore, RoundController, RoundStatus, ScoreSnapshot};
