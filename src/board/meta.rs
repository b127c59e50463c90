//! Meta-board evaluation.
//!
//! The meta-board is read from two tracks:
//! - the outcome array, which records sub-board **wins only**;
//! - the sub-boards themselves, whose fullness marks a sub-board draw.
//!
//! Meta-line detection reads only the outcome array, so a drawn sub-board
//! counts as an empty cell there and can never complete a line for anyone.
//! Round draws need the second track: every sub-board won or full.

use crate::core::{BoardId, Mark, GRID_SIZE};

use super::sub_board::{line_winner, SubBoard};

/// Per-sub-board winner, indexed by board. Draws are `None`.
pub type MetaOutcome = [Mark; GRID_SIZE];

/// Owner of a complete line of won sub-boards.
#[must_use]
pub fn meta_winner(outcomes: &MetaOutcome) -> Mark {
    line_winner(outcomes)
}

/// True iff the sub-board is won by someone or has no empty cell.
#[must_use]
pub fn is_concluded(boards: &[SubBoard; GRID_SIZE], outcomes: &MetaOutcome, board: BoardId) -> bool {
    outcomes[board.index()].is_some() || boards[board.index()].is_full()
}

/// True iff nobody holds a meta-line and every sub-board has concluded.
#[must_use]
pub fn is_round_draw(boards: &[SubBoard; GRID_SIZE], outcomes: &MetaOutcome) -> bool {
    meta_winner(outcomes).is_none()
        && BoardId::all().all(|board| is_concluded(boards, outcomes, board))
}
