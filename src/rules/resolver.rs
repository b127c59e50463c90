//! Move legality and state transition.
//!
//! Legality has three layers, checked in order:
//! 1. The round must still be open (no meta-winner, not a round draw).
//! 2. The target sub-board must be playable: the one the player was sent to,
//!    or, under free choice, any sub-board that is neither won nor full.
//! 3. The target cell must be empty.
//!
//! An accepted move always sends the opponent to the sub-board matching the
//! chosen cell, even if that board is already concluded; free choice is then
//! derived from the state rather than stored.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{BoardId, Mark, Move, MoveRecord, Player};

use super::state::GameState;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The round already has a winner or is drawn.
    RoundConcluded,
    /// The player was sent elsewhere, or the target board is won or full.
    BoardNotPlayable,
    /// The target cell is already marked.
    CellOccupied,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RejectReason::RoundConcluded => "round is already concluded",
            RejectReason::BoardNotPlayable => "sub-board is not playable",
            RejectReason::CellOccupied => "cell is already marked",
        };
        f.write_str(text)
    }
}

/// Result of a move command.
///
/// Rejections are an expected signal, not an error: the state is unchanged
/// and the caller may simply ignore them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    /// The mark was placed.
    Accepted {
        /// Player who moved.
        player: Player,
        /// Outcome of the played sub-board after the move.
        board_outcome: Mark,
        /// Sub-board the opponent is sent to.
        next_board: BoardId,
    },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Check if the move was applied.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Rejection reason, if rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Rejected(reason) => Some(*reason),
            MoveOutcome::Accepted { .. } => None,
        }
    }
}

/// Check if the player to move may play anywhere on `board`.
#[must_use]
pub fn can_play(state: &GameState, board: BoardId) -> bool {
    if state.is_round_over() {
        return false;
    }
    match state.active_board() {
        Some(active) if !state.is_concluded(active) => board == active,
        // Free choice: no target yet, or the target is already won or full.
        _ => !state.is_concluded(board),
    }
}

/// Check a move without applying it.
pub fn check_move(state: &GameState, mv: Move) -> Result<(), RejectReason> {
    if state.is_round_over() {
        return Err(RejectReason::RoundConcluded);
    }
    if !can_play(state, mv.board) {
        return Err(RejectReason::BoardNotPlayable);
    }
    if !state.board(mv.board).is_empty_at(mv.cell) {
        return Err(RejectReason::CellOccupied);
    }
    Ok(())
}

/// Apply a move if legal.
///
/// On success: marks the cell, records a sub-board win (write-once), sends the
/// opponent to the board matching the cell, flips the turn, and logs the move.
/// Round completion is not evaluated here.
pub fn apply_move(state: &mut GameState, mv: Move) -> MoveOutcome {
    if let Err(reason) = check_move(state, mv) {
        trace!(%mv, %reason, turn = %state.turn(), "move rejected");
        return MoveOutcome::Rejected(reason);
    }

    let player = state.turn();
    let board_outcome = state.place_mark(mv.board, mv.cell);
    let next_board = mv.sends_to();
    state.advance_turn(next_board);

    let sequence = state.move_count() as u32;
    state.record_move(MoveRecord::new(player, mv, sequence));

    debug!(
        %player,
        %mv,
        next_board = next_board.index(),
        board_won = board_outcome.is_some(),
        "move applied"
    );

    MoveOutcome::Accepted {
        player,
        board_outcome,
        next_board,
    }
}

/// Sub-boards the player to move may play on, in index order.
#[must_use]
pub fn playable_boards(state: &GameState) -> SmallVec<[BoardId; 9]> {
    BoardId::all().filter(|&board| can_play(state, board)).collect()
}

/// Every move [`apply_move`] would accept, board-major.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    playable_boards(state)
        .into_iter()
        .flat_map(|board| {
            state
                .board(board)
                .empty_cells()
                .map(move |cell| Move::new(board, cell))
        })
        .collect()
}
