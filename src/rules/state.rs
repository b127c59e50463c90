//! Per-round game state.
//!
//! ## GameState
//!
//! Everything a round needs:
//! - The nine sub-boards
//! - The outcome array (sub-board wins only, see [`crate::board::meta`])
//! - Whose turn it is and which sub-board they are sent to
//! - The round result, written once by the controller
//! - A log of accepted moves
//!
//! Fields are private. Marks and outcomes change only through
//! [`apply_move`](super::resolver::apply_move); the round result only
//! through the controller.
//!
//! ## Deserialization
//!
//! A deserialized state is rebuilt by replaying its move history, then
//! compared field by field with the input. Anything a legal game could not
//! have produced (forged outcomes, a result that does not match the boards,
//! marks without history) is refused with a [`StateError`].

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{self, MetaOutcome, SubBoard};
use crate::core::{BoardId, CellId, Mark, MoveRecord, Player, StateError, GRID_SIZE};

use super::resolver::apply_move;

/// Result of a concluded round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// A player completed a line of won sub-boards.
    Winner(Player),
    /// Every sub-board concluded with no meta-line.
    Draw,
}

impl RoundResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, RoundResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Mark {
        match self {
            RoundResult::Winner(p) => Some(*p),
            RoundResult::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Winner(p) => write!(f, "{}", p),
            RoundResult::Draw => write!(f, "D"),
        }
    }
}

/// State of one round.
///
/// Cloning is cheap: the move log is an `im::Vector`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    boards: [SubBoard; GRID_SIZE],
    outcomes: MetaOutcome,
    turn: Player,
    /// `None` means any unconcluded sub-board may be played.
    active_board: Option<BoardId>,
    round_result: Option<RoundResult>,
    history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the opening state of a round: empty boards, X to move, free choice.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: [SubBoard::new(); GRID_SIZE],
            outcomes: [None; GRID_SIZE],
            turn: Player::X,
            active_board: None,
            round_result: None,
            history: Vector::new(),
        }
    }

    // === Boards ===

    /// Get a sub-board.
    #[must_use]
    pub fn board(&self, board: BoardId) -> &SubBoard {
        &self.boards[board.index()]
    }

    /// All sub-boards in index order.
    #[must_use]
    pub fn boards(&self) -> &[SubBoard; GRID_SIZE] {
        &self.boards
    }

    /// Get the mark in one cell.
    #[must_use]
    pub fn cell(&self, board: BoardId, cell: CellId) -> Mark {
        self.board(board).get(cell)
    }

    /// Winner of a sub-board. A drawn sub-board reports `None`.
    #[must_use]
    pub fn outcome(&self, board: BoardId) -> Mark {
        self.outcomes[board.index()]
    }

    /// The outcome array.
    #[must_use]
    pub fn outcomes(&self) -> &MetaOutcome {
        &self.outcomes
    }

    /// Check if a sub-board has no empty cell.
    #[must_use]
    pub fn is_board_full(&self, board: BoardId) -> bool {
        self.board(board).is_full()
    }

    /// Check if a sub-board is won or full.
    #[must_use]
    pub fn is_concluded(&self, board: BoardId) -> bool {
        board::is_concluded(&self.boards, &self.outcomes, board)
    }

    // === Meta-board ===

    /// Owner of a complete line of won sub-boards.
    #[must_use]
    pub fn meta_winner(&self) -> Mark {
        board::meta_winner(&self.outcomes)
    }

    /// Check if every sub-board concluded with no meta-line.
    #[must_use]
    pub fn is_round_draw(&self) -> bool {
        board::is_round_draw(&self.boards, &self.outcomes)
    }

    /// Check if the round is over, whether or not the result was recorded yet.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.meta_winner().is_some() || self.is_round_draw()
    }

    /// Result the boards imply, recorded or not.
    #[must_use]
    pub fn board_result(&self) -> Option<RoundResult> {
        if let Some(winner) = self.meta_winner() {
            Some(RoundResult::Winner(winner))
        } else if self.is_round_draw() {
            Some(RoundResult::Draw)
        } else {
            None
        }
    }

    // === Turn ===

    /// Player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Sub-board the player to move was sent to.
    ///
    /// May name a concluded board; see [`GameState::is_free_choice`].
    #[must_use]
    pub fn active_board(&self) -> Option<BoardId> {
        self.active_board
    }

    /// Check if the player to move may pick any unconcluded sub-board.
    #[must_use]
    pub fn is_free_choice(&self) -> bool {
        match self.active_board {
            None => true,
            Some(board) => self.is_concluded(board),
        }
    }

    // === Result ===

    /// Recorded round result.
    #[must_use]
    pub fn round_result(&self) -> Option<RoundResult> {
        self.round_result
    }

    /// Record the round result. Refuses to overwrite an existing one.
    pub(crate) fn set_round_result(&mut self, result: RoundResult) -> bool {
        if self.round_result.is_some() {
            return false;
        }
        self.round_result = Some(result);
        true
    }

    // === History ===

    /// Accepted moves this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of accepted moves this round.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    // === Mutation (resolver only) ===

    /// Place the current player's mark and propagate a sub-board win.
    ///
    /// Caller guarantees legality. Returns the sub-board's outcome afterwards.
    pub(crate) fn place_mark(&mut self, board: BoardId, cell: CellId) -> Mark {
        let player = self.turn;
        let idx = board.index();
        let placed = self.boards[idx].place(cell, player);
        debug_assert!(placed, "place_mark on occupied cell");

        if self.outcomes[idx].is_none() {
            self.outcomes[idx] = self.boards[idx].line_winner();
        }
        self.outcomes[idx]
    }

    /// Send the next player to `board` and hand over the turn.
    pub(crate) fn advance_turn(&mut self, next_board: BoardId) {
        self.active_board = Some(next_board);
        self.turn = self.turn.opponent();
    }

    /// Append to the move log.
    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

/// Wire form of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    boards: [SubBoard; GRID_SIZE],
    outcomes: MetaOutcome,
    turn: Player,
    active_board: Option<BoardId>,
    round_result: Option<RoundResult>,
    history: Vector<MoveRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let mut state = GameState::new();
        for (n, record) in raw.history.iter().enumerate() {
            if record.player != state.turn() || !apply_move(&mut state, record.mv).is_accepted() {
                return Err(StateError::IllegalHistory(n));
            }
        }

        if state.history != raw.history {
            return Err(StateError::HistoryMismatch("sequence numbers"));
        }
        if state.boards != raw.boards {
            return Err(StateError::HistoryMismatch("cells"));
        }
        if state.outcomes != raw.outcomes {
            return Err(StateError::HistoryMismatch("sub-board outcomes"));
        }
        if state.turn != raw.turn || state.active_board != raw.active_board {
            return Err(StateError::HistoryMismatch("turn and active board"));
        }

        // An unrecorded result is fine: the controller records it lazily.
        if let Some(result) = raw.round_result {
            if state.board_result() != Some(result) {
                return Err(StateError::RoundResultMismatch);
            }
            state.round_result = Some(result);
        }
        Ok(state)
    }
}
