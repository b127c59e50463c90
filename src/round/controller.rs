//! The match controller: owns the round state and the score.
//!
//! ## Round lifecycle
//!
//! A round is `InProgress` until a move completes a meta-line or concludes the
//! last open sub-board. [`RoundController::evaluate_round`] runs after every
//! accepted move and records the result exactly once; calling it again is a
//! no-op, so the score can never be double-counted. A concluded round rejects
//! every move until [`RoundController::next_round`].
//!
//! ## Example
//!
//! ```
//! use ultimate_ttt::core::Player;
//! use ultimate_ttt::round::RoundController;
//!
//! let mut game = RoundController::new();
//! assert!(game.play_at(0, 4).unwrap().is_accepted());
//!
//! // O was sent to sub-board 4.
//! assert_eq!(game.current_turn(), Player::O);
//! assert_eq!(game.active_board().map(|b| b.index()), Some(4));
//! assert!(!game.play_at(0, 0).unwrap().is_accepted());
//!
//! // Indices outside 0-8 are caller bugs, not illegal moves.
//! assert!(game.play_at(4, 9).is_err());
//! ```

use im::Vector;
use smallvec::SmallVec;
use tracing::info;

use crate::core::{BoardId, CellId, EngineError, Mark, MatchConfig, Move, MoveRecord, Player};
use crate::rules::{self, GameState, MoveOutcome, RoundResult};

use super::score::{MatchScore, ScoreSnapshot};
use super::status::RoundStatus;

/// Owns one match: the current round's state, the score, and the config.
#[derive(Clone, Debug, Default)]
pub struct RoundController {
    state: GameState,
    score: MatchScore,
    config: MatchConfig,
}

impl RoundController {
    /// Start a match with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a match with the given configuration.
    #[must_use]
    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            state: GameState::new(),
            score: MatchScore::new(),
            config,
        }
    }

    // === Commands ===

    /// Play a move for the player to move.
    ///
    /// Illegal moves are rejected with the state unchanged.
    pub fn play(&mut self, mv: Move) -> MoveOutcome {
        let outcome = rules::apply_move(&mut self.state, mv);
        if outcome.is_accepted() {
            self.evaluate_round();
        }
        outcome
    }

    /// Play a move from raw indices.
    ///
    /// Fails fast if either index is outside 0-8.
    pub fn play_at(&mut self, board: usize, cell: usize) -> Result<MoveOutcome, EngineError> {
        let mv = Move::from_indices(board, cell)?;
        Ok(self.play(mv))
    }

    /// Record the round result if the round just concluded.
    ///
    /// Idempotent: once a result is recorded it is returned unchanged and the
    /// score is not touched again.
    pub fn evaluate_round(&mut self) -> Option<RoundResult> {
        if let Some(result) = self.state.round_result() {
            return Some(result);
        }

        let result = self.state.board_result()?;

        if self.state.set_round_result(result) {
            self.score.increment(result);
            let score = self.score.snapshot();
            info!(
                %result,
                moves = self.state.move_count(),
                x = score.x,
                o = score.o,
                draws = score.draws,
                "round concluded"
            );
        }
        Some(result)
    }

    /// Start a fresh round, keeping the score.
    pub fn next_round(&mut self) {
        self.state = GameState::new();
        info!(rounds_played = self.score.snapshot().rounds_played(), "next round");
    }

    /// Start a fresh round and zero the score.
    pub fn reset_match(&mut self) {
        self.next_round();
        self.score.reset();
        info!("match reset");
    }

    /// Change a player's display name.
    pub fn set_player_name(&mut self, player: Player, name: impl Into<String>) {
        self.config.players.set(player, name);
    }

    // === Queries ===

    /// Check if the player to move may play on a sub-board.
    #[must_use]
    pub fn is_board_playable(&self, board: BoardId) -> bool {
        rules::can_play(&self.state, board)
    }

    /// Check if the player to move may play a specific cell.
    #[must_use]
    pub fn is_cell_playable(&self, board: BoardId, cell: CellId) -> bool {
        self.is_board_playable(board)
            && self.state.board(board).is_empty_at(cell)
            && !self.state.is_round_over()
    }

    /// Winner of a sub-board. Drawn sub-boards report `None`.
    #[must_use]
    pub fn sub_board_outcome(&self, board: BoardId) -> Mark {
        self.state.outcome(board)
    }

    /// Check if a sub-board has no empty cell.
    #[must_use]
    pub fn sub_board_full(&self, board: BoardId) -> bool {
        self.state.is_board_full(board)
    }

    /// Mark in one cell.
    #[must_use]
    pub fn cell(&self, board: BoardId, cell: CellId) -> Mark {
        self.state.cell(board, cell)
    }

    /// Owner of a complete line of won sub-boards.
    #[must_use]
    pub fn meta_winner(&self) -> Mark {
        self.state.meta_winner()
    }

    /// Check if the round ended without a meta-line.
    #[must_use]
    pub fn is_round_draw(&self) -> bool {
        self.state.is_round_draw()
    }

    /// Player to move.
    #[must_use]
    pub fn current_turn(&self) -> Player {
        self.state.turn()
    }

    /// Sub-board the player to move was sent to, if any.
    #[must_use]
    pub fn active_board(&self) -> Option<BoardId> {
        self.state.active_board()
    }

    /// Recorded result of the current round.
    #[must_use]
    pub fn round_result(&self) -> Option<RoundResult> {
        self.state.round_result()
    }

    /// Check if the current round has a recorded result.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.state.round_result().is_some()
    }

    /// Current match score.
    #[must_use]
    pub fn score_snapshot(&self) -> ScoreSnapshot {
        self.score.snapshot()
    }

    /// Sub-boards the player to move may play on.
    #[must_use]
    pub fn playable_boards(&self) -> SmallVec<[BoardId; 9]> {
        rules::playable_boards(&self.state)
    }

    /// Every legal move for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.state)
    }

    /// Accepted moves this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        self.state.history()
    }

    /// Where the round stands.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        RoundStatus::of(&self.state)
    }

    /// Status line using the configured display names.
    #[must_use]
    pub fn status_line(&self) -> String {
        self.status().status_line(&self.config.players)
    }

    /// End-of-round banner using the configured display names.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        self.status().banner(&self.config.players)
    }

    /// The current round state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}
