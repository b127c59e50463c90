//! End-to-end scenarios through the controller's command/query surface.
//!
//! Move lists are written as `(board, cell)` pairs; each cell sends the
//! opponent to the sub-board with the same index.

use ultimate_ttt::{
    BoardId, CellId, EngineError, GameState, Player, RejectReason, RoundController,
    RoundResult, RoundStatus, ScoreSnapshot,
};

fn board(i: usize) -> BoardId {
    BoardId::new(i).unwrap()
}

fn cell(i: usize) -> CellId {
    CellId::new(i).unwrap()
}

fn play_all(game: &mut RoundController, moves: &[(usize, usize)]) {
    for (n, &(b, c)) in moves.iter().enumerate() {
        let outcome = game.play_at(b, c).unwrap();
        assert!(
            outcome.is_accepted(),
            "move #{} ({}, {}) rejected: {:?}",
            n,
            b,
            c,
            outcome
        );
    }
}

/// X wins boards 0, 4 and 8; O only ever sends X back.
#[rustfmt::skip]
const X_WINS_DIAGONAL: &[(usize, usize)] = &[
    (0, 3), (3, 0), (0, 4), (4, 0), (0, 5),
    (5, 4), (4, 6), (6, 4), (4, 7), (7, 4), (4, 8),
    (8, 8), (8, 0), (2, 8), (8, 1), (1, 8), (8, 2),
];

/// Ends in a round draw. Final outcomes: X wins 1, 2, 3, 8; O wins 4, 5, 6, 7;
/// board 0 is full with no line and is filled by the last move.
#[rustfmt::skip]
const ROUND_DRAW: &[(usize, usize)] = &[
    (8, 0), (0, 2), (2, 7), (7, 2), (2, 6), (6, 6), (6, 7), (7, 6), (6, 4), (4, 4),
    (4, 6), (6, 0), (0, 4), (4, 0), (0, 6), (6, 2), (2, 4), (4, 8), (8, 5), (5, 2),
    (2, 5), (5, 3), (3, 0), (0, 3), (3, 6), (6, 1), (1, 7), (7, 4), (8, 4), (3, 2),
    (2, 1), (1, 1), (1, 8), (8, 7), (1, 4), (1, 6), (5, 7), (3, 1), (1, 0), (0, 8),
    (8, 8), (5, 4), (3, 4), (0, 7), (0, 5), (5, 5), (3, 3), (0, 0), (0, 1),
];

/// Fills sub-board 2 without a line. X keeps control of board 2 until
/// `(2, 2)` hands it to O; every reply elsewhere is at cell 2.
#[rustfmt::skip]
const DRAW_SUB_BOARD_2: &[(usize, usize)] = &[
    (2, 0), (0, 2), (2, 3), (3, 2), (2, 7), (7, 2), (2, 8), (8, 2),
    (2, 2),
    (2, 1), (1, 2), (2, 4), (4, 2), (2, 5), (5, 2), (2, 6),
];

// =============================================================================
// Sub-board outcomes
// =============================================================================

/// X takes cells 0, 4, 8 of board 0 through forced replies.
#[test]
fn test_scenario_a_forced_sub_board_win() {
    let mut game = RoundController::new();

    play_all(&mut game, &[(0, 4)]);
    assert_eq!(game.active_board(), Some(board(4)));
    play_all(&mut game, &[(4, 0)]);
    assert_eq!(game.active_board(), Some(board(0)));
    play_all(&mut game, &[(0, 8), (8, 0)]);
    assert_eq!(game.sub_board_outcome(board(0)), None);

    play_all(&mut game, &[(0, 0)]);
    assert_eq!(game.sub_board_outcome(board(0)), Some(Player::X));
    assert!(!game.sub_board_full(board(0)));

    // O was sent to the board X just won: free choice over the other eight.
    assert_eq!(game.active_board(), Some(board(0)));
    assert_eq!(game.current_turn(), Player::O);
    assert!(!game.is_board_playable(board(0)));
    assert_eq!(game.playable_boards().len(), 8);
    assert_eq!(
        game.status(),
        RoundStatus::InProgress {
            turn: Player::O,
            free_choice: true
        }
    );
}

/// Sub-board 2 filled as X O X / X O O / O X X: full, but nobody won it.
#[test]
fn test_scenario_b_drawn_sub_board() {
    let mut game = RoundController::new();
    play_all(&mut game, DRAW_SUB_BOARD_2);

    assert!(game.sub_board_full(board(2)));
    assert_eq!(game.sub_board_outcome(board(2)), None);
    assert!(!game.is_board_playable(board(2)));
    for c in CellId::all() {
        assert!(game.cell(board(2), c).is_some());
    }
    assert_eq!(game.round_result(), None);
}

// =============================================================================
// Round results
// =============================================================================

#[test]
fn test_scenario_c_meta_diagonal_win() {
    let mut game = RoundController::new();
    play_all(&mut game, X_WINS_DIAGONAL);

    for b in [0, 4, 8] {
        assert_eq!(game.sub_board_outcome(board(b)), Some(Player::X));
    }
    assert_eq!(game.meta_winner(), Some(Player::X));
    assert!(!game.is_round_draw());
    assert_eq!(game.round_result(), Some(RoundResult::Winner(Player::X)));
    assert_eq!(game.score_snapshot(), ScoreSnapshot { x: 1, o: 0, draws: 0 });
    assert_eq!(game.status_line(), "Winner: Player X (X)");
}

#[test]
fn test_scenario_d_round_draw() {
    let mut game = RoundController::new();
    let (last, rest) = ROUND_DRAW.split_last().unwrap();
    play_all(&mut game, rest);

    // One move before the end every board but 0 is won.
    assert_eq!(game.round_result(), None);
    assert!(!game.is_round_draw());
    assert_eq!(game.playable_boards().as_slice(), &[board(0)]);

    play_all(&mut game, &[*last]);

    let x_boards: Vec<_> = BoardId::all()
        .filter(|&b| game.sub_board_outcome(b) == Some(Player::X))
        .map(BoardId::index)
        .collect();
    let o_boards: Vec<_> = BoardId::all()
        .filter(|&b| game.sub_board_outcome(b) == Some(Player::O))
        .map(BoardId::index)
        .collect();
    assert_eq!(x_boards, vec![1, 2, 3, 8]);
    assert_eq!(o_boards, vec![4, 5, 6, 7]);
    assert!(game.sub_board_full(board(0)));
    assert_eq!(game.sub_board_outcome(board(0)), None);

    assert_eq!(game.meta_winner(), None);
    assert!(game.is_round_draw());
    assert_eq!(game.round_result(), Some(RoundResult::Draw));
    assert_eq!(game.score_snapshot(), ScoreSnapshot { x: 0, o: 0, draws: 1 });
    assert_eq!(game.banner().as_deref(), Some("Round result: Draw"));
    assert!(game.legal_moves().is_empty());
}

/// Boards 1 and 2 are X's and board 0 is drawn: the top row is not a win.
#[test]
fn test_drawn_sub_board_is_invisible_to_meta_lines() {
    let mut game = RoundController::new();
    play_all(&mut game, ROUND_DRAW);

    assert_eq!(game.sub_board_outcome(board(1)), Some(Player::X));
    assert_eq!(game.sub_board_outcome(board(2)), Some(Player::X));
    assert!(game.sub_board_full(board(0)));
    assert_eq!(game.state().outcomes()[0], None);
    assert_eq!(game.meta_winner(), None);
}

// =============================================================================
// Round and match lifecycle
// =============================================================================

#[test]
fn test_scenario_e_next_round_keeps_score() {
    let mut game = RoundController::new();
    play_all(&mut game, X_WINS_DIAGONAL);

    game.next_round();

    for b in BoardId::all() {
        assert_eq!(game.state().board(b).marked_count(), 0);
        assert_eq!(game.sub_board_outcome(b), None);
    }
    assert_eq!(game.current_turn(), Player::X);
    assert_eq!(game.active_board(), None);
    assert_eq!(game.round_result(), None);
    assert_eq!(game.score_snapshot().x, 1);
    assert_eq!(game.state(), &GameState::new());

    // The new round is playable again.
    assert!(game.play_at(4, 4).unwrap().is_accepted());
}

#[test]
fn test_scenario_f_reset_match_zeroes_score() {
    let mut game = RoundController::new();
    play_all(&mut game, X_WINS_DIAGONAL);

    game.reset_match();

    assert_eq!(game.state(), &GameState::new());
    assert_eq!(game.score_snapshot(), ScoreSnapshot { x: 0, o: 0, draws: 0 });
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut game = RoundController::new();

    play_all(&mut game, X_WINS_DIAGONAL);
    game.next_round();
    play_all(&mut game, ROUND_DRAW);
    game.next_round();
    play_all(&mut game, X_WINS_DIAGONAL);

    assert_eq!(game.score_snapshot(), ScoreSnapshot { x: 2, o: 0, draws: 1 });
    assert_eq!(game.score_snapshot().rounds_played(), 3);

    // Re-evaluating a concluded round never double-counts.
    game.evaluate_round();
    game.evaluate_round();
    assert_eq!(game.score_snapshot().rounds_played(), 3);
}

#[test]
fn test_moves_after_conclusion_are_ignored() {
    let mut game = RoundController::new();
    play_all(&mut game, X_WINS_DIAGONAL);
    let before = game.state().clone();

    for mv in [(6, 6), (5, 0), (2, 2)] {
        let outcome = game.play_at(mv.0, mv.1).unwrap();
        assert_eq!(outcome.rejection(), Some(RejectReason::RoundConcluded));
    }
    assert_eq!(game.state(), &before);
    assert_eq!(game.score_snapshot().x, 1);
}

#[test]
fn test_out_of_range_indices_fail_fast() {
    let mut game = RoundController::new();

    assert_eq!(game.play_at(9, 0), Err(EngineError::BoardOutOfRange(9)));
    assert_eq!(game.play_at(0, 9), Err(EngineError::CellOutOfRange(9)));
    assert_eq!(BoardId::new(usize::MAX), Err(EngineError::BoardOutOfRange(usize::MAX)));
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn test_cell_playable_tracks_forcing() {
    let mut game = RoundController::new();
    play_all(&mut game, &[(0, 4)]);

    for b in BoardId::all() {
        for c in CellId::all() {
            assert_eq!(game.is_cell_playable(b, c), b == board(4));
        }
    }
    assert!(!game.is_cell_playable(board(0), cell(0)));
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_concluded_round_snapshot_round_trips() {
    let mut game = RoundController::new();
    play_all(&mut game, X_WINS_DIAGONAL);

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, game.state());
    assert_eq!(restored.round_result(), Some(RoundResult::Winner(Player::X)));
}

/// An empty board claimed as won by X with a drawn round: nothing a legal
/// game could reach, so it never becomes a `GameState`.
#[test]
fn test_forged_snapshot_is_refused() {
    let mut json = serde_json::to_value(GameState::new()).unwrap();
    json["outcomes"][0] = serde_json::json!("X");
    json["round_result"] = serde_json::json!("Draw");

    assert!(serde_json::from_value::<GameState>(json).is_err());
}
