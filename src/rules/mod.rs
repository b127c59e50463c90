//! Game rules: round state and the move resolver.
//!
//! - `state`: what a round looks like at any point
//! - `resolver`: which moves are legal and how they change the state
//!
//! Round completion and scoring live one level up, in
//! [`crate::round::RoundController`].

pub mod state;
pub mod resolver;

pub use state::{GameState, RoundResult};
pub use resolver::{
    apply_move, can_play, check_move, legal_moves, playable_boards, MoveOutcome, RejectReason,
};
