//! Round lifecycle and match scoring.
//!
//! [`RoundController`] is the single owner of a match: it applies moves,
//! records each round's result exactly once, and feeds the [`MatchScore`].

pub mod score;
pub mod status;
pub mod controller;

pub use score::{MatchScore, ScoreSnapshot};
pub use status::RoundStatus;
pub use controller::RoundController;
