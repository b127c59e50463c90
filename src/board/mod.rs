//! Boards: the 3×3 sub-board and the meta-board built from their outcomes.
//!
//! Both levels share the same line check ([`line_winner`]); the meta level
//! feeds it sub-board wins instead of cell marks.

pub mod sub_board;
pub mod meta;

pub use sub_board::{is_full, line_winner, SubBoard, LINES};
pub use meta::{is_concluded, is_round_draw, meta_winner, MetaOutcome};
