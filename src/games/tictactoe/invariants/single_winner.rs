//! Single winner invariant: both sides never own a line at once.

use super::super::rules::winning_marks;
use super::super::BoardState;
use super::Invariant;

/// Invariant: at most one mark has three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<BoardState> for SingleWinnerInvariant {
    fn holds(board: &BoardState) -> bool {
        winning_marks(board).len() <= 1
    }

    fn description() -> &'static str {
        "At most one side owns a winning line"
    }
}
