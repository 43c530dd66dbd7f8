//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`BoardState`](super::BoardState). Nothing here is
//! cached: a board is nine cells and a full evaluation is eight line checks.

pub mod win;

pub use win::{LINES, check_winner, winning_marks};

use super::phases::GameResult;
use super::types::BoardState;
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// Lines are checked in [`LINES`] order and the first complete one decides
/// the winner. A full board without a line is a draw.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &BoardState) -> GameResult {
    outcome(board)
}

/// Uninstrumented [`evaluate`] for the search hot path.
pub(crate) fn outcome(board: &BoardState) -> GameResult {
    if let Some(mark) = check_winner(board) {
        GameResult::Win(mark)
    } else if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&BoardState::new()), GameResult::InProgress);
    }

    #[test]
    fn test_top_row_win() {
        let board: BoardState = "XXX/OO./...".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::Win(Mark::X));
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board: BoardState = "XO./X../...".parse().unwrap();
        assert!(!board.is_full());
        assert_eq!(evaluate(&board), GameResult::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: BoardState = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board: BoardState = "XOX/OXO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(evaluate(&board), GameResult::Win(Mark::X));
    }
}
