//! Alternating turn invariant: X moves first and the sides take turns.

use super::super::{BoardState, Mark};
use super::Invariant;

/// Invariant: mark counts match strict alternation.
///
/// X has either as many marks as O (X to move) or exactly one more
/// (O to move).
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(board: &BoardState) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        match board.next_to_move() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, apply_move, new_game};

    #[test]
    fn test_empty_board_holds() {
        assert!(AlternatingTurnInvariant::holds(&new_game()));
    }

    #[test]
    fn test_holds_along_a_game() {
        let mut board = new_game();
        for (index, mark) in [(4, Mark::X), (0, Mark::O), (8, Mark::X), (2, Mark::O)] {
            board = apply_move(&board, index, mark).unwrap();
            assert!(AlternatingTurnInvariant::holds(&board));
        }
        assert_eq!(board.next_to_move(), Mark::X);
    }

    #[test]
    fn test_wrong_side_to_move_violates() {
        let mut cells = [Cell::Empty; 9];
        cells[4] = Cell::Occupied(Mark::X);
        let board = BoardState::from_cells_unchecked(cells, Mark::X);
        assert!(!AlternatingTurnInvariant::holds(&board));
    }
}
