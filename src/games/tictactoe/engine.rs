//! Synchronous engine API consumed by a presentation layer.
//!
//! Every operation takes a board snapshot and returns a value. The caller
//! owns the one slot holding the current board and decides whether to
//! replace it with what the engine returns.

use super::action::InvalidMove;
use super::invariants::{BoardInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{BoardState, Mark};
use tracing::{debug, instrument, warn};

/// Starts a fresh game: empty board, X to move.
#[instrument]
pub fn new_game() -> BoardState {
    BoardState::new()
}

impl BoardState {
    /// Places the mover's mark at `index` and returns the resulting board.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::GameOver`] if a win or draw already holds
    /// - [`InvalidMove::OutOfRange`] if `index` is not in 0-8
    /// - [`InvalidMove::Occupied`] if the cell is taken
    #[instrument(skip(self), fields(board = %self, mark = %self.next_to_move()))]
    pub fn apply_move(&self, index: usize) -> Result<BoardState, InvalidMove> {
        let result = rules::evaluate(self);
        if result.is_terminal() {
            warn!(%result, "Move rejected, game is over");
            return Err(InvalidMove::GameOver(result));
        }

        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move rejected, index out of bounds");
            InvalidMove::OutOfRange(index)
        })?;

        if !self.is_empty(index) {
            warn!(%position, "Move rejected, cell occupied");
            return Err(InvalidMove::Occupied(position));
        }

        let next = self.place_unchecked(index);
        debug!(%position, after = %next, "Move applied");

        // Unchecked analysis boards may start out inconsistent; a move must
        // not break a consistent one.
        debug_assert!(
            BoardInvariants::check_all(self).is_err() || BoardInvariants::check_all(&next).is_ok(),
            "Board invariants violated after move"
        );

        Ok(next)
    }
}

/// Applies `mark` at `index`, checking that `mark` is the side to move.
///
/// # Errors
///
/// [`InvalidMove::WrongTurn`] when `mark` is not `board.next_to_move()`,
/// otherwise as [`BoardState::apply_move`].
#[instrument(skip(board), fields(board = %board))]
pub fn apply_move(
    board: &BoardState,
    index: usize,
    mark: Mark,
) -> Result<BoardState, InvalidMove> {
    if mark != board.next_to_move() {
        warn!(%mark, expected = %board.next_to_move(), "Move rejected, wrong turn");
        return Err(InvalidMove::WrongTurn(mark));
    }
    board.apply_move(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, GameResult};

    #[test]
    fn test_apply_flips_turn() {
        let board = new_game().apply_move(4).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.next_to_move(), Mark::O);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = new_game();
        let _after = before.apply_move(0).unwrap();
        assert_eq!(before, BoardState::new());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(new_game().apply_move(9), Err(InvalidMove::OutOfRange(9)));
    }

    #[test]
    fn test_occupied() {
        let board = new_game().apply_move(0).unwrap();
        assert_eq!(
            board.apply_move(0),
            Err(InvalidMove::Occupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_rejected_after_win() {
        let board: BoardState = "XXX/OO./...".parse().unwrap();
        assert_eq!(
            board.apply_move(5),
            Err(InvalidMove::GameOver(GameResult::Win(Mark::X)))
        );
    }

    #[test]
    fn test_wrong_turn() {
        assert_eq!(
            apply_move(&new_game(), 4, Mark::O),
            Err(InvalidMove::WrongTurn(Mark::O))
        );
        assert!(apply_move(&new_game(), 4, Mark::X).is_ok());
    }

    #[test]
    fn test_unchecked_board_accepts_moves() {
        let cells = BoardState::parse_cells(".../XX./...").unwrap();
        let board = BoardState::from_cells_unchecked(cells, Mark::O);
        let next = board.apply_move(5).unwrap();
        assert_eq!(next.to_string(), ".../XXO/...");
        assert_eq!(next.next_to_move(), Mark::X);
    }
}
