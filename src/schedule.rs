//! Delayed computer moves.
//!
//! The move is chosen synchronously when the pending move is created. The
//! pause before it lands is a presentation choice owned by the caller and
//! cannot change which cell was chosen.

use crate::games::tictactoe::{
    BoardState, InvalidMove, Mark, Move, Position, apply_move, select_move_for,
};
use derive_getters::Getters;
use std::time::Duration;
use tracing::{debug, instrument};

/// A computed move waiting to be applied to the board it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct DelayedMove {
    /// Board the move was computed on.
    board: BoardState,
    /// Side making the move.
    mark: Mark,
    /// Chosen cell (0-8).
    index: usize,
}

impl DelayedMove {
    /// Runs the selector for `mark` now.
    ///
    /// # Panics
    ///
    /// If `board` is already won or drawn.
    #[instrument(skip(board), fields(board = %board))]
    pub fn compute(board: &BoardState, mark: Mark) -> Self {
        let index = select_move_for(board, mark);
        Self {
            board: *board,
            mark,
            index,
        }
    }

    /// Waits `delay`, then hands the same move back.
    #[instrument(skip(self), fields(index = self.index))]
    pub async fn land_after(self, delay: Duration) -> Self {
        if !delay.is_zero() {
            debug!(?delay, "Holding computer move");
            tokio::time::sleep(delay).await;
        }
        self
    }

    /// The move as a domain event.
    pub fn as_move(&self) -> Option<Move> {
        Position::from_index(self.index).map(|position| Move::new(self.mark, position))
    }

    /// Applies the move to the board it was computed for.
    pub fn apply(&self) -> Result<BoardState, InvalidMove> {
        apply_move(&self.board, self.index, self.mark)
    }
}
