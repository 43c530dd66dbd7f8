//! Single-player game against the computer.
//!
//! [`SinglePlayerGame`] is the one mutable slot a presentation layer keeps.
//! Each transition replaces the stored board with a new value from the
//! engine; a rejected move leaves it untouched.

use crate::games::tictactoe::{
    AI_MARK, BoardState, GameResult, InvalidMove, Mark, Move, Position, apply_move, evaluate,
    new_game,
};
use crate::schedule::DelayedMove;
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// Human (X) versus computer ([`AI_MARK`]).
#[derive(Debug, Clone, Getters)]
pub struct SinglePlayerGame {
    /// Current board.
    board: BoardState,
    /// Moves played since the last reset, in order. Kept in memory only.
    history: Vec<Move>,
}

impl SinglePlayerGame {
    /// The human's mark.
    pub const HUMAN: Mark = Mark::X;

    /// Starts a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: new_game(),
            history: Vec::new(),
        }
    }

    /// Current result, derived from the board.
    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    /// True when the game is running and the computer has the move.
    pub fn computer_to_move(&self) -> bool {
        !self.result().is_terminal() && self.board.next_to_move() == AI_MARK
    }

    /// Plays the human's mark at `index`.
    ///
    /// # Errors
    ///
    /// Any [`InvalidMove`]; the board is unchanged.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn human_move(&mut self, index: usize) -> Result<GameResult, InvalidMove> {
        let next = apply_move(&self.board, index, Self::HUMAN)?;
        Ok(self.replace(next, Self::HUMAN, index))
    }

    /// Computes the computer's reply, or `None` if it is not the computer's turn.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn plan_computer_move(&self) -> Option<DelayedMove> {
        self.computer_to_move()
            .then(|| DelayedMove::compute(&self.board, AI_MARK))
    }

    /// Applies a planned move.
    ///
    /// Returns `Ok(None)` and changes nothing if the board moved on since
    /// the plan was made (for example after a reset).
    ///
    /// # Errors
    ///
    /// Any [`InvalidMove`] from applying the move.
    #[instrument(skip(self, pending), fields(index = pending.index()))]
    pub fn commit(&mut self, pending: DelayedMove) -> Result<Option<GameResult>, InvalidMove> {
        if *pending.board() != self.board {
            warn!("Discarding stale computer move");
            return Ok(None);
        }
        let next = pending.apply()?;
        Ok(Some(self.replace(next, *pending.mark(), *pending.index())))
    }

    /// Plans and commits the computer's move without delay.
    pub fn play_computer_move(&mut self) -> Result<Option<GameResult>, InvalidMove> {
        match self.plan_computer_move() {
            Some(pending) => self.commit(pending),
            None => Ok(None),
        }
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(result = %self.result(), moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    fn replace(&mut self, next: BoardState, mark: Mark, index: usize) -> GameResult {
        self.board = next;
        if let Some(position) = Position::from_index(index) {
            self.history.push(Move::new(mark, position));
        }
        let result = self.result();
        debug!(%mark, index, %result, "Board replaced");
        if result.is_terminal() {
            info!(%result, "Game over");
        }
        result
    }
}

impl Default for SinglePlayerGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_then_computer() {
        let mut game = SinglePlayerGame::new();
        assert!(!game.computer_to_move());
        assert_eq!(game.human_move(4), Ok(GameResult::InProgress));
        assert!(game.computer_to_move());

        let result = game.play_computer_move().unwrap();
        assert_eq!(result, Some(GameResult::InProgress));
        assert_eq!(game.board().count(AI_MARK), 1);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_human_cannot_move_on_computer_turn() {
        let mut game = SinglePlayerGame::new();
        game.human_move(0).unwrap();
        let before = *game.board();
        assert_eq!(game.human_move(1), Err(InvalidMove::WrongTurn(Mark::X)));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_stale_plan_discarded_after_reset() {
        let mut game = SinglePlayerGame::new();
        game.human_move(0).unwrap();
        let pending = game.plan_computer_move().unwrap();
        game.reset();
        assert_eq!(game.commit(pending), Ok(None));
        assert_eq!(*game.board(), BoardState::new());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_no_plan_on_human_turn() {
        assert!(SinglePlayerGame::new().plan_computer_move().is_none());
    }
}
