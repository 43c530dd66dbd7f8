//! Move records and the move rejection error.

use super::phases::GameResult;
use super::position::Position;
use super::types::Mark;
use derive_more::{Display, Error};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// A move the engine refused to apply.
///
/// Always recoverable: the caller keeps its current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// A win or draw already holds.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] GameResult),

    /// The given mark is not the side to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Mark),
}
