//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark placed by a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (the computer, canonically).
    O,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

// The presentation layer speaks `null | "X" | "O"`.
impl Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.mark().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<Mark>::deserialize(deserializer)?.map_or(Cell::Empty, Cell::Occupied))
    }
}

/// Snapshot of a game: nine cells in row-major order plus the side to move.
///
/// Boards are plain values. [`BoardState::apply_move`] returns a new board and
/// never touches the one it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
    next_to_move: Mark,
}

impl BoardState {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            next_to_move: Mark::X,
        }
    }

    /// Builds a board from raw cells, deriving the side to move from the mark counts.
    ///
    /// Fails if the counts could not arise from alternating play.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, ParseBoardError> {
        let board = Self {
            cells,
            next_to_move: Mark::X,
        };
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        let next_to_move = if x == o {
            Mark::X
        } else if x == o + 1 {
            Mark::O
        } else {
            return Err(ParseBoardError::UnbalancedMarks { x, o });
        };
        Ok(Self {
            next_to_move,
            ..board
        })
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the side that moves next.
    pub fn next_to_move(&self) -> Mark {
        self.next_to_move
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&i| self.cells[i] == Cell::Empty)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Builds a board without checking the mark counts.
    ///
    /// Meant for analysing positions that alternating play cannot reach, such
    /// as two X marks and no O with O to move. The search accepts these boards
    /// as they are; the alternation and single-winner invariants do not hold
    /// for them.
    pub fn from_cells_unchecked(cells: [Cell; CELL_COUNT], next_to_move: Mark) -> Self {
        Self {
            cells,
            next_to_move,
        }
    }

    /// Reads nine cells from board notation without checking the mark counts.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and `-` are empty cells; `/`
    /// and whitespace are ignored.
    pub fn parse_cells(s: &str) -> Result<[Cell; CELL_COUNT], ParseBoardError> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::UnknownSymbol(other)),
            };
            cells.push(cell);
        }
        cells
            .try_into()
            .map_err(|v: Vec<Cell>| ParseBoardError::WrongLength(v.len()))
    }

    /// Writes the mover's mark and flips the turn. Callers validate first.
    pub(super) fn place_unchecked(self, index: usize) -> Self {
        let mut next = self.with_mark(index, self.next_to_move);
        next.next_to_move = self.next_to_move.opponent();
        next
    }

    /// Writes `mark` at `index` and leaves the turn alone. Used by the search,
    /// which tracks the side to move itself.
    pub(super) fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.cells[index] = Cell::Occupied(mark);
        self
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// Unrecognized cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(#[error(not(source))] char),

    /// Mark counts that alternating play cannot produce.
    #[display("Unbalanced marks: {} X vs {} O", x, o)]
    UnbalancedMarks {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl FromStr for BoardState {
    type Err = ParseBoardError;

    /// Parses [`BoardState::parse_cells`] notation and derives the side to move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cells(Self::parse_cells(s)?)
    }
}

#[derive(Deserialize)]
struct RawBoard {
    cells: [Cell; CELL_COUNT],
    next_to_move: Mark,
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBoard::deserialize(deserializer)?;
        let board = Self::from_cells(raw.cells).map_err(serde::de::Error::custom)?;
        if board.next_to_move != raw.next_to_move {
            return Err(serde::de::Error::custom(format!(
                "next_to_move is {} but mark counts say {}",
                raw.next_to_move, board.next_to_move
            )));
        }
        Ok(board)
    }
}
