//! Win detection logic for tic-tac-toe.

use super::super::types::{BoardState, Mark};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

fn line_owner(board: &BoardState, [a, b, c]: [usize; 3]) -> Option<Mark> {
    let cells = board.cells();
    let mark = cells[a].mark()?;
    (cells[b] == cells[a] && cells[c] == cells[a]).then_some(mark)
}

/// Returns the mark owning the first complete line, if any.
pub fn check_winner(board: &BoardState) -> Option<Mark> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Every distinct mark that owns at least one complete line.
///
/// On boards reached through legal play this has at most one element.
pub fn winning_marks(board: &BoardState) -> Vec<Mark> {
    let mut marks: Vec<Mark> = Vec::with_capacity(2);
    for mark in LINES.into_iter().filter_map(|line| line_owner(board, line)) {
        if !marks.contains(&mark) {
            marks.push(mark);
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&BoardState::new()), None);
    }

    #[test]
    fn test_winner_column() {
        let board: BoardState = ".XO/.XO/.X.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: BoardState = "XXO/XO./O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: BoardState = "XX./O../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
        assert!(winning_marks(&board).is_empty());
    }

    #[test]
    fn test_double_line_same_mark() {
        // X completes a row and a column with one move.
        let board: BoardState = "XXX/XOO/XOO".parse().unwrap();
        assert_eq!(winning_marks(&board), vec![Mark::X]);
    }
}
