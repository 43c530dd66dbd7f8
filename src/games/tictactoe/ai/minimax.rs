//! Depth-aware minimax over the full game tree.
//!
//! Scores are from the point of view of the searching mark: a win `d` plies
//! below the root scores `WIN_SCORE - d`, a loss scores `d - WIN_SCORE`, a
//! draw scores 0. The depth term makes the AI take the quickest win and
//! delay a forced loss as long as possible.
//!
//! The search alternates sides itself, starting with the searching mark at
//! the root, and only reads the board's cells.

use super::super::phases::GameResult;
use super::super::rules::{self, outcome};
use super::super::types::{BoardState, Mark};
use tracing::{debug, instrument};

/// The computer's mark in single-player games.
pub const AI_MARK: Mark = Mark::O;

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Score of a loss found at depth 0.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Minimax value of one candidate move at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    /// Cell index (0-8).
    pub index: usize,
    /// Value for the searching mark; higher is better.
    pub score: i32,
}

// Not instrumented: this runs once per node of the game tree.
fn minimax(board: &BoardState, depth: i32, to_move: Mark, ai: Mark) -> i32 {
    match outcome(board) {
        GameResult::Win(mark) if mark == ai => WIN_SCORE - depth,
        GameResult::Win(_) => depth - WIN_SCORE,
        GameResult::Draw => 0,
        GameResult::InProgress => {
            let children = board.empty_cells().map(|index| {
                minimax(
                    &board.with_mark(index, to_move),
                    depth + 1,
                    to_move.opponent(),
                    ai,
                )
            });
            let best = if to_move == ai {
                children.max()
            } else {
                children.min()
            };
            // In progress implies at least one empty cell.
            best.unwrap_or(0)
        }
    }
}

/// Minimax value of every empty cell for `ai`, in ascending index order.
///
/// Each candidate places `ai` provisionally and is scored at depth 0 with
/// the opponent to reply.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &BoardState, ai: Mark) -> Vec<MoveScore> {
    board
        .empty_cells()
        .map(|index| MoveScore {
            index,
            score: minimax(&board.with_mark(index, ai), 0, ai.opponent(), ai),
        })
        .collect()
}

/// Picks the best cell for `ai`.
///
/// Candidates are tried in ascending index order and only a strictly
/// greater score replaces the current best, so the lowest index wins ties.
///
/// # Panics
///
/// If the board is already won or drawn. Asking for a move on a finished
/// game is a bug in the caller.
#[instrument(skip(board), fields(board = %board))]
pub fn select_move_for(board: &BoardState, ai: Mark) -> usize {
    let result = rules::evaluate(board);
    assert!(
        !result.is_terminal(),
        "move requested on a finished game ({result})"
    );

    let mut best: Option<MoveScore> = None;
    for candidate in score_moves(board, ai) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    let Some(best) = best else {
        unreachable!("non-terminal board has an empty cell");
    };
    debug!(index = best.index, score = best.score, "AI selected move");
    best.index
}

/// Picks the computer's move ([`AI_MARK`]).
///
/// # Panics
///
/// As [`select_move_for`].
pub fn select_ai_move(board: &BoardState) -> usize {
    select_move_for(board, AI_MARK)
}
