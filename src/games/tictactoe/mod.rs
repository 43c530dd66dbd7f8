//! Tic-tac-toe: board values, rules, and the computer opponent.

mod action;
mod ai;
mod engine;
mod phases;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{InvalidMove, Move};
pub use ai::{
    AI_MARK, AuditReport, LOSS_SCORE, MoveScore, WIN_SCORE, audit, score_moves, select_ai_move,
    select_move_for,
};
pub use engine::{apply_move, new_game};
pub use phases::GameResult;
pub use position::Position;
pub use rules::evaluate;
pub use types::{BoardState, CELL_COUNT, Cell, Mark, ParseBoardError};
