//! Computer opponent.
//!
//! The only supported policy is exhaustive minimax. It never loses and
//! always returns the same move for the same board; [`audit`] checks the
//! first claim against every opposing line of play.

mod audit;
mod minimax;

pub use audit::{AuditReport, audit};
pub use minimax::{
    AI_MARK, LOSS_SCORE, MoveScore, WIN_SCORE, score_moves, select_ai_move, select_move_for,
};
