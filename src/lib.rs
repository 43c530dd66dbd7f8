//! Noughts - tic-tac-toe engine with a minimax computer opponent
//!
//! The engine is a set of pure functions over [`BoardState`] values. A
//! presentation layer keeps the current board, hands the engine a snapshot
//! plus a cell index, and shows whatever comes back.
//!
//! # Architecture
//!
//! - **Games**: board, rules, invariants and the minimax selector
//! - **Session**: the caller-owned slot for a human-versus-computer game
//! - **Schedule**: computer moves held back by a delay without changing them
//! - **Config**: TOML settings for the command-line driver
//!
//! # Example
//!
//! ```
//! use noughts::{GameResult, Mark, evaluate, new_game, select_ai_move};
//!
//! let board = new_game().apply_move(4)?;
//! let reply = select_ai_move(&board);
//! let board = noughts::apply_move(&board, reply, Mark::O)?;
//! assert_eq!(evaluate(&board), GameResult::InProgress);
//! # Ok::<(), noughts::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod schedule;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Session management
pub use session::SinglePlayerGame;

// Crate-level exports - Delayed moves
pub use schedule::DelayedMove;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AI_MARK, AuditReport, BoardState, CELL_COUNT, Cell, GameResult, InvalidMove, LOSS_SCORE, Mark,
    Move, MoveScore, ParseBoardError, Position, WIN_SCORE, apply_move, audit, evaluate, new_game,
    score_moves, select_ai_move, select_move_for,
};

// Rules and invariants stay namespaced
pub use games::tictactoe::{invariants, rules};
