//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::BoardState;
use std::path::PathBuf;

/// Noughts - tic-tac-toe engine with an unbeatable computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe engine with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the result of a board (`In progress`, `Winner: X`, `Draw!`)
    Evaluate {
        /// Board as 9 cells of X, O or `.`, rows optionally separated by `/`
        board: BoardState,
    },

    /// Print the computer's move for a board
    BestMove {
        /// Board as 9 cells of X, O or `.`, rows optionally separated by `/`
        board: String,

        /// Search for the side to move instead of the computer's mark (O)
        #[arg(long)]
        side_to_move: bool,

        /// Accept mark counts that alternating play cannot produce
        #[arg(long, conflicts_with = "side_to_move")]
        unchecked: bool,

        /// Also print the score of every candidate
        #[arg(long)]
        scores: bool,
    },

    /// Let the engine play both sides from an empty board
    SelfPlay {
        /// Pause before each move in milliseconds (overrides the config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Play the engine against every possible opponent and report losses
    Verify,
}
