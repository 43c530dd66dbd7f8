//! Noughts - command-line driver for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{
    AI_MARK, BoardState, DelayedMove, EngineConfig, Mark, Position, audit, evaluate, new_game,
    score_moves, select_move_for,
};
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Evaluate { board } => {
            println!("{}", evaluate(&board));
            Ok(())
        }
        Command::BestMove {
            board,
            side_to_move,
            unchecked,
            scores,
        } => best_move(&board, side_to_move, unchecked, scores),
        Command::SelfPlay { delay_ms } => {
            let delay = delay_ms.map_or_else(|| config.ai_delay(), Duration::from_millis);
            self_play(delay).await
        }
        Command::Verify => verify(),
    }
}

/// Print the selected cell for a board
fn best_move(board: &str, side_to_move: bool, unchecked: bool, show_scores: bool) -> Result<()> {
    let board = if unchecked {
        let cells = BoardState::parse_cells(board).context("Invalid board")?;
        BoardState::from_cells_unchecked(cells, AI_MARK)
    } else {
        board.parse::<BoardState>().context("Invalid board")?
    };
    if evaluate(&board).is_terminal() {
        bail!("Board {} is already finished: {}", board, evaluate(&board));
    }
    let mark = if side_to_move {
        board.next_to_move()
    } else {
        AI_MARK
    };
    let index = select_move_for(&board, mark);
    let position = Position::from_index(index).context("Selector returned an invalid index")?;
    println!("{} {}", index, position);
    if show_scores {
        for candidate in score_moves(&board, mark) {
            println!("  {} {:>3}", candidate.index, candidate.score);
        }
    }
    Ok(())
}

/// Engine against itself through the delayed-move boundary
#[instrument]
async fn self_play(delay: Duration) -> Result<()> {
    info!("Starting self-play");
    let mut board = new_game();
    while !evaluate(&board).is_terminal() {
        let pending = DelayedMove::compute(&board, board.next_to_move())
            .land_after(delay)
            .await;
        board = pending.apply().context("Engine produced an illegal move")?;
        if let Some(action) = pending.as_move() {
            info!(%action, board = %board, "Move landed");
        }
    }
    println!("{}", board);
    println!("{}", evaluate(&board));
    Ok(())
}

/// Exhaustive never-loses check for both marks
fn verify() -> Result<()> {
    let mut beaten = Vec::new();
    for mark in [Mark::X, Mark::O] {
        let report = audit(mark);
        println!(
            "{}: {} games, {} wins, {} draws, {} losses",
            report.ai(),
            report.games(),
            report.ai_wins(),
            report.draws(),
            report.ai_losses()
        );
        if !report.unbeaten() {
            beaten.push(mark);
        }
    }
    if !beaten.is_empty() {
        bail!("Engine lost games playing {:?}", beaten);
    }
    Ok(())
}
