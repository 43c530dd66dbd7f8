//! Exhaustive check that the selector never loses.

use super::super::phases::GameResult;
use super::super::rules::outcome;
use super::super::types::{BoardState, Mark};
use super::minimax::select_move_for;
use derive_getters::Getters;
use tracing::{info, instrument};

/// Tally of every finished game in an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct AuditReport {
    /// Mark the selector played.
    ai: Mark,
    /// Games the selector won.
    ai_wins: u64,
    /// Drawn games.
    draws: u64,
    /// Games the selector lost. Zero for a sound selector.
    ai_losses: u64,
}

impl AuditReport {
    fn new(ai: Mark) -> Self {
        Self {
            ai,
            ai_wins: 0,
            draws: 0,
            ai_losses: 0,
        }
    }

    /// Total number of finished games.
    pub fn games(&self) -> u64 {
        self.ai_wins + self.draws + self.ai_losses
    }

    /// True when no game was lost.
    pub fn unbeaten(&self) -> bool {
        self.ai_losses == 0
    }

    fn record(&mut self, result: GameResult) {
        match result.winner() {
            Some(mark) if mark == self.ai => self.ai_wins += 1,
            Some(_) => self.ai_losses += 1,
            None if result.is_terminal() => self.draws += 1,
            None => {}
        }
    }
}

fn explore(board: BoardState, ai: Mark, report: &mut AuditReport) {
    let result = outcome(&board);
    if result.is_terminal() {
        report.record(result);
        return;
    }
    if board.next_to_move() == ai {
        let index = select_move_for(&board, ai);
        explore(board.place_unchecked(index), ai, report);
    } else {
        for index in board.empty_cells() {
            explore(board.place_unchecked(index), ai, report);
        }
    }
}

/// Plays the selector as `ai` from an empty board against every possible
/// sequence of opposing moves.
#[instrument]
pub fn audit(ai: Mark) -> AuditReport {
    let mut report = AuditReport::new(ai);
    explore(BoardState::new(), ai, &mut report);
    info!(
        games = report.games(),
        ai_wins = report.ai_wins,
        draws = report.draws,
        ai_losses = report.ai_losses,
        "Audit finished"
    );
    report
}
