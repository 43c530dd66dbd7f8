//! Derived game outcome.

use super::types::Mark;

/// Result of evaluating a board. Computed on demand, never stored.
///
/// `Win` and `Draw` are terminal: no further moves are accepted until the
/// caller starts a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A side completed a line.
    Win(Mark),
    /// Board is full without a winning line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win(mark) => Some(*mark),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(mark) => write!(f, "Winner: {}", mark),
            GameResult::Draw => write!(f, "Draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_only_for_wins() {
        assert_eq!(GameResult::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(GameResult::Draw.winner(), None);
        assert_eq!(GameResult::InProgress.winner(), None);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameResult::Win(Mark::X).to_string(), "Winner: X");
        assert_eq!(GameResult::Draw.to_string(), "Draw!");
        assert!(GameResult::Draw.is_terminal());
        assert!(!GameResult::InProgress.is_terminal());
    }
}
