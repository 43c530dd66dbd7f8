//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that every board produced by the
//! engine must satisfy. `apply_move` checks them as postconditions in debug
//! builds, and tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod single_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (AlternatingTurnInvariant, SingleWinnerInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BoardState, Cell, Mark};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&BoardState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two X lines and an O line, with O "to move": nothing here is reachable.
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        let board = BoardState::from_cells_unchecked([x, x, x, o, o, o, x, x, x], Mark::O);

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
    }
}
