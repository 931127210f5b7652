//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every move.
//! [`crate::Game`] checks [`GameInvariants`] in debug builds; they are
//! also testable on their own.

mod alternating_marks;
mod click_log;
mod single_step;

pub use alternating_marks::AlternatingMarksInvariant;
pub use click_log::{CurrentMoveInBoundsInvariant, ParallelClickLogInvariant};
pub use single_step::SingleStepInvariant;

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
///
/// Implemented for tuples; every member is checked and every failure
/// reported.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All history invariants as a composable set.
pub type GameInvariants = (
    CurrentMoveInBoundsInvariant,
    ParallelClickLogInvariant,
    SingleStepInvariant,
    AlternatingMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut game = Game::new();
        for i in [0, 4, 8, 2] {
            game.play(i);
        }
        game.jump_to(1).unwrap();
        game.play(6);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Game::new();
        game.play(4);
        // Extra snapshot that changes nothing, without a click.
        game.history.push(Board::new().with(Position::Center, Square::Occupied(Player::X)));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| v.description == ParallelClickLogInvariant::description()));
        assert!(violations
            .iter()
            .any(|v| v.description == SingleStepInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (ParallelClickLogInvariant, SingleStepInvariant);
        assert!(TwoInvariants::check_all(&Game::new()).is_ok());
    }
}
