//! First-class invariants for ultimate tic-tac-toe.
//!
//! Invariants are logical properties of a move transition
//! `(before, move, after)` that must hold for every accepted move. They are
//! checked as postconditions in debug builds and can be tested
//! independently.

use super::{GameState, Move};

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
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !<$inv as Invariant<S>>::holds(state) {
                        violations.push(InvariantViolation::new(
                            <$inv as Invariant<S>>::description(),
                        ));
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

/// One accepted move: the state before, the move, and the state after.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State the move was applied to.
    pub before: &'a GameState,
    /// The move.
    pub action: Move,
    /// Resulting state.
    pub after: &'a GameState,
}

impl<'a> Transition<'a> {
    /// Creates a new transition.
    pub fn new(before: &'a GameState, action: Move, after: &'a GameState) -> Self {
        Self {
            before,
            action,
            after,
        }
    }
}

pub mod consistent_outcomes;
pub mod constraint_follows_move;
pub mod monotonic_outcomes;
pub mod write_once;

pub use consistent_outcomes::ConsistentOutcomesInvariant;
pub use constraint_follows_move::ConstraintFollowsMoveInvariant;
pub use monotonic_outcomes::MonotonicOutcomesInvariant;
pub use write_once::WriteOnceInvariant;

/// All move invariants as a composable set.
pub type UltimateInvariants = (
    WriteOnceInvariant,
    MonotonicOutcomesInvariant,
    ConsistentOutcomesInvariant,
    ConstraintFollowsMoveInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, Constraint, Coordinate, Player, Position};

    fn at(sub_board: usize, cell: usize) -> Coordinate {
        Coordinate::from_indices(sub_board, cell).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_accepted_moves() {
        let mut state = GameState::new();
        for (player, coordinate) in [
            (Player::X, at(4, 0)),
            (Player::O, at(0, 4)),
            (Player::X, at(4, 8)),
        ] {
            let action = Move::new(player, coordinate);
            let next = *apply_move(&state, action).unwrap().state();
            let transition = Transition::new(&state, action, &next);
            let checked = <UltimateInvariants as InvariantSet<Transition>>::check_all(&transition);
            assert!(checked.is_ok());
            state = next;
        }
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let before = GameState::new();
        let action = Move::new(Player::X, at(0, 0));
        let mut after = *apply_move(&before, action).unwrap().state();

        // Wrong constraint and a spurious decided outcome.
        after.constraint = Constraint::MustPlayIn(Position::Center);
        after.outcomes[8] = crate::SubBoardOutcome::Won(Player::O);

        let transition = Transition::new(&before, action, &after);
        let violations =
            <UltimateInvariants as InvariantSet<Transition>>::check_all(&transition).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let before = GameState::new();
        let action = Move::new(Player::O, at(3, 3));
        let after = *apply_move(&before, action).unwrap().state();
        let transition = Transition::new(&before, action, &after);

        type TwoInvariants = (WriteOnceInvariant, MonotonicOutcomesInvariant);
        assert!(<TwoInvariants as InvariantSet<Transition>>::check_all(&transition).is_ok());
    }
}
