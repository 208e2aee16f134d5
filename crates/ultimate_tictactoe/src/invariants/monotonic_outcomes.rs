//! Monotonic outcome invariant: decided sub-boards stay decided.

use super::{Invariant, Transition};

/// Invariant: once a sub-board outcome is decided it never changes.
pub struct MonotonicOutcomesInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicOutcomesInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        transition
            .before
            .outcomes()
            .iter()
            .zip(transition.after.outcomes())
            .all(|(before, after)| !before.is_decided() || before == after)
    }

    fn description() -> &'static str {
        "Sub-board outcomes are monotonic (never revert or change once decided)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, GameState, Move, Player, Position, Square, SubBoardOutcome};

    fn decided_pair() -> (GameState, Move, GameState) {
        let mut before = GameState::new();
        before.outcomes[0] = SubBoardOutcome::Won(Player::X);
        let action = Move::new(Player::O, Coordinate::new(Position::Center, Position::TopRight));
        let mut after = before;
        after.board.set(action.coordinate, Square::Occupied(Player::O));
        (before, action, after)
    }

    #[test]
    fn test_decided_outcome_carried_over() {
        let (before, action, after) = decided_pair();
        assert!(MonotonicOutcomesInvariant::holds(&Transition::new(&before, action, &after)));
    }

    #[test]
    fn test_reverted_outcome_violates() {
        let (before, action, mut after) = decided_pair();
        after.outcomes[0] = SubBoardOutcome::Undecided;
        assert!(!MonotonicOutcomesInvariant::holds(&Transition::new(&before, action, &after)));
    }

    #[test]
    fn test_newly_decided_outcome_holds() {
        let (before, action, mut after) = decided_pair();
        after.outcomes[4] = SubBoardOutcome::Drawn;
        assert!(MonotonicOutcomesInvariant::holds(&Transition::new(&before, action, &after)));
    }
}
