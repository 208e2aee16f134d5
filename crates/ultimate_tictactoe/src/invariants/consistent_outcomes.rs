//! Consistent outcome invariant: outcomes are computed from the cells.

use super::super::rules::sub_board_outcome;
use super::super::Position;
use super::{Invariant, Transition};

/// Invariant: every recorded sub-board outcome matches what its cells say.
///
/// Outcomes are never set directly, so `Won(s)` appears exactly when the
/// sub-board holds a line of `s`.
pub struct ConsistentOutcomesInvariant;

impl<'a> Invariant<Transition<'a>> for ConsistentOutcomesInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let after = transition.after;
        Position::ALL
            .into_iter()
            .all(|sub_board| {
                after.outcome(sub_board) == sub_board_outcome(after.board(), sub_board)
            })
    }

    fn description() -> &'static str {
        "Sub-board outcomes match the cells they summarize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, Coordinate, GameState, Move, Player, SubBoardOutcome};

    #[test]
    fn test_fresh_move_holds() {
        let before = GameState::new();
        let action = Move::new(Player::X, Coordinate::new(Position::TopLeft, Position::Center));
        let after = *apply_move(&before, action).unwrap().state();
        assert!(ConsistentOutcomesInvariant::holds(&Transition::new(&before, action, &after)));
    }

    #[test]
    fn test_invented_outcome_violates() {
        let before = GameState::new();
        let action = Move::new(Player::X, Coordinate::new(Position::TopLeft, Position::Center));
        let mut after = *apply_move(&before, action).unwrap().state();

        after.outcomes[Position::TopLeft.to_index()] = SubBoardOutcome::Won(Player::X);
        assert!(!ConsistentOutcomesInvariant::holds(&Transition::new(&before, action, &after)));
    }
}
