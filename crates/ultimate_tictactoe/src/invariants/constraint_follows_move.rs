//! Constraint invariant: the played cell picks the next sub-board.

use super::super::Constraint;
use super::{Invariant, Transition};

/// Invariant: after a move into cell `p`, play is sent to sub-board `p`
/// unless it is decided, in which case any sub-board is open.
pub struct ConstraintFollowsMoveInvariant;

impl<'a> Invariant<Transition<'a>> for ConstraintFollowsMoveInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let target = transition.action.cell();
        let expected = if transition.after.outcome(target).is_decided() {
            Constraint::AnySubBoard
        } else {
            Constraint::MustPlayIn(target)
        };
        transition.after.constraint() == expected
    }

    fn description() -> &'static str {
        "Constraint sends play to the sub-board named by the played cell"
    }
}
