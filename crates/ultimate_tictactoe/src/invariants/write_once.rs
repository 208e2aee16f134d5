//! Write-once invariant: cells never change once set.

use super::super::Square;
use super::{Invariant, Transition};

/// Invariant: only the played cell changes, from empty to the mover's mark.
///
/// Every other cell, occupied or not, is carried over untouched.
pub struct WriteOnceInvariant;

impl<'a> Invariant<Transition<'a>> for WriteOnceInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let played = transition.action.coordinate;

        crate::Coordinate::all().all(|coordinate| {
            let before = transition.before.board().get(coordinate);
            let after = transition.after.board().get(coordinate);
            if coordinate == played {
                before == Square::Empty && after == Square::Occupied(transition.action.player)
            } else {
                before == after
            }
        })
    }

    fn description() -> &'static str {
        "Cells are write-once (only the played cell changes)"
    }
}
