//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, Transition, UltimateInvariants};
use super::rules::is_game_over;
use super::{Coordinate, GameState};
use tracing::{instrument, trace, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must not be finished.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is won or drawn.
    pub fn check(_coordinate: Coordinate, state: &GameState) -> Result<(), MoveError> {
        if is_game_over(state) {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto an occupied cell.
    pub fn check(coordinate: Coordinate, state: &GameState) -> Result<(), MoveError> {
        if !state.board().is_empty(coordinate) {
            Err(MoveError::CellOccupied(coordinate))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target sub-board must satisfy the active constraint.
pub struct InActiveSubBoard;

impl InActiveSubBoard {
    /// Rejects a move outside the sub-board play was sent to.
    pub fn check(coordinate: Coordinate, state: &GameState) -> Result<(), MoveError> {
        match state.constraint() {
            crate::Constraint::MustPlayIn(required) if required != coordinate.sub_board => {
                Err(MoveError::WrongSubBoard {
                    required,
                    attempted: coordinate.sub_board,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: the target sub-board must still be undecided.
pub struct SubBoardOpen;

impl SubBoardOpen {
    /// Rejects a move into a won or drawn sub-board, even under
    /// `AnySubBoard`.
    pub fn check(coordinate: Coordinate, state: &GameState) -> Result<(), MoveError> {
        if state.outcome(coordinate.sub_board).is_decided() {
            Err(MoveError::SubBoardAlreadyDecided(coordinate.sub_board))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: all four legality checks, in reporting order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move into `coordinate`.
    ///
    /// Legality does not depend on who moves; the first failing check
    /// decides the error.
    pub fn check(coordinate: Coordinate, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(coordinate, state)?;
        CellIsEmpty::check(coordinate, state)?;
        InActiveSubBoard::check(coordinate, state)?;
        SubBoardOpen::check(coordinate, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game not over
/// - Cell empty
/// - Sub-board allowed by the constraint
/// - Sub-board undecided
///
/// Postconditions:
/// - Cells are write-once
/// - Outcomes are monotonic and consistent with the cells
/// - Constraint follows the played cell
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    #[instrument(level = "trace", skip(state))]
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action.coordinate, state)
            .inspect_err(|error| trace!(%error, "Move rejected"))
    }

    #[instrument(level = "trace", skip(before, after))]
    fn post(before: &GameState, action: &Move, after: &GameState) -> Result<(), MoveError> {
        let transition = Transition::new(before, *action, after);
        <UltimateInvariants as InvariantSet<Transition>>::check_all(&transition).map_err(
            |violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(%descriptions, "Move postcondition failed");
                MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
            },
        )
    }
}
