//! Move validation and application.
//!
//! [`apply_move`] and [`legal_moves`] are pure: the same state and move
//! always produce the same result, independent of timing or caller.

use super::action::{Move, MoveError};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::rules::{is_game_over, overall_winner, sub_board_outcome};
use super::{Constraint, Coordinate, GameState, Player, Position, Square, SubBoardOutcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// An accepted move: the resulting state and the winner it produced, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    state: GameState,
    winner: Option<Player>,
}

impl AppliedMove {
    /// Returns the resulting state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the result, returning the resulting state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Returns the overall winner if this move completed the game.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the constraint the opponent must satisfy.
    pub fn next_constraint(&self) -> Constraint {
        self.state.constraint()
    }
}

/// Validates `action` against `state` and returns the resulting state.
///
/// Checks, in order: game over, occupied cell, send-to-board constraint,
/// decided sub-board. The mover is not checked against a turn order; see
/// [`crate::GameInProgress`] for that.
#[instrument(level = "debug", skip(state), fields(constraint = %state.constraint()))]
pub fn apply_move(state: &GameState, action: Move) -> Result<AppliedMove, MoveError> {
    MoveContract::pre(state, &action)?;

    let mut next = *state;
    next.board.set(action.coordinate, Square::Occupied(action.player));

    let sub_board = action.sub_board();
    next.outcomes[sub_board.to_index()] = sub_board_outcome(&next.board, sub_board);
    next.constraint = constraint_after(&next.outcomes, action.cell());
    let winner = overall_winner(&next.outcomes);

    #[cfg(debug_assertions)]
    MoveContract::post(state, &action, &next)?;

    Ok(AppliedMove {
        state: next,
        winner,
    })
}

/// Play goes to the sub-board named by the played cell, or anywhere if
/// that sub-board is decided.
fn constraint_after(outcomes: &[SubBoardOutcome; 9], cell: Position) -> Constraint {
    if outcomes[cell.to_index()].is_decided() {
        Constraint::AnySubBoard
    } else {
        Constraint::MustPlayIn(cell)
    }
}

/// Returns every cell [`apply_move`] would accept for the next move.
#[instrument(level = "trace", skip(state))]
pub fn legal_moves(state: &GameState) -> BTreeSet<Coordinate> {
    if is_game_over(state) {
        return BTreeSet::new();
    }

    Coordinate::all()
        .filter(|coordinate| LegalMove::check(*coordinate, state).is_ok())
        .collect()
}
