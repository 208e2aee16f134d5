//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the mover and the
//! target cell and can be validated independently of execution.

use super::{Coordinate, Player, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on one of the 81 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player marks.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the target cell.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the sub-board the move lands in.
    pub fn sub_board(&self) -> Position {
        self.coordinate.sub_board
    }

    /// Returns the cell inside the sub-board, which is also the sub-board
    /// the opponent is sent to.
    pub fn cell(&self) -> Position {
        self.coordinate.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate)
    }
}

/// Reason a move was rejected.
///
/// Every variant is recoverable by the caller; the rejected state is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// The move ignores the send-to-board constraint.
    #[display("Must play in sub-board {required}, not {attempted}")]
    WrongSubBoard {
        /// Sub-board the constraint requires.
        required: Position,
        /// Sub-board the move targeted.
        attempted: Position,
    },

    /// The target sub-board is already won or drawn.
    #[display("Sub-board {} is already decided", _0)]
    SubBoardAlreadyDecided(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
