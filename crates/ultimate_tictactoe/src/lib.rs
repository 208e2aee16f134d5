//! Ultimate tic-tac-toe rules engine.
//!
//! A 3x3 grid of 3x3 sub-boards. The cell a player marks inside a sub-board
//! names the sub-board the opponent must play in next; a sub-board that is
//! won or drawn is frozen, and sending play there frees the opponent to
//! choose any open sub-board. Three won sub-boards in a row win the game.
//!
//! # Architecture
//!
//! - **Board model**: [`GameState`], [`Board`] and the pure evaluation
//!   functions in [`rules`].
//! - **Move validator**: [`apply_move`] and [`legal_moves`], backed by the
//!   preconditions in [`MoveContract`] and the transition invariants it
//!   checks in debug builds.
//! - **Turn tracking**: the [`GameSetup`] / [`GameInProgress`] /
//!   [`GameFinished`] typestate for embeddings that want the engine to
//!   enforce alternation.
//!
//! Nothing here performs I/O or holds shared state: every function is a
//! deterministic mapping from inputs to outputs.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{apply_move, Constraint, Coordinate, GameState, Move, Player, Position};
//!
//! let state = GameState::new();
//! let action = Move::new(Player::X, Coordinate::new(Position::TopLeft, Position::Center));
//! let applied = apply_move(&state, action)?;
//! assert_eq!(applied.next_constraint(), Constraint::MustPlayIn(Position::Center));
//! # Ok::<(), ultimate_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod types;
mod typestate;

// Crate-level exports - Board model
pub use position::{Coordinate, NotationError, Position};
pub use types::{
    Board, Constraint, GameState, GameStatus, Player, Square, StateError, SubBoardOutcome,
};

/// Alias for the mark a player places.
pub type Symbol = Player;

// Crate-level exports - Move validation
pub use action::{Move, MoveError};
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, InActiveSubBoard, LegalMove, MoveContract, SubBoardOpen,
};
pub use engine::{apply_move, legal_moves, AppliedMove};
pub use rules::{is_game_over, overall_winner, sub_board_outcome, three_in_a_row};

// Crate-level exports - Invariants
pub use invariants::{
    ConsistentOutcomesInvariant, ConstraintFollowsMoveInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicOutcomesInvariant, Transition, UltimateInvariants,
    WriteOnceInvariant,
};

// Crate-level exports - Typestate
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, Outcome};
