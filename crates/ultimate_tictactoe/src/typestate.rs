//! Typestate-based game flow with turn tracking.
//!
//! [`crate::apply_move`] is turn-agnostic: the caller says who moves. This
//! module layers the turn order on top. The phase is encoded in the type,
//! so a finished game has no way to accept another move and always carries
//! its outcome.

use super::action::{Move, MoveError};
use super::engine::{apply_move, legal_moves};
use super::rules::is_game_over;
use super::{Coordinate, GameState, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game being set up: no moves, no player to move yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameSetup;

impl GameSetup {
    /// Creates a new setup.
    pub fn new() -> Self {
        Self
    }

    /// Starts the game with `first` to move on a fresh board.
    #[instrument(level = "debug")]
    pub fn start(self, first: Player) -> GameInProgress {
        GameInProgress {
            state: GameState::new(),
            history: Vec::new(),
            to_move: first,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  In-Progress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariants enforced by type:
/// - to_move alternates
/// - No outcome yet (outcome is in GameFinished)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    state: GameState,
    history: Vec<Move>,
    to_move: Player,
}

impl GameInProgress {
    /// Plays `coordinate` for the player to move.
    #[instrument(level = "debug", skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&self, coordinate: Coordinate) -> Result<GameResult, MoveError> {
        self.play(Move::new(self.to_move, coordinate))
    }

    /// Applies a fully specified move.
    ///
    /// Fails with [`MoveError::WrongPlayer`] if `action.player` is not the
    /// player to move, and otherwise with whatever [`apply_move`] reports.
    /// `self` is left untouched either way.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&self, action: Move) -> Result<GameResult, MoveError> {
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }

        let applied = apply_move(&self.state, action)?;
        let mut history = self.history.clone();
        history.push(action);
        let winner = applied.winner();
        let state = applied.into_state();

        if let Some(winner) = winner {
            debug!(%winner, moves = history.len(), "Game won");
            return Ok(GameResult::Finished(GameFinished {
                state,
                history,
                outcome: Outcome::Winner(winner),
            }));
        }

        if is_game_over(&state) {
            debug!(moves = history.len(), "Game drawn");
            return Ok(GameResult::Finished(GameFinished {
                state,
                history,
                outcome: Outcome::Draw,
            }));
        }

        Ok(GameResult::InProgress(GameInProgress {
            state,
            history,
            to_move: self.to_move.opponent(),
        }))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the canonical state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the cells the player to move may play.
    pub fn valid_moves(&self) -> BTreeSet<Coordinate> {
        legal_moves(&self.state)
    }

    /// Replays coordinates from a fresh game, alternating from `first`.
    ///
    /// Coordinates left over after the game finishes are rejected with
    /// [`MoveError::GameAlreadyOver`].
    #[instrument(level = "debug", skip(coordinates), fields(moves = coordinates.len()))]
    pub fn replay(first: Player, coordinates: &[Coordinate]) -> Result<GameResult, MoveError> {
        let mut result = GameResult::InProgress(GameSetup::new().start(first));

        for coordinate in coordinates {
            result = match result {
                GameResult::InProgress(game) => game.make_move(*coordinate)?,
                GameResult::Finished(_) => return Err(MoveError::GameAlreadyOver),
            };
        }

        Ok(result)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Every sub-board was decided without a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Game finished - outcome determined.
///
/// The outcome is always present, never an `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    state: GameState,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(level = "debug", skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the state after the move, whatever the phase.
    pub fn state(&self) -> &GameState {
        match self {
            GameResult::InProgress(game) => game.state(),
            GameResult::Finished(game) => game.state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constraint, Position};

    fn at(sub_board: usize, cell: usize) -> Coordinate {
        Coordinate::from_indices(sub_board, cell).unwrap()
    }

    fn in_progress(result: GameResult) -> GameInProgress {
        match result {
            GameResult::InProgress(game) => game,
            GameResult::Finished(game) => panic!("Unexpected finish: {}", game.outcome()),
        }
    }

    #[test]
    fn test_players_alternate() {
        let game = GameSetup::new().start(Player::O);
        assert_eq!(game.to_move(), Player::O);

        let game = in_progress(game.make_move(at(4, 4)).unwrap());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history(), &[Move::new(Player::O, at(4, 4))]);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let game = GameSetup::new().start(Player::X);
        let err = game.play(Move::new(Player::O, at(0, 0))).unwrap_err();
        assert_eq!(err, MoveError::WrongPlayer(Player::O));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_rejected_move_keeps_game() {
        let game = in_progress(GameSetup::new().start(Player::X).make_move(at(0, 3)).unwrap());
        assert_eq!(
            game.make_move(at(5, 0)),
            Err(MoveError::WrongSubBoard {
                required: Position::MiddleLeft,
                attempted: Position::MiddleRight,
            })
        );
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_replay_matches_stepwise_play() {
        let coordinates = [at(0, 4), at(4, 0), at(0, 8)];
        let replayed = in_progress(GameInProgress::replay(Player::X, &coordinates).unwrap());

        let mut game = GameSetup::new().start(Player::X);
        for coordinate in coordinates {
            game = in_progress(game.make_move(coordinate).unwrap());
        }

        assert_eq!(replayed, game);
        assert_eq!(replayed.state().constraint(), Constraint::MustPlayIn(Position::BottomRight));
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::Winner(Player::X).winner(), Some(Player::X));
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Player O wins");
    }
}
