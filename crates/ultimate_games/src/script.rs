//! Move scripts: one coordinate per line.
//!
//! ```text
//! # X opens in the center sub-board
//! 4 4
//! center top-left
//! ```
//!
//! Blank lines and `#` comments are ignored. Players alternate, starting
//! with the configured first player.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::{debug, instrument};
use ultimate_tictactoe::{
    Coordinate, GameInProgress, GameResult, GameSetup, MoveError, NotationError, Player,
};

/// A coordinate together with the script line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    /// 1-based line number.
    pub line: usize,
    /// The parsed coordinate.
    pub coordinate: Coordinate,
}

/// Failure to read, parse or play a script.
#[derive(Debug, Display, Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[display("Failed to read script {}: {}", path, message)]
    Read {
        /// Script path.
        path: String,
        /// I/O error text.
        message: String,
    },

    /// A line is not a coordinate.
    #[display("Line {}: {}", line, source)]
    Notation {
        /// 1-based line number.
        line: usize,
        /// Parse failure.
        source: NotationError,
    },

    /// A move the rules reject.
    #[display("Line {}: {}", line, source)]
    Illegal {
        /// 1-based line number.
        line: usize,
        /// Rejection reason.
        source: MoveError,
    },
}

/// A parsed move script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveScript {
    moves: Vec<ScriptedMove>,
}

impl MoveScript {
    /// Parses script text.
    #[instrument(skip(text))]
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut moves = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            let coordinate = content
                .parse::<Coordinate>()
                .map_err(|source| ScriptError::Notation { line, source })?;
            moves.push(ScriptedMove { line, coordinate });
        }
        debug!(moves = moves.len(), "Parsed move script");
        Ok(Self { moves })
    }

    /// Reads and parses a script file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| ScriptError::Read {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&text)
    }

    /// Returns the scripted moves.
    pub fn moves(&self) -> &[ScriptedMove] {
        &self.moves
    }

    /// Plays the script on a fresh game, alternating from `first`.
    ///
    /// A move after the game has finished is reported as
    /// [`MoveError::GameAlreadyOver`] on its line.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn run(&self, first: Player) -> Result<GameResult, ScriptError> {
        let mut result = GameResult::InProgress(GameSetup::new().start(first));

        for scripted in &self.moves {
            let game: &GameInProgress = match &result {
                GameResult::InProgress(game) => game,
                GameResult::Finished(_) => {
                    return Err(ScriptError::Illegal {
                        line: scripted.line,
                        source: MoveError::GameAlreadyOver,
                    });
                }
            };
            result = game
                .make_move(scripted.coordinate)
                .map_err(|source| ScriptError::Illegal {
                    line: scripted.line,
                    source,
                })?;
        }

        Ok(result)
    }
}
