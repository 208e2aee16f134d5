//! Two players sharing one terminal.

use crate::report::{legal_moves_line, turn_line};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{Coordinate, GameFinished, GameInProgress, GameResult};

/// Interactive session reading coordinates from `input` and writing the
/// board to `output`.
///
/// Rejected or unparsable moves are reported and the same player is asked
/// again. The session ends when the game finishes, the input closes or a
/// player types `quit`.
pub struct Hotseat<R, W> {
    input: R,
    output: W,
    show_legal_moves: bool,
}

impl<R: BufRead, W: Write> Hotseat<R, W> {
    /// Creates a new session.
    pub fn new(input: R, output: W, show_legal_moves: bool) -> Self {
        Self {
            input,
            output,
            show_legal_moves,
        }
    }

    /// Runs the session from `game` until it ends.
    ///
    /// Returns the finished game, or `None` if the players stopped early.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: GameInProgress) -> Result<Option<GameFinished>> {
        info!(first = %game.to_move(), "Starting hotseat game");
        let mut game = game;

        loop {
            self.show(&game)?;

            let Some(line) = self.read_line()? else {
                info!(moves = game.history().len(), "Input closed, leaving game");
                return Ok(None);
            };
            if line.is_empty() {
                continue;
            }
            if matches!(line.as_str(), "q" | "quit" | "exit") {
                info!(moves = game.history().len(), "Players quit");
                return Ok(None);
            }

            let coordinate = match line.parse::<Coordinate>() {
                Ok(coordinate) => coordinate,
                Err(e) => {
                    writeln!(self.output, "{}", e.message)?;
                    continue;
                }
            };

            match game.make_move(coordinate) {
                Ok(GameResult::InProgress(next)) => game = next,
                Ok(GameResult::Finished(finished)) => {
                    writeln!(self.output, "{}", finished.state().board().display())?;
                    writeln!(self.output, "{}", finished.outcome())?;
                    info!(outcome = %finished.outcome(), "Game finished");
                    return Ok(Some(finished));
                }
                Err(e) => {
                    debug!(error = %e, %coordinate, "Move rejected");
                    writeln!(self.output, "Rejected: {}", e)?;
                }
            }
        }
    }

    fn show(&mut self, game: &GameInProgress) -> Result<()> {
        writeln!(self.output, "{}", game.state().board().display())?;
        writeln!(self.output, "{}", turn_line(game))?;
        if self.show_legal_moves {
            writeln!(self.output, "{}", legal_moves_line(&game.valid_moves()))?;
        }
        write!(self.output, "{}> ", game.to_move())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
