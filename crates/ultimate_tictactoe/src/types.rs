//! Core domain types for ultimate tic-tac-toe.

use super::position::{Coordinate, Position};
use super::rules;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player in the game, identified by the mark they place.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Result of play inside one sub-board.
///
/// Decided outcomes (`Won`, `Drawn`) are frozen: the sub-board accepts no
/// further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubBoardOutcome {
    /// Still open for play.
    #[default]
    Undecided,
    /// A player completed three in a row.
    Won(Player),
    /// Every cell is filled and nobody has a line.
    Drawn,
}

impl SubBoardOutcome {
    /// Returns true once the outcome is frozen.
    pub fn is_decided(self) -> bool {
        !matches!(self, SubBoardOutcome::Undecided)
    }

    /// Returns the winner, treating `Drawn` and `Undecided` as empty.
    pub fn winner(self) -> Option<Player> {
        match self {
            SubBoardOutcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Which sub-boards accept a move on the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Constraint {
    /// Any undecided sub-board may be played.
    #[default]
    AnySubBoard,
    /// Only the given sub-board may be played.
    MustPlayIn(Position),
}

impl Constraint {
    /// Returns true if the constraint lets a move land in `sub_board`.
    pub fn allows(self, sub_board: Position) -> bool {
        match self {
            Constraint::AnySubBoard => true,
            Constraint::MustPlayIn(required) => required == sub_board,
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::AnySubBoard => write!(f, "any sub-board"),
            Constraint::MustPlayIn(sub_board) => write!(f, "must play in {}", sub_board),
        }
    }
}

/// The 81-cell board: nine 3x3 sub-boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares per sub-board, each in row-major order.
    sub_boards: [[Square; 9]; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Square {
        self.sub_boards[coordinate.sub_board.to_index()][coordinate.cell.to_index()]
    }

    /// Sets the square at the given coordinate.
    pub(crate) fn set(&mut self, coordinate: Coordinate, square: Square) {
        self.sub_boards[coordinate.sub_board.to_index()][coordinate.cell.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate) == Square::Empty
    }

    /// Returns the nine squares of one sub-board.
    pub fn sub_board(&self, sub_board: Position) -> &[Square; 9] {
        &self.sub_boards[sub_board.to_index()]
    }

    /// Number of occupied squares on the whole board.
    pub fn occupied(&self) -> usize {
        self.sub_boards
            .iter()
            .flatten()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Formats the board as a 9x9 grid with sub-board separators.
    ///
    /// Empty cells are `.`; rows run top to bottom across all sub-boards.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..9 {
            if row == 3 || row == 6 {
                result.push_str("------+-------+------\n");
            }
            for col in 0..9 {
                let sub_board = (row / 3) * 3 + col / 3;
                let cell = (row % 3) * 3 + col % 3;
                let symbol = match self.sub_boards[sub_board][cell] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col == 2 || col == 5 {
                    result.push_str(" | ");
                } else if col < 8 {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        result
    }
}

/// Current status of the game, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing under the given constraint.
    InProgress(Constraint),
    /// Game ended in a win.
    Won(Player),
    /// Every sub-board is decided and nobody has a line of them.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(constraint) => write!(f, "In progress ({})", constraint),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete, canonical game state.
///
/// Whose turn it is is deliberately absent: the embedding tracks it (see
/// [`crate::GameInProgress`]) and passes the mover into
/// [`crate::apply_move`].
///
/// Deserializing checks the state against its own board: every outcome must
/// be the one the cells produce, and a `MustPlayIn` constraint must name an
/// undecided sub-board. Anything else is rejected with a [`StateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Outcome of each sub-board, indexed by [`Position::to_index`].
    pub(crate) outcomes: [SubBoardOutcome; 9],
    /// Sub-boards open to the next move.
    pub(crate) constraint: Constraint,
}

impl GameState {
    /// Creates a new game: empty board, nothing decided, any sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns all sub-board outcomes.
    pub fn outcomes(&self) -> &[SubBoardOutcome; 9] {
        &self.outcomes
    }

    /// Returns the outcome of one sub-board.
    pub fn outcome(&self, sub_board: Position) -> SubBoardOutcome {
        self.outcomes[sub_board.to_index()]
    }

    /// Returns the active constraint.
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Returns the overall winner, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::overall_winner(&self.outcomes)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if rules::all_decided(&self.outcomes) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.constraint)
        }
    }
}

/// Wire form of [`GameState`] before it is checked.
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    outcomes: [SubBoardOutcome; 9],
    constraint: Constraint,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        for sub_board in Position::ALL {
            let recorded = raw.outcomes[sub_board.to_index()];
            let actual = rules::sub_board_outcome(&raw.board, sub_board);
            if recorded != actual {
                return Err(StateError::OutcomeMismatch {
                    sub_board,
                    recorded,
                    actual,
                });
            }
        }

        if let Constraint::MustPlayIn(sub_board) = raw.constraint
            && raw.outcomes[sub_board.to_index()].is_decided()
        {
            return Err(StateError::ConstraintOnDecided { sub_board });
        }

        Ok(Self {
            board: raw.board,
            outcomes: raw.outcomes,
            constraint: raw.constraint,
        })
    }
}

/// A state that legal play could not have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// A recorded outcome disagrees with the sub-board's cells.
    #[display("Sub-board {sub_board} is recorded as {recorded:?} but its cells give {actual:?}")]
    OutcomeMismatch {
        /// The sub-board in question.
        sub_board: Position,
        /// Outcome carried by the state.
        recorded: SubBoardOutcome,
        /// Outcome computed from the cells.
        actual: SubBoardOutcome,
    },

    /// The constraint sends play into a sub-board that accepts no moves.
    #[display("Constraint sends play to decided sub-board {sub_board}")]
    ConstraintOnDecided {
        /// The decided sub-board.
        sub_board: Position,
    },
}

impl std::error::Error for StateError {}
