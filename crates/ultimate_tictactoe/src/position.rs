//! Positions inside a 3x3 grid and coordinates on the 81-cell board.

use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position inside a 3x3 grid (0-8, row-major).
///
/// The same enum names both a sub-board on the overall board and a cell
/// inside a sub-board. Playing into cell `p` sends the opponent to
/// sub-board `p`.
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
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Short code accepted in move notation (`tl`, `c`, `br`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Position::TopLeft => "tl",
            Position::TopCenter => "tc",
            Position::TopRight => "tr",
            Position::MiddleLeft => "ml",
            Position::Center => "c",
            Position::MiddleRight => "mr",
            Position::BottomLeft => "bl",
            Position::BottomCenter => "bc",
            Position::BottomRight => "br",
        }
    }

    /// Converts position to grid index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse from a number (0-8), a label or a short code.
    ///
    /// Labels are matched case-insensitively and ignore `-`, `_` and spaces,
    /// so `"top-left"`, `"TopLeft"` and `"tl"` all name the same position.
    #[instrument(level = "trace")]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = normalize(s);
        Position::iter().find(|pos| normalize(pos.label()) == wanted || pos.code() == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Address of one of the 81 cells: a sub-board and a cell inside it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct Coordinate {
    /// The sub-board (0-8) holding the cell.
    pub sub_board: Position,
    /// The cell (0-8) inside the sub-board.
    pub cell: Position,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(sub_board: Position, cell: Position) -> Self {
        Self { sub_board, cell }
    }

    /// Creates a coordinate from numeric sub-board and cell indices.
    pub fn from_indices(sub_board: usize, cell: usize) -> Option<Self> {
        Some(Self::new(
            Position::from_index(sub_board)?,
            Position::from_index(cell)?,
        ))
    }

    /// Returns the sub-board.
    pub fn sub_board(&self) -> Position {
        self.sub_board
    }

    /// Returns the cell inside the sub-board.
    pub fn cell(&self) -> Position {
        self.cell
    }

    /// Flat index into the 81-cell board: `sub_board * 9 + cell`.
    pub fn to_flat(self) -> usize {
        self.sub_board.to_index() * 9 + self.cell.to_index()
    }

    /// Inverse of [`Coordinate::to_flat`].
    pub fn from_flat(index: usize) -> Option<Self> {
        if index >= 81 {
            return None;
        }
        Self::from_indices(index / 9, index % 9)
    }

    /// Iterates all 81 coordinates in flat-index order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        Position::ALL
            .into_iter()
            .flat_map(|sub_board| {
                Position::ALL
                    .into_iter()
                    .map(move |cell| Coordinate::new(sub_board, cell))
            })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.sub_board, self.cell)
    }
}

impl FromStr for Coordinate {
    type Err = NotationError;

    /// Parses `"<sub_board> <cell>"`. Separators may be whitespace, `,`, `:`
    /// or `/`; each part is anything [`Position::from_label_or_number`] takes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | ':' | '/'))
            .filter(|part| !part.is_empty())
            .collect();

        let [sub_board, cell] = parts.as_slice() else {
            return Err(NotationError::new(format!(
                "Expected '<sub_board> <cell>', got '{}'",
                s.trim()
            )));
        };

        let sub_board = Position::from_label_or_number(sub_board)
            .ok_or_else(|| NotationError::new(format!("Unknown sub-board '{}'", sub_board)))?;
        let cell = Position::from_label_or_number(cell)
            .ok_or_else(|| NotationError::new(format!("Unknown cell '{}'", cell)))?;

        Ok(Coordinate::new(sub_board, cell))
    }
}

/// Move notation that could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Notation error: {}", message)]
pub struct NotationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NotationError {
    /// Creates a new notation error with caller location tracking.
    #[track_caller]
    #[instrument(level = "trace", skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
