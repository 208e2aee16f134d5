//! Win detection logic.

use super::super::{Player, Position, SubBoardOutcome};
use tracing::instrument;

/// The eight winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks a 3x3 grid for three in a row.
///
/// Returns the symbol of the first complete line in [`LINES`] order, or
/// `None` if no line is complete.
#[instrument(level = "trace")]
pub fn three_in_a_row(values: [Option<Player>; 9]) -> Option<Player> {
    for [a, b, c] in LINES {
        let first = values[a.to_index()];
        if first.is_some() && first == values[b.to_index()] && first == values[c.to_index()] {
            return first;
        }
    }

    None
}

/// Checks the sub-board outcomes for an overall winner.
///
/// `Won(p)` counts as `p`; drawn and undecided sub-boards count as empty.
#[instrument(level = "trace")]
pub fn overall_winner(outcomes: &[SubBoardOutcome; 9]) -> Option<Player> {
    three_in_a_row((*outcomes).map(SubBoardOutcome::winner))
}
