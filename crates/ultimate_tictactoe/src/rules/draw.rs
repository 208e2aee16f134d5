//! Draw detection logic.

use super::super::{Square, SubBoardOutcome};
use tracing::instrument;

/// Checks if a 3x3 grid is full (all squares occupied).
///
/// A full sub-board with no line is drawn.
#[instrument(level = "trace")]
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| *s != Square::Empty)
}

/// Checks if every sub-board is decided.
///
/// Without an overall winner this is a drawn game: no sub-board is left to
/// play in.
#[instrument(level = "trace")]
pub fn all_decided(outcomes: &[SubBoardOutcome; 9]) -> bool {
    outcomes.iter().all(|o| o.is_decided())
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    #[test]
    fn test_empty_not_full() {
        assert!(!is_full(&[Square::Empty; 9]));
    }

    #[test]
    fn test_partial_not_full() {
        let mut squares = [Square::Occupied(Player::X); 9];
        squares[5] = Square::Empty;
        assert!(!is_full(&squares));
    }

    #[test]
    fn test_full() {
        assert!(is_full(&[Square::Occupied(Player::O); 9]));
    }

    #[test]
    fn test_all_decided() {
        let mut outcomes = [SubBoardOutcome::Drawn; 9];
        outcomes[2] = SubBoardOutcome::Won(Player::O);
        assert!(all_decided(&outcomes));

        outcomes[7] = SubBoardOutcome::Undecided;
        assert!(!all_decided(&outcomes));
    }
}
