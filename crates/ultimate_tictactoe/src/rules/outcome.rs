//! Sub-board and game-level outcome evaluation.

use super::super::{Board, GameState, Position, Square, SubBoardOutcome};
use super::draw::{all_decided, is_full};
use super::win::{overall_winner, three_in_a_row};
use tracing::instrument;

/// Evaluates one sub-board: won if it holds a line, drawn if full, else
/// undecided.
#[instrument(level = "trace", skip(board))]
pub fn sub_board_outcome(board: &Board, sub_board: Position) -> SubBoardOutcome {
    let squares = *board.sub_board(sub_board);
    if let Some(winner) = three_in_a_row(squares.map(Square::player)) {
        SubBoardOutcome::Won(winner)
    } else if is_full(&squares) {
        SubBoardOutcome::Drawn
    } else {
        SubBoardOutcome::Undecided
    }
}

/// Returns true once the game is finished, by a win or a draw.
#[instrument(level = "trace", skip(state))]
pub fn is_game_over(state: &GameState) -> bool {
    overall_winner(state.outcomes()).is_some() || all_decided(state.outcomes())
}
