//! Text rendering of game positions for the terminal.

use std::collections::BTreeSet;
use ultimate_tictactoe::{Constraint, Coordinate, GameInProgress, GameResult, Position};

/// Status line for a game in progress: who moves and where.
pub fn turn_line(game: &GameInProgress) -> String {
    match game.state().constraint() {
        Constraint::AnySubBoard => format!("{} to move, any open sub-board", game.to_move()),
        Constraint::MustPlayIn(sub_board) => format!(
            "{} to move, must play in sub-board {} ({})",
            game.to_move(),
            sub_board.to_index(),
            sub_board
        ),
    }
}

/// Board plus status for any phase.
pub fn describe(result: &GameResult) -> String {
    let status = match result {
        GameResult::InProgress(game) => turn_line(game),
        GameResult::Finished(game) => game.outcome().to_string(),
    };
    format!("{}\n{}", result.state().board().display(), status)
}

/// Compact listing of legal moves as `sub_board cell` pairs.
///
/// More than one sub-board's worth of moves collapses into the list of open
/// sub-boards.
pub fn legal_moves_line(legal: &BTreeSet<Coordinate>) -> String {
    if legal.is_empty() {
        return "No legal moves".to_string();
    }

    if legal.len() <= 9 {
        let moves: Vec<String> = legal
            .iter()
            .map(|c| format!("{} {}", c.sub_board.to_index(), c.cell.to_index()))
            .collect();
        return format!("Legal moves: {}", moves.join(", "));
    }

    let open: BTreeSet<Position> = legal.iter().map(|c| c.sub_board).collect();
    let open: Vec<String> = open.iter().map(|p| p.to_index().to_string()).collect();
    format!(
        "Legal moves: {} cells in sub-boards {}",
        legal.len(),
        open.join(", ")
    )
}
