//! Tests for the turn-tracking typestate.

use ultimate_tictactoe::{
    Coordinate, GameInProgress, GameResult, GameSetup, Move, MoveError, Outcome, Player,
};

fn at(sub_board: usize, cell: usize) -> Coordinate {
    Coordinate::from_indices(sub_board, cell).unwrap()
}

fn coordinates(moves: &[(usize, usize)]) -> Vec<Coordinate> {
    moves.iter().map(|&(s, c)| at(s, c)).collect()
}

const X_WINS: [(usize, usize); 17] = [
    (0, 1),
    (1, 0),
    (0, 2),
    (2, 0),
    (0, 0),
    (1, 4),
    (4, 3),
    (3, 4),
    (4, 5),
    (5, 4),
    (4, 4),
    (2, 8),
    (8, 6),
    (6, 8),
    (8, 7),
    (7, 8),
    (8, 8),
];

#[test]
fn test_replay_to_finish() {
    let result = GameInProgress::replay(Player::X, &coordinates(&X_WINS)).unwrap();
    match result {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Player::X));
            assert_eq!(game.history().len(), 17);
            assert_eq!(game.state().winner(), Some(Player::X));
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_replay_rejects_moves_after_finish() {
    let mut moves = coordinates(&X_WINS);
    moves.push(at(3, 0));
    assert_eq!(
        GameInProgress::replay(Player::X, &moves),
        Err(MoveError::GameAlreadyOver)
    );
}

#[test]
fn test_replay_reports_first_illegal_move() {
    let moves = coordinates(&[(0, 3), (5, 0)]);
    assert!(matches!(
        GameInProgress::replay(Player::X, &moves),
        Err(MoveError::WrongSubBoard { .. })
    ));
}

#[test]
fn test_history_records_alternating_players() {
    let result = GameInProgress::replay(Player::O, &coordinates(&X_WINS[..4])).unwrap();
    let GameResult::InProgress(game) = result else {
        panic!("Game should continue");
    };

    let players: Vec<Player> = game.history().iter().map(Move::player).collect();
    assert_eq!(players, vec![Player::O, Player::X, Player::O, Player::X]);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_restart_gives_fresh_game() {
    let GameResult::Finished(finished) =
        GameInProgress::replay(Player::X, &coordinates(&X_WINS)).unwrap()
    else {
        panic!("Game should be finished");
    };

    let game = finished.restart().start(Player::O);
    assert!(game.history().is_empty());
    assert_eq!(game.valid_moves().len(), 81);
    assert_eq!(game, GameSetup::new().start(Player::O));
}
