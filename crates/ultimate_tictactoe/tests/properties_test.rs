//! Property tests over random legal playouts.

use proptest::prelude::*;
use ultimate_tictactoe::{
    apply_move, is_game_over, legal_moves, Constraint, Coordinate, GameState, Move, MoveError,
    Player,
};

/// Plays a random legal game driven by `choices`, returning every state
/// along the way (including the initial one) and the moves between them.
fn playout(choices: &[usize]) -> (Vec<GameState>, Vec<Move>) {
    let mut states = vec![GameState::new()];
    let mut moves = Vec::new();
    let mut player = Player::X;

    for choice in choices {
        let state = *states.last().unwrap();
        let legal: Vec<Coordinate> = legal_moves(&state).into_iter().collect();
        if legal.is_empty() {
            break;
        }
        let action = Move::new(player, legal[choice % legal.len()]);
        let next = apply_move(&state, action).unwrap().into_state();
        states.push(next);
        moves.push(action);
        player = player.opponent();
    }

    (states, moves)
}

proptest! {
    #[test]
    fn prop_apply_move_is_deterministic(
        choices in prop::collection::vec(any::<usize>(), 0..60),
        flat in 0usize..81,
    ) {
        let (states, _) = playout(&choices);
        let state = *states.last().unwrap();
        let action = Move::new(Player::O, Coordinate::from_flat(flat).unwrap());

        let first = apply_move(&state, action);
        let second = apply_move(&state, action);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn prop_cells_are_write_once(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let (states, _) = playout(&choices);
        for pair in states.windows(2) {
            for coordinate in Coordinate::all() {
                let before = pair[0].board().get(coordinate);
                if before.player().is_some() {
                    prop_assert_eq!(pair[1].board().get(coordinate), before);
                }
            }
        }
    }

    #[test]
    fn prop_outcomes_are_monotonic(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let (states, _) = playout(&choices);
        for pair in states.windows(2) {
            for (before, after) in pair[0].outcomes().iter().zip(pair[1].outcomes()) {
                if before.is_decided() {
                    prop_assert_eq!(before, after);
                }
            }
        }
    }

    #[test]
    fn prop_constraint_follows_played_cell(
        choices in prop::collection::vec(any::<usize>(), 1..120),
    ) {
        let (states, moves) = playout(&choices);
        for (after, action) in states[1..].iter().zip(&moves) {
            let target = action.cell();
            let expected = if after.outcome(target).is_decided() {
                Constraint::AnySubBoard
            } else {
                Constraint::MustPlayIn(target)
            };
            prop_assert_eq!(after.constraint(), expected);
        }
    }

    #[test]
    fn prop_legal_moves_match_apply_move(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let (states, _) = playout(&choices);
        let state = *states.last().unwrap();
        let legal = legal_moves(&state);
        for coordinate in Coordinate::all() {
            let accepted = apply_move(&state, Move::new(Player::X, coordinate)).is_ok();
            prop_assert_eq!(accepted, legal.contains(&coordinate), "at {}", coordinate);
        }
    }

    #[test]
    fn prop_finished_games_accept_nothing(
        choices in prop::collection::vec(any::<usize>(), 81..200),
    ) {
        let (states, _) = playout(&choices);
        let state = *states.last().unwrap();
        // 81 choices always exhaust the board, so the playout ran to the end.
        prop_assert!(is_game_over(&state));
        for coordinate in Coordinate::all() {
            for player in [Player::X, Player::O] {
                prop_assert_eq!(
                    apply_move(&state, Move::new(player, coordinate)),
                    Err(MoveError::GameAlreadyOver)
                );
            }
        }
    }
}
