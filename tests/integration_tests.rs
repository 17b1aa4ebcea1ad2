//! Integration tests for the turn state machine

use std::sync::Arc;
use std::thread;

use tui_2048::core::{Board, EvalMode, GameConfig, GameState, Goal, Rules};
use tui_2048::types::{Direction, GameOutcome, GameStatus, Index};

fn rules_with_goal(goal_exponent: u8) -> Rules {
    Rules {
        goal: Goal::from_exponent(goal_exponent),
        ..Rules::default()
    }
}

#[test]
fn test_game_lifecycle() {
    let rules = GameConfig::default().validate().unwrap();
    let mut state = GameState::new(rules, 12345);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.board().size(), 4);
    assert_eq!(state.board().empty_count(), 14);

    // Play until something happens or the move budget runs out.
    let mut accepted = 0;
    for i in 0..2000 {
        if state.is_finished() {
            break;
        }
        if state.play(Direction::ALL[i % 4]) {
            accepted += 1;
        }
    }
    assert_eq!(state.moves(), accepted);
    assert!(state.score() > 0);
}

#[test]
fn test_accepted_move_spawns_exactly_one_tile() {
    let board = Board::from_rows(&[
        [None, None, None, None],
        [None, None, None, None],
        [None, None, None, None],
        [Some(0), None, None, Some(0)],
    ]);
    let mut state = GameState::with_board(Rules::default(), board, 3);

    assert!(state.play(Direction::Left));
    // Two tiles merged into one, then one spawn.
    assert_eq!(state.board().empty_count(), 14);
    assert_eq!(state.score(), 2);
    assert_eq!(
        state.board().tile(Index::new(0, 0)).map(|t| t.exponent),
        Some(1)
    );
}

#[test]
fn test_rejected_move_changes_nothing() {
    let board = Board::from_rows(&[
        [None, None, None, None],
        [None, None, None, None],
        [None, None, None, None],
        [Some(0), Some(1), None, None],
    ]);
    let mut state = GameState::with_board(Rules::default(), board.clone(), 3);

    assert!(!state.play(Direction::Left));
    assert!(!state.play(Direction::Down));
    assert_eq!(state.board(), &board);
    assert_eq!(state.score(), 0);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.moves(), 0);
}

#[test]
fn test_two_by_two_scenario() {
    let board = Board::from_rows(&[[None, None], [Some(0), Some(0)]]);
    let mut state = GameState::with_board(rules_with_goal(2), board, 1);

    assert!(state.evaluate(Direction::Left, EvalMode::Commit));
    assert_eq!(state.board().tile(Index::new(0, 0)).map(|t| t.value()), Some(4));
    assert!(state.board().is_empty_at(Index::new(1, 0)));
    assert_eq!(state.score(), 2);
    assert_eq!(state.max(), 1);
    assert_eq!(state.status(), GameStatus::Playing);
}

#[test]
fn test_win_fires_exactly_once() {
    let board = Board::from_rows(&[
        [None, None, None, None],
        [None, None, None, None],
        [Some(2), Some(2), None, None],
        [Some(2), Some(2), None, None],
    ]);
    let mut state = GameState::with_board(rules_with_goal(3), board, 9);
    let signal = state.finished();

    assert!(state.play(Direction::Left));
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(signal.outcome(), Some(GameOutcome::Won));
    assert_eq!(state.score(), 16);

    // Further turns are ignored and the signal keeps its first outcome.
    let frozen = state.board().clone();
    for dir in Direction::ALL {
        assert!(!state.play(dir));
    }
    assert_eq!(state.board(), &frozen);
    assert!(!signal.fire(GameOutcome::Lost));
    assert_eq!(signal.wait(), GameOutcome::Won);
}

#[test]
fn test_lost_only_when_no_direction_moves() {
    // Full board with a single mergeable pair in the bottom row.
    let board = Board::from_rows(&[
        [Some(0), Some(1), Some(0), Some(1)],
        [Some(1), Some(0), Some(1), Some(0)],
        [Some(0), Some(1), Some(0), Some(1)],
        [Some(2), Some(2), Some(3), Some(4)],
    ]);
    let mut state = GameState::with_board(Rules::default(), board, 5);

    // Up/Down are blocked, but Left/Right still merge: not lost.
    assert!(!state.play(Direction::Up));
    assert_eq!(state.status(), GameStatus::Playing);
    assert!(!state.finished().is_fired());
}

#[test]
fn test_stuck_board_is_lost_and_signals() {
    let board = Board::from_rows(&[
        [Some(0), Some(1), Some(0)],
        [Some(1), Some(0), Some(1)],
        [Some(0), Some(1), Some(0)],
    ]);
    let mut state = GameState::with_board(Rules::default(), board, 5);
    let signal = state.finished();

    for dir in Direction::ALL {
        assert!(!state.evaluate(dir, EvalMode::Probe));
    }
    assert!(!state.play(Direction::Left));
    assert_eq!(state.status(), GameStatus::Lost);
    assert!(!state.won());
    assert_eq!(signal.outcome(), Some(GameOutcome::Lost));

    assert!(!state.play(Direction::Right));
    assert_eq!(state.status(), GameStatus::Lost);
}

#[test]
fn test_finished_signal_releases_waiting_thread() {
    let board = Board::from_rows(&[[Some(0), Some(0)], [None, None]]);
    let mut state = GameState::with_board(rules_with_goal(1), board, 2);
    let signal = state.finished();

    let waiter = {
        let signal = Arc::clone(&signal);
        thread::spawn(move || signal.wait())
    };

    assert!(state.play(Direction::Right));
    assert_eq!(waiter.join().unwrap(), GameOutcome::Won);
}

#[test]
fn test_spawn_never_overwrites() {
    let rules = GameConfig {
        size: 3,
        starting_tiles: 9,
        ..GameConfig::default()
    }
    .validate()
    .unwrap();
    let mut state = GameState::new(rules, 8);
    assert!(state.board().is_full());

    let before = state.board().clone();
    assert_eq!(state.add_random_tile(), None);
    assert_eq!(state.board(), &before);
}

#[test]
fn test_lucky_mode() {
    let rules = GameConfig {
        lucky: true,
        ..GameConfig::default()
    }
    .validate()
    .unwrap();
    let mut state = GameState::new(rules, 1);

    // One starting 4 in the top-left corner.
    assert_eq!(state.board().empty_count(), 15);
    let corner = Index::new(0, 3);
    assert_eq!(state.board().tile(corner).map(|t| t.value()), Some(4));
    assert_eq!(state.max(), 1);

    // Moving right frees the corner, and the spawn refills it with a 4.
    assert!(state.play(Direction::Right));
    assert_eq!(state.board().tile(corner).map(|t| t.value()), Some(4));
    assert_eq!(state.board().empty_count(), 14);
}

#[test]
fn test_game_restart_with_same_seed() {
    let rules = Rules::default();
    let first = GameState::new(rules, 4242);
    let again = GameState::new(rules, 4242);
    assert_eq!(first.board(), again.board());
    assert_eq!(again.score(), 0);
    assert_eq!(again.seed(), 4242);
}

#[test]
fn test_snapshot_matches_state() {
    let board = Board::from_rows(&[[Some(3), None], [None, Some(0)]]);
    let state = GameState::with_board(Rules::default(), board, 1);
    let snap = state.snapshot();
    assert_eq!(snap.size, 2);
    assert_eq!(snap.value_at(0, 1), Some(16));
    assert_eq!(snap.value_at(1, 0), Some(2));
    assert_eq!(snap.value_at(0, 0), None);
    assert_eq!(snap.max, 3);
    assert_eq!(snap.status, GameStatus::Playing);
}
