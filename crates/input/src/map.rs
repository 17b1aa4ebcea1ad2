//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only key presses count; releases and auto-repeat are ignored. Keys with no
/// meaning map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    let dir = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
        _ => return None,
    };
    Some(GameAction::Move(dir))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
