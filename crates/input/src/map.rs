//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys follow the classic layout of this game: up is a hard drop,
/// rotation sits on space and `z`. Key releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Drops and rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::HardDrop)
        }
        KeyCode::Char(' ') | KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::Rotate)
        }

        // Session
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn press(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Down), Some(GameAction::SoftDrop));

        assert_eq!(press(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Char('J')), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_up_is_hard_drop() {
        assert_eq!(press(KeyCode::Up), Some(GameAction::HardDrop));
        assert_eq!(press(KeyCode::Char('w')), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(press(KeyCode::Char(' ')), Some(GameAction::Rotate));
        assert_eq!(press(KeyCode::Char('z')), Some(GameAction::Rotate));
        assert_eq!(press(KeyCode::Char('Z')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(press(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(press(KeyCode::Char('R')), Some(GameAction::Restart));
    }

    #[test]
    fn test_unmapped_and_released_keys_are_ignored() {
        assert_eq!(press(KeyCode::Char('m')), None);
        assert_eq!(press(KeyCode::Tab), None);

        let mut release = KeyEvent::from(KeyCode::Left);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
