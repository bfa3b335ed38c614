//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Cards are only reachable with the pointer; the keyboard offers the
/// restart shortcut. The game state still refuses it while a round runs.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_restart_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_other_keys_do_nothing() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
