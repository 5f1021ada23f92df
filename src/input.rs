//! Key mapping for terminal play.
//!
//! A grab-and-drop keyboard scheme stands in for pointer dragging: number
//! keys pick an item up (freezing its lane), left/right drop it into a
//! basket, Esc puts it back.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Quit on `q` or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a key press to a game action.
pub fn map_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char(c @ '1'..='8') => {
            Some(GameAction::Grab(c as usize - '1' as usize))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::DropLow),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::DropHigh),
        KeyCode::Esc => Some(GameAction::CancelGrab),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::ToggleFast),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_digit_keys_grab_zero_based_lanes() {
        assert_eq!(map_key(KeyCode::Char('1')), Some(GameAction::Grab(0)));
        assert_eq!(map_key(KeyCode::Char('3')), Some(GameAction::Grab(2)));
        assert_eq!(map_key(KeyCode::Char('9')), None);
        assert_eq!(map_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_basket_and_control_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(GameAction::DropLow));
        assert_eq!(map_key(KeyCode::Right), Some(GameAction::DropHigh));
        assert_eq!(map_key(KeyCode::Esc), Some(GameAction::CancelGrab));
        assert_eq!(map_key(KeyCode::Char('f')), Some(GameAction::ToggleFast));
        assert_eq!(map_key(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(map_key(KeyCode::Enter), Some(GameAction::Start));
        assert_eq!(map_key(KeyCode::Up), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(should_quit(KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        )));
    }
}
