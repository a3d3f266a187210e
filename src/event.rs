use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::input::Key;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
}

/// Translates a terminal key press into the backend-independent [`Key`].
/// Releases and keys the app has no binding for map to `None`.
pub fn to_key(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Ctrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(to_key(&press(KeyCode::Char('j'), KeyModifiers::NONE)), Some(Key::Char('j')));
        assert_eq!(to_key(&press(KeyCode::Char('G'), KeyModifiers::SHIFT)), Some(Key::Char('G')));
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(to_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Key::Ctrl('c')));
        assert_eq!(to_key(&press(KeyCode::Char('K'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)), Some(Key::Ctrl('k')));
    }

    #[test]
    fn test_release_and_unbound_are_dropped() {
        let mut release = press(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(to_key(&release), None);
        assert_eq!(to_key(&press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(to_key(&press(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(Key::BackTab));
        assert_eq!(to_key(&press(KeyCode::Backspace, KeyModifiers::NONE)), Some(Key::Backspace));
    }
}
