//! Terminal-independent key representation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key the tiled input understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    /// Anything else; always ignored
    Other,
}

/// A key together with whether a modifier (Ctrl/Alt/Meta) was held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modified: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modified: false,
        }
    }

    #[must_use]
    pub const fn modified(key: Key) -> Self {
        Self {
            key,
            modified: true,
        }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Other,
        };
        let modified = event.modifiers.intersects(
            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::META | KeyModifiers::SUPER,
        );
        Self { key, modified }
    }
}
