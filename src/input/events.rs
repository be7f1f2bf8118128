//! Generic input event types.

/// Keys the drawing surface reacts to.
///
/// Only the text-entry overlay consumes keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Return/Enter key (confirms text entry)
    Return,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Maps a key identifier ("Enter", "Escape", "a", ...) to a [`Key`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" | "Return" => Key::Return,
            "Escape" | "Esc" => Key::Escape,
            "Backspace" => Key::Backspace,
            "Space" => Key::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (ignored)
    Right,
    /// Middle mouse button (ignored)
    Middle,
}
