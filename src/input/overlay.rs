//! Text entry overlay used by the text tool.

use super::events::Key;
use crate::util::Point;

/// Transient text-entry widget.
///
/// The controller only shows it, reads its value on confirmation and
/// dismisses it; editing happens inside the widget.
pub trait TextOverlay {
    /// Shows an empty entry anchored at `at`.
    fn show_at(&mut self, at: Point);

    /// Lets the widget edit its contents.
    fn handle_key(&mut self, key: Key);

    /// Current contents.
    fn value(&self) -> String;

    /// Hides the widget and discards its contents.
    fn dismiss(&mut self);

    fn is_visible(&self) -> bool;
}

/// In-memory overlay: characters append, Backspace deletes.
#[derive(Debug, Default)]
pub struct TextBuffer {
    anchor: Option<Point>,
    buffer: String,
}

impl TextBuffer {
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }
}

impl TextOverlay for TextBuffer {
    fn show_at(&mut self, at: Point) {
        self.anchor = Some(at);
        self.buffer.clear();
    }

    fn handle_key(&mut self, key: Key) {
        if self.anchor.is_none() {
            return;
        }
        match key {
            Key::Char(c) => self.buffer.push(c),
            Key::Backspace => {
                self.buffer.pop();
            }
            _ => {}
        }
    }

    fn value(&self) -> String {
        self.buffer.clone()
    }

    fn dismiss(&mut self) {
        self.anchor = None;
        self.buffer.clear();
    }

    fn is_visible(&self) -> bool {
        self.anchor.is_some()
    }
}
