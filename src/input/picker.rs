//! Color picker model.

use crate::draw::Color;
use crate::util;

/// The stroke color picker as the controller sees it.
///
/// While locked (eraser active) the picker refuses new values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    value: Color,
    locked: bool,
}

impl ColorPicker {
    pub fn new(value: Color) -> Self {
        Self {
            value,
            locked: false,
        }
    }

    /// Parses a picker value: `#rrggbb` or a color name.
    pub fn parse(value: &str) -> Option<Color> {
        Color::from_hex(value).or_else(|| util::name_to_color(value))
    }

    pub fn value(&self) -> Color {
        self.value
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }

    pub(crate) fn unlock(&mut self) {
        self.locked = false;
    }

    /// Stores `color` unless locked. Returns whether the value changed hands.
    pub(crate) fn set(&mut self, color: Color) -> bool {
        if self.locked {
            return false;
        }
        self.value = color;
        true
    }
}
