//! Headless input scripts.
//!
//! A script is a JSON array of events, for example:
//! ```json
//! [
//!   { "type": "select", "tool": "rectangle" },
//!   { "type": "press", "x": 10, "y": 10 },
//!   { "type": "release", "x": 60, "y": 40 }
//! ]
//! ```

use crate::draw::{Surface, SurfaceError};
use crate::input::events::{Key, MouseButton};
use crate::input::picker::ColorPicker;
use crate::input::tool::Tool;
use crate::util::Point;
use log::warn;
use serde::Deserialize;

use super::ToolController;

/// One recorded input event. Coordinates are device coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    Select { tool: Tool },
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    /// Single key by identifier ("Enter", "Backspace", "a")
    Key { key: String },
    /// Shorthand for one `Key` event per character
    Type { text: String },
    /// Picker value (`#rrggbb` or a color name)
    Color { value: String },
    LineWidth { value: f64 },
    Clear,
}

/// Parses a JSON replay script.
pub fn parse_script(json: &str) -> Result<Vec<ReplayEvent>, serde_json::Error> {
    serde_json::from_str(json)
}

impl ToolController {
    /// Feeds `events` through the controller in order.
    pub fn replay<S: Surface>(
        &mut self,
        surface: &mut S,
        events: &[ReplayEvent],
    ) -> Result<(), SurfaceError> {
        for event in events {
            match event {
                ReplayEvent::Select { tool } => self.select_tool(*tool),
                ReplayEvent::Press { x, y } => {
                    self.on_pointer_press(surface, MouseButton::Left, Point::new(*x, *y))?
                }
                ReplayEvent::Move { x, y } => self.on_pointer_move(surface, Point::new(*x, *y))?,
                ReplayEvent::Release { x, y } => {
                    self.on_pointer_release(surface, MouseButton::Left, Point::new(*x, *y))?
                }
                ReplayEvent::Key { key } => self.on_key_press(surface, Key::from_name(key))?,
                ReplayEvent::Type { text } => {
                    for c in text.chars() {
                        self.on_key_press(surface, Key::Char(c))?;
                    }
                }
                ReplayEvent::Color { value } => match ColorPicker::parse(value) {
                    Some(color) => {
                        self.pick_color(color);
                    }
                    None => warn!("Skipping unrecognized color '{value}'"),
                },
                ReplayEvent::LineWidth { value } => self.set_line_width(*value),
                ReplayEvent::Clear => self.clear_canvas(surface)?,
            }
        }
        Ok(())
    }
}
