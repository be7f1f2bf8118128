//! Stroke style shared by every tool.

use super::color::{BLACK, Color};
use crate::util;
use log::{debug, warn};

/// Line width used until the user picks another one.
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;

/// Fully resolved parameters for one stroke operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Current stroke color and line width.
///
/// The user's chosen color is never overwritten by the eraser: activating it
/// installs an override that [`StyleState::stroke_color`] reports instead,
/// and clearing the override brings the chosen color back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    chosen_color: Color,
    override_color: Option<Color>,
    line_width: f64,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new(BLACK, DEFAULT_LINE_WIDTH)
    }
}

impl StyleState {
    pub fn new(color: Color, line_width: f64) -> Self {
        Self {
            chosen_color: color,
            override_color: None,
            line_width,
        }
    }

    /// Sets the user's chosen stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.chosen_color = color;
        debug!("Stroke color set to {}", util::color_to_name(&color));
    }

    /// Sets the line width for subsequent strokes.
    ///
    /// Non-finite or non-positive widths are ignored.
    pub fn set_line_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            warn!("Ignoring invalid line width {width}");
            return;
        }
        self.line_width = width;
        debug!("Line width set to {:.1}", width);
    }

    /// Color strokes are currently drawn with.
    pub fn stroke_color(&self) -> Color {
        self.override_color.unwrap_or(self.chosen_color)
    }

    /// The user's last chosen color, ignoring any override.
    pub fn chosen_color(&self) -> Color {
        self.chosen_color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub(crate) fn override_color(&mut self, color: Color) {
        self.override_color = Some(color);
    }

    pub(crate) fn clear_override(&mut self) {
        self.override_color = None;
    }

    /// Stroke using the current color and width.
    pub fn stroke(&self) -> Stroke {
        Stroke {
            color: self.stroke_color(),
            width: self.line_width,
        }
    }
}
