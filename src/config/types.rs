//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::style::DEFAULT_LINE_WIDTH;
use crate::util::Point;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings applied when a session starts.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initial stroke color - a named color, `"#rrggbb"`, or an RGB array like `[255, 0, 0]`
    #[serde(default)]
    pub default_color: ColorSpec,

    /// Initial line width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,

    /// Font family used by the text tool (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    /// Can be a named weight or a numeric value (100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: ColorSpec::default(),
            default_line_width: default_line_width(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Raster dimensions and placement.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Horizontal offset of the canvas origin in device coordinates
    #[serde(default)]
    pub offset_x: f64,

    /// Vertical offset of the canvas origin in device coordinates
    #[serde(default)]
    pub offset_y: f64,
}

impl CanvasConfig {
    pub fn origin(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Where saved documents go.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Directory receiving `canvas.json` (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,
}

impl PersistenceConfig {
    /// Save directory with `~/` expanded.
    pub fn resolved_directory(&self) -> PathBuf {
        crate::util::expand_tilde(&self.save_directory)
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
        }
    }
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_save_directory() -> String {
    ".".to_string()
}
