//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include drawing defaults,
//! canvas dimensions, and where documents are saved.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, PersistenceConfig};

use crate::draw::canvas::MAX_CANVAS_EDGE;
use crate::draw::{FontDescriptor, StyleState};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#1e90ff"
/// default_line_width = 3.0
/// font_family = "Monospace"
/// font_weight = "bold"
///
/// [canvas]
/// width = 1024
/// height = 768
///
/// [persistence]
/// save_directory = "~/Pictures/sketches"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial stroke style and text font
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Raster size and origin offset
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Save location for `canvas.json`
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_line_width`: 1.0 - 50.0
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    fn validate_and_clamp(&mut self) {
        let width = self.drawing.default_line_width;
        if !(1.0..=50.0).contains(&width) {
            log::warn!("Invalid default_line_width {width:.1}, clamping to 1.0-50.0 range");
            self.drawing.default_line_width = if width.is_nan() {
                crate::draw::style::DEFAULT_LINE_WIDTH
            } else {
                width.clamp(1.0, 50.0)
            };
        }

        for (name, edge) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_EDGE).contains(edge) {
                log::warn!(
                    "Invalid canvas {name} {}, clamping to 1-{MAX_CANVAS_EDGE} range",
                    *edge
                );
                *edge = (*edge).clamp(1, MAX_CANVAS_EDGE);
            }
        }

        if !self.canvas.offset_x.is_finite() || !self.canvas.offset_y.is_finite() {
            log::warn!("Non-finite canvas offset, using 0,0");
            self.canvas.offset_x = 0.0;
            self.canvas.offset_y = 0.0;
        }

        if self.drawing.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Sans'");
            self.drawing.font_family = "Sans".to_string();
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Initial stroke style described by the `[drawing]` section.
    pub fn style(&self) -> StyleState {
        StyleState::new(
            self.drawing.default_color.to_color(),
            self.drawing.default_line_width,
        )
    }

    /// Text tool font described by the `[drawing]` section.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor {
            weight: self.drawing.font_weight.clone(),
            style: self.drawing.font_style.clone(),
            ..FontDescriptor::with_family(&self.drawing.font_family)
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration file at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
