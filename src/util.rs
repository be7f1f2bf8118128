//! Utility functions for colors, points, and shape geometry.
//!
//! This module provides:
//! - [`Point`], the canvas-local coordinate type shared by input and rendering
//! - Chevron arrowhead geometry
//! - Circle and rectangle normalization from two gesture endpoints
//! - Color name mapping used by configuration and logging

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::Sub;

// ============================================================================
// Points
// ============================================================================

/// A position in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Length of each chevron leg in canvas units.
pub const ARROWHEAD_LENGTH: f64 = 10.0;

/// Half-opening of the chevron, measured from the shaft.
pub const ARROWHEAD_HALF_ANGLE: f64 = PI / 6.0;

/// Calculates the two leg endpoints of an open chevron at `end`.
///
/// The shaft runs from `start` to `end`; each leg is `length` long and sits
/// [`ARROWHEAD_HALF_ANGLE`] away from the shaft direction, pointing back
/// towards `start`. The length is never capped, so very short shafts get a
/// full-size head.
///
/// # Returns
/// `[leg1, leg2]` where leg1 is rotated by `-π/6` and leg2 by `+π/6`.
pub fn chevron_head(start: Point, end: Point, length: f64) -> [Point; 2] {
    let angle = (end.y - start.y).atan2(end.x - start.x);

    let leg = |theta: f64| {
        Point::new(
            end.x - length * theta.cos(),
            end.y - length * theta.sin(),
        )
    };

    [
        leg(angle - ARROWHEAD_HALF_ANGLE),
        leg(angle + ARROWHEAD_HALF_ANGLE),
    ]
}

// ============================================================================
// Rectangle / Circle Geometry
// ============================================================================

/// Normalizes a corner-to-corner drag into `(min corner, width, height)`.
///
/// Width and height are always non-negative, so the result is independent of
/// which corner the drag started from.
pub fn normalized_rect(a: Point, b: Point) -> (Point, f64, f64) {
    let origin = Point::new(a.x.min(b.x), a.y.min(b.y));
    (origin, (b.x - a.x).abs(), (b.y - a.y).abs())
}

/// Calculates a circle whose diameter spans the two gesture endpoints.
///
/// # Returns
/// Tuple `(center, radius)` with center at the midpoint and radius equal to
/// half the distance between the points.
pub fn circle_bounds(a: Point, b: Point) -> (Point, f64) {
    (a.midpoint(b), a.distance_to(b) / 2.0)
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the color picker.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Returns "Custom" if the color doesn't match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> std::path::PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    std::path::PathBuf::from(path)
}
