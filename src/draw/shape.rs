//! Shape geometry derived from a finished gesture.

use crate::input::Tool;
use crate::util::{self, Point};

/// Geometry of a shape-tool mark, resolved from the gesture endpoints.
///
/// Shapes are rendered once and forgotten; the raster keeps no record of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Rectangle outline with a normalized (top-left) origin
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    /// Circle whose diameter spans the gesture endpoints
    Circle { center: Point, radius: f64 },
    /// Straight segment
    Line { from: Point, to: Point },
    /// Segment plus an open chevron at `to`
    Arrow {
        from: Point,
        to: Point,
        /// Chevron leg endpoints `[leg1, leg2]`
        head: [Point; 2],
    },
}

impl Shape {
    /// Resolves the shape a tool produces for a gesture from `start` to `end`.
    ///
    /// Returns `None` for tools that do not draw on release (pen, eraser, text).
    pub fn from_gesture(tool: Tool, start: Point, end: Point) -> Option<Self> {
        match tool {
            Tool::Rectangle => Some(Self::rect(start, end)),
            Tool::Ellipse => Some(Self::circle(start, end)),
            Tool::Line => Some(Shape::Line {
                from: start,
                to: end,
            }),
            Tool::Arrow => Some(Self::arrow(start, end)),
            Tool::None | Tool::Pen | Tool::Eraser | Tool::Text => None,
        }
    }

    pub fn rect(a: Point, b: Point) -> Self {
        let (origin, width, height) = util::normalized_rect(a, b);
        Shape::Rect {
            origin,
            width,
            height,
        }
    }

    pub fn circle(a: Point, b: Point) -> Self {
        let (center, radius) = util::circle_bounds(a, b);
        Shape::Circle { center, radius }
    }

    pub fn arrow(from: Point, to: Point) -> Self {
        Shape::Arrow {
            from,
            to,
            head: util::chevron_head(from, to, util::ARROWHEAD_LENGTH),
        }
    }
}
