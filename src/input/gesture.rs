//! Press/move/release tracking for pointer gestures.

use crate::util::Point;
use log::debug;

/// How a tool consumes gesture geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMode {
    /// Draws a segment on every move (pen, eraser)
    Continuous,
    /// Draws once on release from start to end (rectangle, ellipse, line, arrow)
    Shape,
}

/// An in-flight gesture in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub start: Point,
    pub last: Point,
}

/// What the renderer should do in response to a gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Draw one freehand segment
    Segment { from: Point, to: Point },
    /// Close out the freehand path
    EndStroke,
    /// Draw the finished shape
    Shape { start: Point, end: Point },
}

/// Tracks at most one gesture at a time.
///
/// Move and end events without an active gesture are no-ops.
#[derive(Debug, Default)]
pub struct GestureTracker {
    gesture: Option<Gesture>,
}

impl GestureTracker {
    pub fn current(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Starts a gesture at `p`. Returns `false` (and keeps the existing
    /// gesture) if one is already in flight.
    pub fn on_start(&mut self, p: Point) -> bool {
        if self.gesture.is_some() {
            debug!("Ignoring gesture start at {p:?}: gesture already active");
            return false;
        }
        self.gesture = Some(Gesture { start: p, last: p });
        true
    }

    pub fn on_move(&mut self, mode: StrokeMode, p: Point) -> Option<GestureAction> {
        let gesture = self.gesture.as_mut()?;
        let from = gesture.last;
        gesture.last = p;
        match mode {
            StrokeMode::Continuous => Some(GestureAction::Segment { from, to: p }),
            StrokeMode::Shape => None,
        }
    }

    pub fn on_end(&mut self, mode: StrokeMode, p: Point) -> Option<GestureAction> {
        let gesture = self.gesture.take()?;
        Some(match mode {
            StrokeMode::Continuous => GestureAction::EndStroke,
            StrokeMode::Shape => GestureAction::Shape {
                start: gesture.start,
                end: p,
            },
        })
    }

    /// Drops the in-flight gesture without producing an action.
    pub fn abandon(&mut self) -> Option<Gesture> {
        self.gesture.take()
    }
}
