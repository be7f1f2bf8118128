//! Shape renderer: turns gesture geometry and the current style into
//! drawing commands on a [`Surface`].

use super::color::{BACKGROUND, BLACK, Color};
use super::font::FontDescriptor;
use super::shape::Shape;
use super::style::Stroke;
use super::surface::{Surface, SurfaceError};
use crate::util::Point;
use std::f64::consts::PI;

/// Fill color issued for arrowheads (the 2D-canvas default fill style).
pub const ARROWHEAD_FILL: Color = BLACK;

/// Applies color and width for the next stroke.
fn apply_stroke<S: Surface>(surface: &mut S, stroke: &Stroke) {
    surface.set_stroke_color(stroke.color);
    surface.set_line_width(stroke.width);
}

/// Eraser variant of `stroke`: same width and cap, background color.
pub fn eraser_stroke(stroke: &Stroke) -> Stroke {
    Stroke {
        color: BACKGROUND,
        ..*stroke
    }
}

/// Render one freehand segment from `from` to `to`.
///
/// Called once per pointer move while a pen or eraser gesture is active.
/// A zero-length segment leaves no mark.
pub fn render_segment<S: Surface>(
    surface: &mut S,
    stroke: &Stroke,
    from: Point,
    to: Point,
) -> Result<(), SurfaceError> {
    if from == to {
        return Ok(());
    }
    apply_stroke(surface, stroke);
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke()
}

/// Finalize a freehand stroke: stroke whatever is open, then start a fresh path.
pub fn finish_stroke<S: Surface>(surface: &mut S) -> Result<(), SurfaceError> {
    surface.stroke()?;
    surface.begin_path();
    Ok(())
}

/// Renders a single shape.
///
/// Dispatches to the appropriate rendering function based on shape type.
/// Degenerate geometry (a point-sized rect, a zero radius, a zero-length
/// line) draws nothing; an arrow of zero length still gets its head.
pub fn render_shape<S: Surface>(
    surface: &mut S,
    shape: &Shape,
    stroke: &Stroke,
) -> Result<(), SurfaceError> {
    apply_stroke(surface, stroke);
    match *shape {
        Shape::Rect {
            origin,
            width,
            height,
        } => {
            if width == 0.0 && height == 0.0 {
                return Ok(());
            }
            surface.stroke_rect(origin, width, height)
        }
        Shape::Circle { center, radius } => render_circle(surface, center, radius),
        Shape::Line { from, to } => render_line(surface, from, to),
        Shape::Arrow { from, to, head } => render_arrow(surface, from, to, head),
    }
}

fn render_line<S: Surface>(surface: &mut S, from: Point, to: Point) -> Result<(), SurfaceError> {
    if from == to {
        return Ok(());
    }
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke()
}

fn render_circle<S: Surface>(
    surface: &mut S,
    center: Point,
    radius: f64,
) -> Result<(), SurfaceError> {
    if radius == 0.0 {
        return Ok(());
    }
    surface.begin_path();
    surface.arc(center, radius, 0.0, 2.0 * PI);
    surface.stroke()
}

/// Render an arrow: the shaft, then the chevron path E→leg1→leg2→E→leg1.
///
/// The chevron path is both filled and stroked.
fn render_arrow<S: Surface>(
    surface: &mut S,
    from: Point,
    to: Point,
    [leg1, leg2]: [Point; 2],
) -> Result<(), SurfaceError> {
    render_line(surface, from, to)?;

    surface.begin_path();
    surface.move_to(to);
    surface.line_to(leg1);
    surface.line_to(leg2);
    surface.line_to(to);
    surface.line_to(leg1);
    surface.set_fill_color(ARROWHEAD_FILL);
    surface.fill()?;
    surface.stroke()
}

/// Rasterizes confirmed text with its left baseline at `at`.
pub fn render_text<S: Surface>(
    surface: &mut S,
    text: &str,
    at: Point,
    color: Color,
    font: &FontDescriptor,
) -> Result<(), SurfaceError> {
    surface.set_fill_color(color);
    surface.set_font(font);
    surface.fill_text(text, at)
}
