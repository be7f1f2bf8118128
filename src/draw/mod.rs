//! Rendering primitives (Cairo-based).
//!
//! This module defines the raster side of the drawing surface:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`StyleState`]: current stroke color and line width
//! - [`Surface`]: the drawing operations tools consume, implemented by [`Canvas`]
//! - [`Shape`] and the `render_*` functions that turn gesture geometry into strokes

pub mod canvas;
pub mod color;
pub mod font;
#[cfg(test)]
pub(crate) mod recording;
pub mod render;
pub mod shape;
pub mod style;
pub mod surface;

pub use canvas::Canvas;
pub use color::Color;
pub use font::FontDescriptor;
pub use render::{finish_stroke, render_segment, render_shape, render_text};
pub use shape::Shape;
pub use style::{Stroke, StyleState};
pub use surface::{Surface, SurfaceError};

pub use color::{BACKGROUND, BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
