//! Abstraction over the raster the tools draw on.

use super::color::Color;
use super::font::FontDescriptor;
use crate::util::Point;
use thiserror::Error;

/// Errors raised by a rendering surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface pixels are shared: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("image stream failed: {0}")]
    Io(#[from] cairo::IoError),

    #[error("image could not be decoded: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("pixel ({x}, {y}) is outside the surface")]
    OutOfBounds { x: i32, y: i32 },
}

/// Drawing operations consumed by the shape renderer and the document codec.
///
/// Path handling follows the 2D-canvas model: `stroke` and `fill` leave the
/// current path in place and only `begin_path` discards it. `stroke_rect`,
/// `fill_rect`, `fill_text` and `clear_rect` never touch the current path.
/// Lines are stroked with round caps.
pub trait Surface {
    /// Decoded image ready to be composited with [`Surface::draw_image`].
    type Image;

    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Offset of the surface origin in device coordinates.
    fn origin_offset(&self) -> Point;

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &FontDescriptor);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    fn stroke(&mut self) -> Result<(), SurfaceError>;
    fn fill(&mut self) -> Result<(), SurfaceError>;

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError>;
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Draws `text` with its left baseline at `at` in the current fill color.
    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError>;

    /// Resets a region to fully transparent pixels.
    fn clear_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Resets the whole surface to fully transparent pixels.
    fn clear(&mut self) -> Result<(), SurfaceError> {
        let (w, h) = (self.width() as f64, self.height() as f64);
        self.clear_rect(Point::ORIGIN, w, h)
    }

    /// Encodes the entire raster as PNG.
    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError>;

    /// Decodes an encoded image (PNG, GIF, JPEG, ...) without modifying the surface.
    fn decode_image(&self, bytes: &[u8]) -> Result<Self::Image, SurfaceError>;

    fn draw_image(&mut self, image: &Self::Image, at: Point) -> Result<(), SurfaceError>;

    /// Snapshot of the whole raster as a `data:image/png;base64,...` URI.
    fn to_data_url(&self) -> Result<String, SurfaceError> {
        Ok(crate::document::data_url::encode_png(&self.encode_png()?))
    }
}
