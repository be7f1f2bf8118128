//! Cairo-backed raster surface.

use super::color::{BLACK, Color};
use super::font::FontDescriptor;
use super::surface::{Surface, SurfaceError};
use crate::util::Point;
use cairo::{Context, Format, ImageSurface, Operator};

/// Largest edge accepted for a canvas, in pixels.
pub const MAX_CANVAS_EDGE: i32 = 8192;

/// Largest edge of an image cairo can hold.
const MAX_IMAGE_EDGE: u32 = 32767;

/// Fixed-size ARGB32 raster with a persistent drawing context.
///
/// The origin offset is captured once at construction and never recalculated.
pub struct Canvas {
    surface: ImageSurface,
    ctx: Context,
    origin: Point,
    stroke_color: Color,
    fill_color: Color,
    font: FontDescriptor,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if !(1..=MAX_CANVAS_EDGE).contains(&width) || !(1..=MAX_CANVAS_EDGE).contains(&height) {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        let ctx = Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        ctx.set_line_cap(cairo::LineCap::Round);

        Ok(Self {
            surface,
            ctx,
            origin: Point::ORIGIN,
            stroke_color: BLACK,
            fill_color: BLACK,
            font: FontDescriptor::default(),
        })
    }

    /// Creates a canvas with the dimensions of an encoded image and paints it in.
    pub fn from_image(bytes: &[u8]) -> Result<Self, SurfaceError> {
        let image = decode_argb(bytes)?;
        let mut canvas = Self::new(image.width(), image.height())?;
        canvas.draw_image(&image, Point::ORIGIN)?;
        Ok(canvas)
    }

    /// Sets the device-space offset of the canvas origin.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Copies the raw ARGB32 (premultiplied, native-endian) pixel rows.
    pub fn pixels(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut copy = ImageSurface::create(Format::ARgb32, self.width(), self.height())?;
        {
            let ctx = Context::new(&copy)?;
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.set_operator(Operator::Source);
            ctx.paint()?;
        }
        copy.flush();
        let data = copy.data()?;
        Ok(data.to_vec())
    }

    /// Reads one pixel as premultiplied `[r, g, b, a]`.
    pub fn pixel_at(&self, x: i32, y: i32) -> Result<[u8; 4], SurfaceError> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Err(SurfaceError::OutOfBounds { x, y });
        }
        let data = self.pixels()?;
        let offset = (y * self.surface.stride() + x * 4) as usize;
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        Ok([
            (word >> 16) as u8,
            (word >> 8) as u8,
            word as u8,
            (word >> 24) as u8,
        ])
    }

    fn apply_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    /// Runs `draw` on an empty path, then puts the previous path back.
    fn with_detached_path<T>(
        &self,
        draw: impl FnOnce(&Context) -> Result<T, SurfaceError>,
    ) -> Result<T, SurfaceError> {
        let saved = self.ctx.copy_path()?;
        self.ctx.new_path();
        let result = draw(&self.ctx);
        self.ctx.new_path();
        self.ctx.append_path(&saved);
        result
    }
}

impl Surface for Canvas {
    type Image = ImageSurface;

    fn width(&self) -> i32 {
        self.surface.width()
    }

    fn height(&self) -> i32 {
        self.surface.height()
    }

    fn origin_offset(&self) -> Point {
        self.origin
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.font = font.clone();
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.ctx.arc(center.x, center.y, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.apply_source(self.stroke_color);
        self.ctx.stroke_preserve()?;
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.apply_source(self.fill_color);
        self.ctx.fill_preserve()?;
        Ok(())
    }

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError> {
        let color = self.stroke_color;
        self.with_detached_path(|ctx| {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.rectangle(origin.x, origin.y, width, height);
            ctx.stroke()?;
            Ok(())
        })
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError> {
        let color = self.fill_color;
        self.with_detached_path(|ctx| {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.rectangle(origin.x, origin.y, width, height);
            ctx.fill()?;
            Ok(())
        })
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        let color = self.fill_color;
        let font = self.font.pango_description();
        self.with_detached_path(|ctx| {
            let layout = pangocairo::functions::create_layout(ctx);
            layout.set_font_description(Some(&font));
            layout.set_text(text);

            // Pango positions layouts by their top-left corner; shift up to the baseline.
            let baseline = layout.baseline() as f64 / pango::SCALE as f64;
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.move_to(at.x, at.y - baseline);
            pangocairo::functions::show_layout(ctx, &layout);
            Ok(())
        })
    }

    fn clear_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.with_detached_path(|ctx| {
            ctx.save()?;
            ctx.set_operator(Operator::Clear);
            ctx.rectangle(origin.x, origin.y, width, height);
            let filled = ctx.fill();
            ctx.restore()?;
            filled?;
            Ok(())
        })
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    fn decode_image(&self, bytes: &[u8]) -> Result<ImageSurface, SurfaceError> {
        decode_argb(bytes)
    }

    fn draw_image(&mut self, image: &ImageSurface, at: Point) -> Result<(), SurfaceError> {
        self.ctx.save()?;
        let painted = self
            .ctx
            .set_source_surface(image, at.x, at.y)
            .and_then(|()| self.ctx.paint());
        self.ctx.restore()?;
        painted?;
        Ok(())
    }
}

/// Decodes any format the `image` crate recognizes into a premultiplied ARGB32 surface.
fn decode_argb(bytes: &[u8]) -> Result<ImageSurface, SurfaceError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > MAX_IMAGE_EDGE || height > MAX_IMAGE_EDGE {
        return Err(SurfaceError::InvalidSize {
            width: width.min(i32::MAX as u32) as i32,
            height: height.min(i32::MAX as u32) as i32,
        });
    }

    let stride = Format::ARgb32.stride_for_width(width)?;
    let mut data = vec![0u8; stride as usize * height as usize];
    for (y, row) in rgba.rows().enumerate() {
        let line = &mut data[y * stride as usize..];
        for (x, pixel) in row.enumerate() {
            let [r, g, b, a] = pixel.0;
            let premultiply = |c: u8| (c as u32 * a as u32 + 127) / 255;
            let word = (a as u32) << 24 | premultiply(r) << 16 | premultiply(g) << 8 | premultiply(b);
            line[x * 4..x * 4 + 4].copy_from_slice(&word.to_ne_bytes());
        }
    }

    Ok(ImageSurface::create_for_data(
        data,
        Format::ARgb32,
        width as i32,
        height as i32,
        stride,
    )?)
}
