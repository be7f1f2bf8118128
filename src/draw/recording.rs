//! Command-recording surface used by unit tests.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::{Surface, SurfaceError};
use crate::util::Point;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    Font(FontDescriptor),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    },
    Stroke,
    Fill,
    StrokeRect {
        origin: Point,
        width: f64,
        height: f64,
    },
    FillRect {
        origin: Point,
        width: f64,
        height: f64,
    },
    FillText {
        text: String,
        at: Point,
    },
    ClearRect {
        origin: Point,
        width: f64,
        height: f64,
    },
    DrawImage(Point),
}

/// Surface that only remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub origin: Point,
}

impl RecordingSurface {
    pub fn with_origin(origin: Point) -> Self {
        Self {
            commands: Vec::new(),
            origin,
        }
    }

    /// Commands that change pixels.
    pub fn marks(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| {
                matches!(
                    cmd,
                    DrawCommand::Stroke
                        | DrawCommand::Fill
                        | DrawCommand::StrokeRect { .. }
                        | DrawCommand::FillRect { .. }
                        | DrawCommand::FillText { .. }
                        | DrawCommand::ClearRect { .. }
                        | DrawCommand::DrawImage(_)
                )
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Image = Vec<u8>;

    fn width(&self) -> i32 {
        100
    }

    fn height(&self) -> i32 {
        100
    }

    fn origin_offset(&self) -> Point {
        self.origin
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.commands.push(DrawCommand::Font(font.clone()));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Fill);
        Ok(())
    }

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::StrokeRect {
            origin,
            width,
            height,
        });
        Ok(())
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::FillRect {
            origin,
            width,
            height,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
        });
        Ok(())
    }

    fn clear_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::ClearRect {
            origin,
            width,
            height,
        });
        Ok(())
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        Ok(PNG_SIGNATURE.to_vec())
    }

    fn decode_image(&self, bytes: &[u8]) -> Result<Vec<u8>, SurfaceError> {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Ok(bytes.to_vec())
        } else {
            Err(SurfaceError::Cairo(cairo::Error::ReadError))
        }
    }

    fn draw_image(&mut self, _image: &Vec<u8>, at: Point) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::DrawImage(at));
        Ok(())
    }
}
