use crate::draw::{Shape, Stroke, Surface, SurfaceError, render};
use crate::input::events::MouseButton;
use crate::input::gesture::{GestureAction, StrokeMode};
use crate::input::handlers::EventKind;
use crate::input::tool::Tool;
use crate::util::Point;
use log::{debug, trace};

use super::ToolController;

impl ToolController {
    /// Processes a pointer press in device coordinates.
    ///
    /// # Behavior
    /// - Pen, eraser and shape tools: starts a gesture (ignored if one is active)
    /// - Text tool: shows the text overlay at the press point
    /// - Idle, or any button other than left: nothing
    pub fn on_pointer_press<S: Surface>(
        &mut self,
        surface: &mut S,
        button: MouseButton,
        device: Point,
    ) -> Result<(), SurfaceError> {
        if button != MouseButton::Left {
            return Ok(());
        }
        let Some(handler) = self.registry.dispatch_target(EventKind::Press) else {
            trace!("No press handler registered");
            return Ok(());
        };

        let p = self.to_canvas(device);
        if handler.tool == Tool::Text {
            self.spawn_text_entry(p);
        } else if self.tracker.on_start(p) {
            debug!("{} gesture started at {:?}", handler.tool.label(), p);
            // Freehand paths start empty.
            if handler.tool.stroke_mode() == Some(StrokeMode::Continuous) {
                surface.begin_path();
            }
        }
        Ok(())
    }

    /// Processes pointer motion in device coordinates.
    ///
    /// Pen and eraser draw one segment per move; shape tools only remember
    /// the position.
    pub fn on_pointer_move<S: Surface>(
        &mut self,
        surface: &mut S,
        device: Point,
    ) -> Result<(), SurfaceError> {
        let Some(handler) = self.registry.dispatch_target(EventKind::Move) else {
            return Ok(());
        };
        let Some(mode) = handler.tool.stroke_mode() else {
            return Ok(());
        };

        let p = self.to_canvas(device);
        match self.tracker.on_move(mode, p) {
            Some(action) => self.render_action(surface, handler.tool, action),
            None => Ok(()),
        }
    }

    /// Processes a pointer release in device coordinates.
    ///
    /// Finalizes a freehand path, or draws the shape from the gesture start
    /// to the release point.
    pub fn on_pointer_release<S: Surface>(
        &mut self,
        surface: &mut S,
        button: MouseButton,
        device: Point,
    ) -> Result<(), SurfaceError> {
        if button != MouseButton::Left {
            return Ok(());
        }
        let Some(handler) = self.registry.dispatch_target(EventKind::Release) else {
            return Ok(());
        };
        let Some(mode) = handler.tool.stroke_mode() else {
            return Ok(());
        };

        let p = self.to_canvas(device);
        match self.tracker.on_end(mode, p) {
            Some(action) => {
                debug!("{} gesture ended at {:?}", handler.tool.label(), p);
                self.render_action(surface, handler.tool, action)
            }
            None => Ok(()),
        }
    }

    fn stroke_for(&self, tool: Tool) -> Stroke {
        let stroke = self.style.stroke();
        if tool == Tool::Eraser {
            render::eraser_stroke(&stroke)
        } else {
            stroke
        }
    }

    fn render_action<S: Surface>(
        &self,
        surface: &mut S,
        tool: Tool,
        action: GestureAction,
    ) -> Result<(), SurfaceError> {
        match action {
            GestureAction::Segment { from, to } => {
                render::render_segment(surface, &self.stroke_for(tool), from, to)
            }
            GestureAction::EndStroke => render::finish_stroke(surface),
            GestureAction::Shape { start, end } => match Shape::from_gesture(tool, start, end) {
                Some(shape) => render::render_shape(surface, &shape, &self.stroke_for(tool)),
                None => Ok(()),
            },
        }
    }
}
