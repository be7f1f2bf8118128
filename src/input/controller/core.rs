//! Tool selection state machine.

use crate::draw::{BACKGROUND, FontDescriptor, StyleState, Surface, SurfaceError};
use crate::input::gesture::{Gesture, GestureTracker};
use crate::input::handlers::{HandlerRegistry, HandlerSet};
use crate::input::overlay::{TextBuffer, TextOverlay};
use crate::input::picker::ColorPicker;
use crate::input::tool::Tool;
use crate::util::{self, Point};
use log::{debug, info, warn};

/// Owns everything that changes while the user draws: the active tool, the
/// wired handlers, the stroke style, the in-flight gesture and the pending
/// text entry.
///
/// All handlers run synchronously on one thread; a tool switch completes
/// within a single call, so no handler can observe a half-applied transition.
pub struct ToolController {
    pub(super) active: Tool,
    pub(super) registry: HandlerRegistry,
    pub(super) style: StyleState,
    pub(super) picker: ColorPicker,
    pub(super) tracker: GestureTracker,
    /// Anchor of the text entry awaiting confirmation
    pub(super) pending_text: Option<Point>,
    pub(super) overlay: Box<dyn TextOverlay>,
    /// Device-space origin of the canvas, captured once
    pub(super) origin: Point,
    pub(super) font: FontDescriptor,
}

impl ToolController {
    /// Creates an idle controller.
    ///
    /// # Arguments
    /// * `origin` - Canvas origin in device coordinates
    /// * `style` - Initial stroke color and width (the picker starts at the same color)
    /// * `font` - Font for the text tool
    pub fn new(origin: Point, style: StyleState, font: FontDescriptor) -> Self {
        Self {
            active: Tool::None,
            registry: HandlerRegistry::default(),
            picker: ColorPicker::new(style.chosen_color()),
            style,
            tracker: GestureTracker::default(),
            pending_text: None,
            overlay: Box::new(TextBuffer::default()),
            origin,
            font,
        }
    }

    /// Creates an idle controller using the surface's origin offset.
    pub fn for_surface<S: Surface>(surface: &S, style: StyleState, font: FontDescriptor) -> Self {
        Self::new(surface.origin_offset(), style, font)
    }

    /// Replaces the built-in text overlay.
    pub fn with_overlay(mut self, overlay: Box<dyn TextOverlay>) -> Self {
        self.overlay = overlay;
        self
    }

    /// Active tool; [`Tool::None`] when idle.
    pub fn active_tool(&self) -> Tool {
        self.active
    }

    pub fn is_idle(&self) -> bool {
        self.active == Tool::None
    }

    pub fn registered_handlers(&self) -> &HandlerSet {
        self.registry.registered()
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.tracker.current()
    }

    pub fn overlay(&self) -> &dyn TextOverlay {
        self.overlay.as_ref()
    }

    pub fn is_awaiting_text(&self) -> bool {
        self.pending_text.is_some()
    }

    /// Selects `tool`, or returns to idle if it is already active.
    ///
    /// The previous tool's handlers are removed before the new ones are
    /// wired. Entering the eraser locks the picker and overrides the stroke
    /// color with the background; leaving it undoes both.
    pub fn select_tool(&mut self, tool: Tool) {
        let previous = self.active;
        let next = if tool == previous { Tool::None } else { tool };

        if let Some(gesture) = self.tracker.abandon() {
            debug!(
                "Dropping {} gesture started at {:?} on tool switch",
                previous.label(),
                gesture.start
            );
        }

        if previous == Tool::Eraser && next != Tool::Eraser {
            self.picker.unlock();
            self.style.clear_override();
        }

        self.registry.transition(next.handlers());
        self.active = next;

        if next == Tool::Eraser {
            self.picker.lock();
            self.style.override_color(BACKGROUND);
        }

        info!("Tool changed: {} -> {}", previous.label(), next.label());
    }

    /// Applies a color chosen in the picker. Ignored while the picker is locked.
    pub fn pick_color(&mut self, color: crate::draw::Color) -> bool {
        if !self.picker.set(color) {
            warn!(
                "Color picker is locked; ignoring {}",
                util::color_to_name(&color)
            );
            return false;
        }
        self.style.set_color(color);
        true
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.style.set_line_width(width);
    }

    /// Wipes the whole raster. Tool and style are left as they are.
    pub fn clear_canvas<S: Surface>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.clear()?;
        info!("Canvas cleared");
        Ok(())
    }

    /// Converts device coordinates to canvas-local ones.
    pub(super) fn to_canvas(&self, device: Point) -> Point {
        device - self.origin
    }
}
