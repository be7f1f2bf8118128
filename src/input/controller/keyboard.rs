use crate::draw::{Surface, SurfaceError, render};
use crate::input::events::Key;
use crate::util::Point;
use log::{debug, info};

use super::ToolController;

impl ToolController {
    /// Shows an empty text overlay at `at`.
    ///
    /// A press while an entry is pending moves the entry to `at` and drops
    /// its unconfirmed contents.
    pub(super) fn spawn_text_entry(&mut self, at: Point) {
        if let Some(previous) = self.pending_text {
            debug!("Text entry moved from {previous:?}, discarding its contents");
        }
        self.overlay.show_at(at);
        self.pending_text = Some(at);
        debug!("Text entry opened at {at:?}");
    }

    /// Processes a key press.
    ///
    /// Keys only matter while a text entry is pending. Return confirms it:
    /// non-blank text is rasterized at the entry anchor in the current stroke
    /// color, blank text is dropped, and the overlay is dismissed either way.
    /// Every other key goes to the overlay for editing; Escape has no special
    /// meaning.
    pub fn on_key_press<S: Surface>(
        &mut self,
        surface: &mut S,
        key: Key,
    ) -> Result<(), SurfaceError> {
        let Some(at) = self.pending_text else {
            return Ok(());
        };

        if key != Key::Return {
            self.overlay.handle_key(key);
            return Ok(());
        }

        let text = self.overlay.value();
        self.overlay.dismiss();
        self.pending_text = None;

        if text.trim().is_empty() {
            debug!("Discarding blank text entry");
            return Ok(());
        }

        info!("Placing text at {at:?}");
        render::render_text(surface, &text, at, self.style.stroke_color(), &self.font)
    }
}
