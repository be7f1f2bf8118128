//! Input handling and tool state machine.
//!
//! This module translates pointer and keyboard events into drawing actions.
//! It owns the active tool, the handlers wired for it, the gesture in flight
//! and the pending text entry.

pub mod controller;
pub mod events;
pub mod gesture;
pub mod handlers;
pub mod overlay;
pub mod picker;
pub mod tool;

// Re-export commonly used types at module level
pub use controller::{ReplayEvent, ToolController, parse_script};
pub use events::{Key, MouseButton};
pub use gesture::{Gesture, GestureTracker, StrokeMode};
pub use handlers::{EventKind, Handler, HandlerSet};
pub use overlay::{TextBuffer, TextOverlay};
pub use picker::ColorPicker;
pub use tool::Tool;
