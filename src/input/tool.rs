//! Drawing tool selection.

use super::gesture::StrokeMode;
use super::handlers::{EventKind, Handler, HandlerSet};
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// At most one tool is active at a time; `None` means no tool (idle).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// No tool selected - pointer input is ignored
    #[default]
    None,
    /// Freehand drawing - follows the pointer path
    Pen,
    /// Freehand drawing in the background color
    Eraser,
    /// Rectangle outline - from corner to corner
    Rectangle,
    /// Circle outline - the drag spans its diameter
    Ellipse,
    /// Straight line between press and release
    Line,
    /// Line with an open chevron at the release point
    Arrow,
    /// Click to place a text entry overlay
    Text,
}

impl Tool {
    /// Every selectable tool.
    pub const ALL: [Tool; 7] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Ellipse,
        Tool::Line,
        Tool::Arrow,
        Tool::Text,
    ];

    /// How pointer gestures are interpreted; `None` for text and idle.
    pub fn stroke_mode(self) -> Option<StrokeMode> {
        match self {
            Tool::Pen | Tool::Eraser => Some(StrokeMode::Continuous),
            Tool::Rectangle | Tool::Ellipse | Tool::Line | Tool::Arrow => Some(StrokeMode::Shape),
            Tool::None | Tool::Text => None,
        }
    }

    /// Input handlers that must be registered while this tool is active.
    pub fn handlers(self) -> HandlerSet {
        let events: &[EventKind] = match self {
            Tool::None => &[],
            Tool::Text => &[EventKind::Press],
            _ => &[EventKind::Press, EventKind::Move, EventKind::Release],
        };
        events
            .iter()
            .map(|&event| Handler { tool: self, event })
            .collect()
    }

    /// Human-readable name for logs and status output.
    pub fn label(self) -> &'static str {
        match self {
            Tool::None => "None",
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Rectangle => "Rectangle",
            Tool::Ellipse => "Ellipse",
            Tool::Line => "Line",
            Tool::Arrow => "Arrow",
            Tool::Text => "Text",
        }
    }
}
