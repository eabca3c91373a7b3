//! Capabilities the controller needs from its host.
//!
//! The host rendering surface owns the shape node and the handle overlay;
//! the controller only ever holds the shape's id and passes it back.

use kurbo::Point;

use crate::error::ClipboardError;
use crate::selection::HandleSet;
use crate::transform::ShapeTransform;

/// Identifier of the polygon's shape node on the host surface.
pub type ShapeId = uuid::Uuid;

/// Host rendering surface.
pub trait Surface {
    /// Current pointer position in screen coordinates, if one is known.
    fn pointer_position(&self) -> Option<Point>;

    /// The transient transform currently applied to a shape node.
    fn shape_transform(&self, shape: ShapeId) -> ShapeTransform;

    /// Reset a shape node's transform to identity.
    fn reset_transform(&mut self, shape: ShapeId);

    /// The handle overlay's attached nodes.
    fn handles(&self) -> &HandleSet;

    /// Bind the handle overlay to a shape node.
    fn attach_handles(&mut self, shape: ShapeId);

    /// Empty the handle overlay.
    fn detach_handles(&mut self);

    /// Ask the host to redraw on the next frame.
    fn request_redraw(&mut self);
}

/// Destination for exported text (the system clipboard in the app).
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard, useful for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail_with: Option<ClipboardError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            contents: None,
            fail_with: Some(error),
        }
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
