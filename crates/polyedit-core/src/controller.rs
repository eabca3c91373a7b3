//! The polygon interaction controller.
//!
//! Owns the polygon path, the drawing-mode flag, the cursor preview and the
//! viewport sizer. Everything else (pointer position, the shape node's
//! transient transform, the handle overlay) belongs to the host [`Surface`]
//! and is reached through it.

use kurbo::{Point, Rect, Shape as _, Size};

use crate::capture::{CaptureOutcome, capture_point};
use crate::config::EditorConfig;
use crate::error::{EditorResult, ViewportError};
use crate::export::{self, EXPORT_ACK};
use crate::polygon::PolygonPath;
use crate::selection::{Corner, Handle, corner_handles, hit_test_handles};
use crate::surface::{ClipboardSink, ShapeId, Surface};
use crate::transform::bake_transform;
use crate::viewport::{ViewportScale, ViewportSizer};

/// Coarse interaction state, derived from the path and drawing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// No vertices.
    Empty,
    /// Capturing vertices; at least one exists and the ring is open.
    Drawing,
    /// Closed ring, editable.
    Closed,
}

/// Result of a drawing-mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// Drawing mode flipped to `drawing`.
    Changed { drawing: bool },
    /// The flip would leave the path in an invalid state; nothing changed.
    Refused(&'static str),
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// What a screen point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Handle(Corner),
    Shape,
}

/// Snapshot of everything a renderer needs for one frame, in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInput {
    /// Whether vertices are being captured.
    pub drawing: bool,
    /// Vertices with the shape transform and viewport scale applied.
    pub path: Vec<Point>,
    /// Live cursor position while drawing.
    pub preview: Option<Point>,
    /// Whether the handle overlay is attached to the shape.
    pub selected: bool,
    /// Bounding box of `path`, present when selected.
    pub bounds: Option<Rect>,
    /// Resize handles, present when selected.
    pub handles: Vec<Handle>,
    pub scale: ViewportScale,
}

impl RenderInput {
    /// The start vertex marker, shown while drawing.
    pub fn start_marker(&self) -> Option<Point> {
        if self.drawing { self.path.first().copied() } else { None }
    }
}

const STOP_WITH_OPEN_PATH: &str = "Close the polygon by clicking its first point";
const START_WITH_CLOSED_PATH: &str = "Reset to draw a new polygon";

/// Polygon interaction controller.
#[derive(Debug, Clone)]
pub struct PolygonController {
    config: EditorConfig,
    viewport: ViewportSizer,
    path: PolygonPath,
    /// Whether clicks append vertices.
    drawing: bool,
    /// Live cursor in logical space; only set while drawing.
    preview: Option<Point>,
    /// The single shape node this controller drives.
    shape: ShapeId,
    /// Whether resize notifications are being received.
    active: bool,
}

impl Default for PolygonController {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl PolygonController {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            viewport: ViewportSizer::new(config.reference_size()),
            drawing: config.start_drawing,
            config,
            path: PolygonPath::new(),
            preview: None,
            shape: ShapeId::new_v4(),
            active: false,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Start receiving resize notifications and take the initial size.
    pub fn activate(&mut self, size: Size) {
        if self.active {
            log::warn!("Polygon controller already active; ignoring second activation");
            return;
        }
        self.active = true;
        log::info!("Polygon controller activated at {}x{}", size.width, size.height);
        // A zero-sized container keeps the identity scale until a real size arrives.
        if let Err(e) = self.viewport.resize(size) {
            log::debug!("Keeping identity scale: {}", e);
        }
    }

    /// Stop receiving resize notifications.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            log::info!("Polygon controller deactivated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Container resize notification.
    ///
    /// Ignored while inactive. A zero extent keeps the previous scale.
    pub fn resize(&mut self, size: Size) -> Result<ViewportScale, ViewportError> {
        if !self.active {
            log::debug!("Resize to {}x{} ignored: controller inactive", size.width, size.height);
            return Ok(self.viewport.scale());
        }
        self.viewport.resize(size)
    }

    pub fn viewport(&self) -> &ViewportSizer {
        &self.viewport
    }

    pub fn scale(&self) -> ViewportScale {
        self.viewport.scale()
    }

    pub fn path(&self) -> &PolygonPath {
        &self.path
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Cursor preview position in logical space.
    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    pub fn shape_id(&self) -> ShapeId {
        self.shape
    }

    pub fn state(&self) -> EditorState {
        if self.path.is_empty() {
            EditorState::Empty
        } else if self.drawing {
            EditorState::Drawing
        } else {
            EditorState::Closed
        }
    }

    /// Whether the handle overlay is attached to this controller's shape.
    pub fn is_selected(&self, surface: &impl Surface) -> bool {
        surface.handles().contains(self.shape)
    }

    /// Capture the surface's pointer position as a vertex.
    ///
    /// Returns `None` when not drawing or when no pointer position is known.
    pub fn submit_point(&mut self, surface: &mut impl Surface) -> Option<CaptureOutcome> {
        if !self.drawing {
            return None;
        }
        let screen = surface.pointer_position()?;
        let logical = self.viewport.to_logical(screen);

        let outcome = capture_point(&mut self.path, logical, self.config.proximity_threshold);
        match outcome {
            CaptureOutcome::Appended(p) => {
                log::debug!("Vertex {} at ({:.2}, {:.2})", self.path.len() - 1, p.x, p.y);
            }
            CaptureOutcome::Closed => {
                self.drawing = false;
                self.preview = None;
                log::info!("Polygon closed with {} vertices", self.path.distinct_count());
            }
            CaptureOutcome::Rejected => {
                log::debug!("Closure ignored: only {} distinct vertices", self.path.distinct_count());
            }
        }
        surface.request_redraw();
        Some(outcome)
    }

    /// Move the cursor preview to the surface's pointer position.
    ///
    /// Never touches the path. Returns whether the preview changed.
    pub fn update_preview(&mut self, surface: &impl Surface) -> bool {
        if !self.drawing {
            return false;
        }
        let Some(screen) = surface.pointer_position() else {
            return false;
        };
        let logical = self.viewport.to_logical(screen);
        if self.preview == Some(logical) {
            return false;
        }
        self.preview = Some(logical);
        true
    }

    /// Drop the cursor preview (pointer left the surface).
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Bake the shape node's transform into the vertices and reset the node
    /// to identity. Called when a move or resize gesture ends.
    pub fn transform_end(&mut self, surface: &mut impl Surface) -> bool {
        if self.drawing || self.path.is_empty() {
            return false;
        }
        let transform = surface.shape_transform(self.shape);
        self.path = bake_transform(&self.path, transform);
        surface.reset_transform(self.shape);
        surface.request_redraw();
        log::debug!(
            "Baked transform scale=({:.4}, {:.4}) translate=({:.2}, {:.2})",
            transform.scale.x,
            transform.scale.y,
            transform.translation.x,
            transform.translation.y
        );
        true
    }

    /// Attach or detach the handle overlay. Returns whether the shape is
    /// selected afterwards.
    pub fn toggle_selection(&mut self, surface: &mut impl Surface) -> bool {
        if self.drawing || self.path.is_empty() {
            return false;
        }
        let selected = if self.is_selected(surface) {
            surface.detach_handles();
            false
        } else {
            surface.attach_handles(self.shape);
            true
        };
        surface.request_redraw();
        selected
    }

    /// Flip drawing mode. Never touches the path.
    pub fn toggle_drawing_mode(&mut self) -> ModeChange {
        if self.drawing {
            if !self.path.is_empty() {
                log::warn!("Refusing to stop drawing with an open path of {} vertices", self.path.len());
                return ModeChange::Refused(STOP_WITH_OPEN_PATH);
            }
            self.drawing = false;
            self.preview = None;
        } else {
            if !self.path.is_empty() {
                log::warn!("Refusing to re-enter drawing on a closed polygon");
                return ModeChange::Refused(START_WITH_CLOSED_PATH);
            }
            self.drawing = true;
        }
        log::info!("Drawing mode {}", if self.drawing { "on" } else { "off" });
        ModeChange::Changed { drawing: self.drawing }
    }

    /// Discard the polygon and start drawing a new one.
    ///
    /// The new polygon gets a fresh shape id, so a handle overlay still
    /// bound to the old one no longer counts as a selection.
    pub fn reset(&mut self) {
        self.path.clear();
        self.drawing = true;
        self.preview = None;
        self.shape = ShapeId::new_v4();
        log::info!("Polygon reset");
    }

    /// Write the path as a flat JSON array to the clipboard.
    pub fn export_path(&self, clipboard: &mut impl ClipboardSink) -> EditorResult<Notice> {
        let json = export::to_json(&self.path)?;
        if let Err(e) = clipboard.write_text(&json) {
            log::error!("Failed to export polygon points: {}", e);
            return Err(e.into());
        }
        log::info!("Exported {} vertices to clipboard", self.path.len());
        Ok(Notice::success(EXPORT_ACK))
    }

    /// The path with the shape's current transform applied, in logical space.
    pub fn transformed_path(&self, surface: &impl Surface) -> PolygonPath {
        bake_transform(&self.path, surface.shape_transform(self.shape))
    }

    /// Find what a screen point hits on the closed shape.
    ///
    /// Handles win over the shape body and only exist while selected.
    pub fn hit_test(&self, surface: &impl Surface, screen: Point) -> Option<HitTarget> {
        if self.drawing || self.path.is_empty() {
            return None;
        }
        let shape = self.transformed_path(surface);

        if self.is_selected(surface) {
            let screen_path = PolygonPath::from_points(self.viewport.scale_path(shape.points()));
            if let Some(bounds) = screen_path.bounds() {
                if let Some(corner) =
                    hit_test_handles(bounds, screen, self.config.handle_hit_tolerance)
                {
                    return Some(HitTarget::Handle(corner));
                }
            }
        }

        let logical = self.viewport.to_logical(screen);
        if shape.to_bez_path(true).contains(logical) {
            Some(HitTarget::Shape)
        } else {
            None
        }
    }

    /// Build this frame's render snapshot.
    pub fn render_input(&self, surface: &impl Surface) -> RenderInput {
        let path = self.viewport.scale_path(self.transformed_path(surface).points());
        let selected = !self.drawing && !self.path.is_empty() && self.is_selected(surface);
        let bounds = if selected {
            PolygonPath::from_points(path.clone()).bounds()
        } else {
            None
        };
        let handles = bounds.map(corner_handles).unwrap_or_default();

        RenderInput {
            drawing: self.drawing,
            path,
            preview: self.preview.map(|p| self.viewport.to_screen(p)),
            selected,
            bounds,
            handles,
            scale: self.viewport.scale(),
        }
    }
}
