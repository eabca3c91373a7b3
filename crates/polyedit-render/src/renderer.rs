//! Renderer trait abstraction.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use polyedit_core::RenderInput;
use thiserror::Error;

use crate::layers::LayerStyle;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Controller snapshot, already in screen coordinates.
    pub input: &'a RenderInput,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Stage background color.
    pub background_color: Color,
    /// Colors and sizes for each layer.
    pub style: LayerStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(input: &'a RenderInput, viewport_size: Size) -> Self {
        Self {
            input,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::WHITE,
            style: LayerStyle::default(),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the layer style.
    pub fn with_style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    /// The visible stage in logical pixels.
    pub fn stage(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.viewport_size)
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene for a frame. Called once per frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
