//! PolyEdit Render Library
//!
//! Turns a controller snapshot into an ordered list of draw operations and
//! plays them into a backend. The default implementation uses Vello.

mod layers;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use layers::{DrawOp, LayerKind, LayerStyle, Paint, PolygonLayers};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
