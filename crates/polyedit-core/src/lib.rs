//! PolyEdit Core Library
//!
//! Platform-agnostic polygon interaction state machine: point capture with
//! proximity closure, viewport rescaling, transform baking and selection
//! handles. Rendering and windowing live in the other crates and talk to
//! this one through the [`Surface`] and [`ClipboardSink`] traits.

pub mod canvas;
pub mod capture;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod input;
pub mod polygon;
pub mod selection;
pub mod surface;
pub mod transform;
pub mod viewport;

pub use canvas::CanvasSurface;
pub use capture::{CaptureOutcome, PROXIMITY_THRESHOLD, capture_point};
pub use config::EditorConfig;
pub use controller::{
    EditorState, HitTarget, ModeChange, Notice, NoticeKind, PolygonController, RenderInput,
};
pub use error::{ClipboardError, ConfigError, EditorError, EditorResult, PathError, ViewportError};
pub use export::EXPORT_ACK;
pub use input::{InputState, MouseButton, PointerEvent, PointerGesture};
pub use polygon::PolygonPath;
pub use selection::{Corner, Handle, HandleSet, ManipulationState};
pub use surface::{ClipboardSink, MemoryClipboard, ShapeId, Surface};
pub use transform::{ShapeTransform, bake_transform};
pub use viewport::{ViewportScale, ViewportSizer};
