//! Error types for the polygon editor.

use thiserror::Error;

/// Viewport sizing errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("Viewport has no usable extent: {width}x{height}")]
    ZeroExtent { width: f64, height: f64 },
}

/// Polygon path errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Flat coordinate sequence has odd length: {0}")]
    OddCoordinateCount(usize),
}

/// Clipboard sink errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level editor error.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
