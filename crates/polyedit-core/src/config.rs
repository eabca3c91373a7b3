//! Editor configuration.

use std::path::Path;

use kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::capture::PROXIMITY_THRESHOLD;
use crate::error::ConfigError;

/// Tunable editor settings.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Distance (logical units) from the start vertex that closes the polygon.
    pub proximity_threshold: f64,
    /// Width of the logical frame the polygon is stored in.
    pub reference_width: f64,
    /// Height of the logical frame the polygon is stored in.
    pub reference_height: f64,
    /// Whether the editor starts capturing points immediately.
    pub start_drawing: bool,
    /// Selection handle size in screen pixels.
    pub handle_size: f64,
    /// Handle hit tolerance in screen pixels.
    pub handle_hit_tolerance: f64,
    /// Smallest width/height (logical units) a resize gesture may produce.
    pub min_extent: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: PROXIMITY_THRESHOLD,
            reference_width: 800.0,
            reference_height: 500.0,
            start_drawing: false,
            handle_size: 10.0,
            handle_hit_tolerance: 12.0,
            min_extent: 4.0,
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded editor config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the editor's numeric invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("proximity_threshold", self.proximity_threshold),
            ("reference_width", self.reference_width),
            ("reference_height", self.reference_height),
            ("handle_size", self.handle_size),
            ("handle_hit_tolerance", self.handle_hit_tolerance),
            ("min_extent", self.min_extent),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// The logical frame size as a `Size`.
    pub fn reference_size(&self) -> Size {
        Size::new(self.reference_width, self.reference_height)
    }
}
