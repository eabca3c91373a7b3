//! Application configuration.

use std::path::Path;

use peniko::Color;
use polyedit_core::{ConfigError, EditorConfig};
use serde::{Deserialize, Serialize};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "POLYEDIT_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Stage background as `#rrggbb` or `#rrggbbaa`.
    pub background: String,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PolyEdit".to_string(),
            width: 800,
            height: 560,
            background: "#ffffff".to_string(),
            editor: EditorConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from the file named by `POLYEDIT_CONFIG`, or the defaults when
    /// the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if parse_color(&self.background).is_none() {
            return Err(ConfigError::Invalid(format!(
                "background must be #rrggbb or #rrggbbaa, got {:?}",
                self.background
            )));
        }
        self.editor.validate()
    }

    pub fn background_color(&self) -> Color {
        parse_color(&self.background).unwrap_or(Color::WHITE)
    }
}

/// Parse a `#rrggbb` or `#rrggbbaa` hex color.
pub fn parse_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ffffff"), Some(Color::WHITE));
        assert_eq!(parse_color("#00808080"), Some(Color::from_rgba8(0, 128, 128, 128)));
        assert_eq!(parse_color("ffffff"), None);
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gggggg"), None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"title": "Zones", "editor": {"proximity_threshold": 15}}"#)
            .unwrap();
        assert_eq!(config.title, "Zones");
        assert_eq!(config.width, 800);
        assert!((config.editor.proximity_threshold - 15.0).abs() < f64::EPSILON);
        assert!((config.editor.reference_width - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AppConfig::from_json(r#"{"width": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r##"{"background": "#12"}"##),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"editor": {"min_extent": -1}}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"background": "#fafafa", "height": 700}}"##).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.height, 700);
        assert_eq!(config.background_color(), Color::from_rgba8(250, 250, 250, 255));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load("/nonexistent/polyedit.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
