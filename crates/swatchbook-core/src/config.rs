//! Swatch group configuration, stored as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::direction::Direction;

/// Default swatch edge length in points.
pub const DEFAULT_SWATCH_SIZE: f32 = 20.0;
/// Default gap between swatches in points.
pub const DEFAULT_SPACING: f32 = 4.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Presentation settings for a swatch group.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchGroupConfig {
    /// Layout axis (`"h"` or `"v"`; unknown codes read as vertical)
    pub direction: Direction,
    /// Offer copy-to-clipboard on each swatch
    pub copy: bool,
    /// Swatch edge length in points
    pub swatch_size: f32,
    /// Gap between swatches in points
    pub spacing: f32,
    /// Draw swatches as circles instead of rounded squares
    pub circular: bool,
}

impl Default for SwatchGroupConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Vertical,
            copy: false,
            swatch_size: DEFAULT_SWATCH_SIZE,
            spacing: DEFAULT_SPACING,
            circular: false,
        }
    }
}

impl SwatchGroupConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config.sanitized())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        let config = config.sanitized();
        log::info!("Loaded swatch group config from {:?}", path);
        Ok(config)
    }

    /// Write the config to a file, replacing any existing one.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Replace non-finite or non-positive sizes with defaults.
    fn sanitized(mut self) -> Self {
        if !self.swatch_size.is_finite() || self.swatch_size <= 0.0 {
            log::warn!(
                "Invalid swatch_size {}, using {}",
                self.swatch_size,
                DEFAULT_SWATCH_SIZE
            );
            self.swatch_size = DEFAULT_SWATCH_SIZE;
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            log::warn!("Invalid spacing {}, using {}", self.spacing, DEFAULT_SPACING);
            self.spacing = DEFAULT_SPACING;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = SwatchGroupConfig::default();
        assert_eq!(config.direction, Direction::Vertical);
        assert!(!config.copy);
        assert_eq!(config.swatch_size, DEFAULT_SWATCH_SIZE);
        assert_eq!(config.spacing, DEFAULT_SPACING);
        assert!(!config.circular);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SwatchGroupConfig::from_json("{}").unwrap();
        assert_eq!(config, SwatchGroupConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = SwatchGroupConfig::from_json(r#"{"direction": "h", "copy": true}"#).unwrap();
        assert_eq!(config.direction, Direction::Horizontal);
        assert!(config.copy);
        assert_eq!(config.swatch_size, DEFAULT_SWATCH_SIZE);
    }

    #[test]
    fn test_unknown_direction_reads_as_vertical() {
        let config = SwatchGroupConfig::from_json(r#"{"direction": "diagonal"}"#).unwrap();
        assert_eq!(config.direction, Direction::Vertical);
    }

    #[test]
    fn test_invalid_sizes_fall_back() {
        let config =
            SwatchGroupConfig::from_json(r#"{"swatch_size": -3.0, "spacing": -1.0}"#).unwrap();
        assert_eq!(config.swatch_size, DEFAULT_SWATCH_SIZE);
        assert_eq!(config.spacing, DEFAULT_SPACING);
    }

    #[test]
    fn test_malformed_json() {
        let result = SwatchGroupConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swatches.json");

        let config = SwatchGroupConfig {
            direction: Direction::Horizontal,
            copy: true,
            swatch_size: 28.0,
            spacing: 2.0,
            circular: true,
        };
        config.save(&path).unwrap();

        let loaded = SwatchGroupConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_malformed_file_reports_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SwatchGroupConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let message = err.to_string();
        assert_eq!(message.matches("Parse error").count(), 1);
        assert!(message.contains("broken.json"));
    }

    #[test]
    fn test_load_sanitizes_sizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sizes.json");
        fs::write(&path, r#"{"swatch_size": 0.0}"#).unwrap();

        let config = SwatchGroupConfig::load(&path).unwrap();
        assert_eq!(config.swatch_size, DEFAULT_SWATCH_SIZE);
    }

    #[test]
    fn test_null_direction_reads_as_vertical() {
        let config = SwatchGroupConfig::from_json(r#"{"direction": null, "copy": true}"#).unwrap();
        assert_eq!(config.direction, Direction::Vertical);
        assert!(config.copy);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = SwatchGroupConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
