//! Configuration management for the head gesture detector

use crate::{
    constants::{DEFAULT_MOTION_THRESHOLD, DEFAULT_WINDOW_MS},
    gesture_window::{ClassificationTiming, TieBreak},
    landmarks::TrackedLandmarks,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture detection configuration
    pub gesture: GestureConfig,
}

/// Gesture window parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Landmark indices of the four eye corners
    pub tracked: TrackedLandmarks,

    /// Sampling window length in milliseconds
    pub window_ms: i64,

    /// Net displacement at or below which the head counts as still
    pub motion_threshold: f32,

    /// When a closed window's gesture is committed
    pub timing: ClassificationTiming,

    /// Outcome of an exact horizontal/vertical tie
    pub tie_break: TieBreak,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tracked: TrackedLandmarks::default(),
            window_ms: DEFAULT_WINDOW_MS,
            motion_threshold: DEFAULT_MOTION_THRESHOLD,
            timing: ClassificationTiming::Deferred,
            tie_break: TieBreak::None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let gesture = &self.gesture;

        if gesture.window_ms <= 0 {
            return Err(Error::ConfigError("Window length must be greater than 0 ms".to_string()));
        }
        if !gesture.motion_threshold.is_finite() || gesture.motion_threshold < 0.0 {
            return Err(Error::ConfigError(
                "Motion threshold must be a finite, non-negative value".to_string(),
            ));
        }

        let indices = gesture.tracked.indices();
        if indices.iter().collect::<HashSet<_>>().len() != indices.len() {
            return Err(Error::ConfigError(format!(
                "Tracked landmark indices must be distinct: {indices:?}"
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head Gesture Configuration

gesture:
  # Eye corner landmark indices of the face-landmark model
  tracked:
    left_outer: 37
    left_inner: 40
    right_inner: 43
    right_outer: 46
  window_ms: 1000
  motion_threshold: 0.01
  # deferred (commit at next baseline) or immediate (commit at window close)
  timing: deferred
  # none or keep_previous
  tie_break: none
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_matches_default() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("gesture:\n  timing: immediate\n").unwrap();
        assert_eq!(config.gesture.timing, ClassificationTiming::Immediate);
        assert_eq!(config.gesture.window_ms, 1000);
        assert_eq!(config.gesture.tracked, TrackedLandmarks::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.gesture.window_ms = 0;
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let mut config = Config::default();
        config.gesture.motion_threshold = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.gesture.tracked.right_outer = 37;
        assert!(config.validate().is_err());
    }
}
