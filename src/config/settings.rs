//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::voice::DEFAULT_RATIO_THRESHOLD;

use super::AppPaths;

// ---------------------------------------------------------------------------
// GestureConfig
// ---------------------------------------------------------------------------

/// Settings for the nearest-neighbor gesture classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Maximum squared Euclidean distance (degrees²) for a nearest-neighbor
    /// match to be accepted.  Queries farther than this from every stored
    /// sample classify as `None`.
    pub confidence_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 20.0,
        }
    }
}

// ---------------------------------------------------------------------------
// VoiceConfig
// ---------------------------------------------------------------------------

/// Settings for fuzzy voice-command matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Distance-ratio threshold used for long strings (short strings use
    /// absolute edit-distance bounds regardless of this value).
    pub ratio_threshold: f32,
    /// Authored command phrases a transcript is matched against.
    pub commands: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            commands: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use handsfree::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gesture classifier settings.
    pub gesture: GestureConfig,
    /// Voice-command matching settings.
    pub voice: VoiceConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(
            original.gesture.confidence_threshold,
            loaded.gesture.confidence_threshold
        );
        assert_eq!(original.voice.ratio_threshold, loaded.voice.ratio_threshold);
        assert_eq!(original.voice.commands, loaded.voice.commands);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");

        assert_eq!(config.gesture.confidence_threshold, 20.0);
        assert_eq!(config.voice.ratio_threshold, DEFAULT_RATIO_THRESHOLD);
        assert!(config.voice.commands.is_empty());
    }

    /// Verify default values match the calibrated thresholds.
    #[test]
    fn default_values_match_calibration() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.gesture.confidence_threshold, 20.0);
        assert_eq!(cfg.voice.ratio_threshold, 0.3);
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.gesture.confidence_threshold = 55.0;
        cfg.voice.ratio_threshold = 0.25;
        cfg.voice.commands = vec!["turn on the light".into(), "stop".into()];

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.gesture.confidence_threshold, 55.0);
        assert_eq!(loaded.voice.ratio_threshold, 0.25);
        assert_eq!(
            loaded.voice.commands,
            vec!["turn on the light".to_string(), "stop".to_string()]
        );
    }
}
