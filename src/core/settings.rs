//! Client settings and their persistence
//!
//! Saves and loads [`ClientSettings`] to/from a JSON file in the user's
//! configuration directory.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a logged warning
//! - Save failures are returned to the caller
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut settings = ClientSettings::load();
//! settings.animation_ms = 200;
//! settings.save()?;
//! ```

use super::error::CoreResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Tunables for the board client
///
/// Every field has a default so partially written files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the game authority
    pub server_url: String,

    /// Duration of the move slide in milliseconds
    pub animation_ms: u64,

    /// Pause before an automated seat answers a human move
    pub automove_delay_ms: u64,

    /// Pause between moves when both seats are automated
    pub exhibition_delay_ms: u64,

    /// Edge length of the board in pixels, used by the headless surface
    pub board_size_px: f32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            animation_ms: 280,
            automove_delay_ms: 500,
            exhibition_delay_ms: 600,
            board_size_px: 480.0,
        }
    }
}

impl ClientSettings {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn automove_delay(&self) -> Duration {
        Duration::from_millis(self.automove_delay_ms)
    }

    pub fn exhibition_delay(&self) -> Duration {
        Duration::from_millis(self.exhibition_delay_ms)
    }

    /// Resolve the settings file path
    ///
    /// Returns `settings.json` in the user's configuration directory, or in
    /// the working directory if no config dir can be determined.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "chessboard", "ChessboardClient") {
            proj_dirs.config_dir().join(SETTINGS_FILENAME)
        } else {
            PathBuf::from(SETTINGS_FILENAME)
        }
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<ClientSettings>(&contents) {
                Ok(settings) => {
                    info!("[SETTINGS] Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!(
                        "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> CoreResult<PathBuf> {
        let path = Self::default_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("chessboard-client-{}-{}", name, std::process::id()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_default_settings() {
        //! Verifies the shipped defaults
        let settings = ClientSettings::default();
        assert_eq!(settings.animation_ms, 280);
        assert_eq!(settings.animation_duration(), Duration::from_millis(280));
        assert_eq!(settings.exhibition_delay(), Duration::from_millis(600));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        //! A file with only some keys keeps defaults for the rest
        let settings: ClientSettings =
            serde_json::from_str(r#"{"animation_ms": 120}"#).expect("Should deserialize");
        assert_eq!(settings.animation_ms, 120);
        assert_eq!(settings.automove_delay_ms, 500);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = scratch_path("missing");
        assert_eq!(ClientSettings::load_from(&path), ClientSettings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let path = scratch_path("invalid");
        fs::create_dir_all(path.parent().expect("has parent")).expect("create dir");
        fs::write(&path, "not json").expect("write");
        assert_eq!(ClientSettings::load_from(&path), ClientSettings::default());
        let _ = fs::remove_dir_all(path.parent().expect("has parent"));
    }

    #[test]
    fn test_save_then_load() {
        //! Saved settings are read back unchanged
        let path = scratch_path("roundtrip");
        let settings = ClientSettings {
            server_url: "http://example.test".to_string(),
            animation_ms: 90,
            ..Default::default()
        };
        settings.save_to(&path).expect("save");
        assert_eq!(ClientSettings::load_from(&path), settings);
        let _ = fs::remove_dir_all(path.parent().expect("has parent"));
    }
}
