//! Player preferences
//!
//! Persisted separately from progress. These flags are handed to feedback
//! collaborators only; the simulation never reads them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::StoreError;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Sound effects on/off
    pub sound_enabled: bool,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Haptics ===
    pub haptics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_volume: 0.5,
            haptics_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.clamped();
                }
                Err(e) => log::warn!("Ignoring unreadable settings file: {}", e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    fn clamped(mut self) -> Self {
        self.music_volume = if self.music_volume.is_finite() {
            self.music_volume.clamp(0.0, 1.0)
        } else {
            Self::default().music_volume
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("orbit_point_settings_missing_never_written.json");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir()
            .join(format!("orbit_point_settings_{}.json", std::process::id()));
        let settings = Settings {
            sound_enabled: false,
            music_volume: 0.25,
            haptics_enabled: true,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_volume_clamped() {
        let settings: Settings = serde_json::from_str(r#"{ "music_volume": 3.0 }"#).unwrap();
        assert_eq!(settings.clamped().music_volume, 1.0);
    }
}
