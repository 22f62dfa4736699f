//! Player settings and preferences
//!
//! Persisted separately from the high score, as JSON in the same store.

use serde::{Deserialize, Serialize};

use crate::consts::SWIPE_THRESHOLD_PX;
use crate::highscores::ScoreStore;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects on/off
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Draw faint grid lines behind the snake
    pub show_grid: bool,
    /// Minimum swipe distance in CSS pixels
    pub swipe_threshold_px: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            master_volume: 0.8,
            show_grid: true,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "snakeSettings";

    /// Effective volume (0 when sound is off)
    pub fn effective_volume(&self) -> f32 {
        if self.sound {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Load settings, falling back to defaults
    pub fn load(store: &impl ScoreStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Settings unavailable: {}", e),
        }
        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings (best effort)
    pub fn save(&self, store: &impl ScoreStore) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not encode settings: {}", e);
                return;
            }
        };
        match store.set(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;

    #[test]
    fn test_defaults_when_missing() {
        assert_eq!(Settings::load(&MemoryStore::new()), Settings::default());
        assert_eq!(Settings::load(&MemoryStore::failing()), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let settings = Settings {
            sound: false,
            show_grid: false,
            ..Default::default()
        };
        settings.save(&store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let store = MemoryStore::with_value(Settings::STORAGE_KEY, r#"{"sound":false}"#);
        let settings = Settings::load(&store);
        assert!(!settings.sound);
        assert!(settings.show_grid);
        assert_eq!(settings.swipe_threshold_px, 30.0);
    }

    #[test]
    fn test_corrupt_json_uses_defaults() {
        let store = MemoryStore::with_value(Settings::STORAGE_KEY, "{not json");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_volume(), 0.8);
        settings.sound = false;
        assert_eq!(settings.effective_volume(), 0.0);
    }
}
