//! Session settings
//!
//! Loaded from an optional JSON file; anything missing or malformed falls
//! back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::sim::Arena;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Run ===
    /// RNG seed for the session
    pub seed: u64,
    /// Fixed frame step fed to the simulation by the headless runner (ms)
    pub frame_ms: f32,
    /// Frames the headless runner simulates before exiting
    pub max_frames: u32,
    /// Let the autopilot play instead of idling
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            seed: 0x5AD0_5EED,
            frame_ms: 1000.0 / 60.0,
            max_frames: 60 * 60,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {e}; using default settings", path.display());
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}; using default settings", path.display());
                Self::default()
            }
        }
    }

    /// Arena for the session; too-small or non-finite dimensions fall back to the default
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height).or_default()
    }

    /// Frame step with the same clamping the simulation applies
    pub fn effective_frame_ms(&self) -> f32 {
        crate::sim::sanitize_elapsed(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "autopilot": false }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert!(!settings.autopilot);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.max_frames, Settings::default().max_frames);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
        assert!(Settings::from_json(r#"{ "seed": "many" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_tiny_arena_falls_back() {
        let settings = Settings {
            arena_width: 10.0,
            ..Default::default()
        };
        assert_eq!(settings.arena(), Arena::default());

        // Wider than the hitbox but not the enemy spawn band
        let settings = Settings {
            arena_width: 30.0,
            ..Default::default()
        };
        assert_eq!(settings.arena(), Arena::default());

        let settings = Settings {
            arena_width: 320.0,
            arena_height: 480.0,
            ..Default::default()
        };
        assert_eq!(settings.arena(), Arena::new(320.0, 480.0));
    }

    #[test]
    fn test_effective_frame_ms() {
        let settings = Settings {
            frame_ms: -3.0,
            ..Default::default()
        };
        assert_eq!(settings.effective_frame_ms(), 0.0);
    }
}
