//! Startup configuration
//!
//! Loaded once before the loop starts. The simulation core has no error
//! paths, so this is the only fallible seam in the crate; any problem
//! here logs a warning and falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable naming an alternate settings file
const SETTINGS_ENV: &str = "RETRO_PONG_SETTINGS";
/// Default settings file next to the binary
const SETTINGS_FILE: &str = "retro-pong.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield size, normally the host viewport
    pub field_width: f32,
    pub field_height: f32,
    /// Fixed seed for reproducible serves; time-based when absent
    pub seed: Option<u64>,
    /// How many ticks the demo binary runs before exiting
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            seed: None,
            demo_ticks: 600,
        }
    }
}

impl Settings {
    /// Load settings from `$RETRO_PONG_SETTINGS` or `retro-pong.json`,
    /// falling back to defaults when the file is absent or malformed.
    pub fn load() -> Self {
        let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| SETTINGS_FILE.to_string());
        Self::from_path(Path::new(&path))
    }

    fn from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
