//! Game settings and preferences
//!
//! Persisted separately from run state as a small JSON file. Load never
//! fails: a missing or corrupt file falls back to defaults with a log line.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::BindingPreset;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Movement key preset
    pub bindings: BindingPreset,

    // === Visual ===
    /// Flash the player white after a hit
    pub hit_flash: bool,
    /// Skip the translucent warning strips (accessibility)
    pub reduced_flash: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: BindingPreset::Wasd,
            hit_flash: true,
            reduced_flash: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, defaulting on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring corrupt settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("settings saved");
        Ok(())
    }
}
