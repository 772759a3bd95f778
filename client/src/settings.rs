//! Settings persistence: four scalars in a flat JSON file.
//!
//! Failure never reaches the player. A missing or unreadable file, a parse
//! error, or an unknown enum name all fall back to defaults (parse errors
//! get one stderr line); saving is best-effort and written on every menu
//! change and on exit.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use game_core::{Difficulty, GameConfig, Mode, Theme};

pub const SETTINGS_FILE: &str = "pong_settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub difficulty: String,
    pub mode: String,
    pub sound_on: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl Settings {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            theme: config.theme.as_str().to_string(),
            difficulty: config.difficulty.as_str().to_string(),
            mode: config.mode.as_str().to_string(),
            sound_on: config.sound_on,
        }
    }

    /// Unrecognized names fall back per field rather than failing the load
    pub fn to_config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            theme: Theme::from_name(&self.theme).unwrap_or(defaults.theme),
            difficulty: Difficulty::from_name(&self.difficulty).unwrap_or(defaults.difficulty),
            mode: Mode::from_name(&self.mode).unwrap_or(defaults.mode),
            sound_on: self.sound_on,
        }
    }
}

pub fn load(path: &Path) -> Settings {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Settings::default(),
    };
    match serde_json::from_str(&contents) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to parse {}: {err}; using defaults", path.display());
            Settings::default()
        }
    }
}

/// Best-effort write; a failed save is never surfaced
pub fn save(path: &Path, settings: &Settings) {
    if let Ok(json) = serde_json::to_string_pretty(settings) {
        let _ = fs::write(path, json);
    }
}
