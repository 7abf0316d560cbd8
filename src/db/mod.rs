use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "chapterdeck.player_settings";
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "settings.json";

/// Player settings. Every field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Arrow-key rewind/fast-forward step, seconds.
    #[serde(default = "default_seek_step_secs")]
    pub seek_step_secs: f64,
    #[serde(default = "default_signup_confirmation_ms")]
    pub signup_confirmation_ms: u32,
    #[serde(default = "default_coming_soon_text")]
    pub coming_soon_text: String,
    #[serde(default = "default_signup_success_label")]
    pub signup_success_label: String,
    #[serde(default = "default_signup_success_color")]
    pub signup_success_color: String,
    #[serde(default = "default_audio_element_id")]
    pub audio_element_id: String,
    #[serde(default = "default_show_signup")]
    pub show_signup: bool,
}

fn default_seek_step_secs() -> f64 {
    5.0
}

fn default_signup_confirmation_ms() -> u32 {
    3000
}

fn default_coming_soon_text() -> String {
    "Audio coming soon...".to_string()
}

fn default_signup_success_label() -> String {
    "Subscribed!".to_string()
}

fn default_signup_success_color() -> String {
    "#2e7d32".to_string()
}

fn default_audio_element_id() -> String {
    "chapterdeck-audio".to_string()
}

fn default_show_signup() -> bool {
    true
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            seek_step_secs: default_seek_step_secs(),
            signup_confirmation_ms: default_signup_confirmation_ms(),
            coming_soon_text: default_coming_soon_text(),
            signup_success_label: default_signup_success_label(),
            signup_success_color: default_signup_success_color(),
            audio_element_id: default_audio_element_id(),
            show_signup: default_show_signup(),
        }
    }
}

impl PlayerSettings {
    pub fn from_json(raw: &str) -> SettingsResult<Self> {
        let settings: PlayerSettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.seek_step_secs.is_finite() || self.seek_step_secs <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "seek_step_secs",
                reason: format!("must be a positive number, got {}", self.seek_step_secs),
            });
        }
        if self.signup_confirmation_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "signup_confirmation_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.audio_element_id.trim().is_empty() {
            return Err(SettingsError::Invalid {
                field: "audio_element_id",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// Browser storage

#[cfg(target_arch = "wasm32")]
fn storage_error(err: StorageError) -> SettingsError {
    SettingsError::Storage(err.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> SettingsResult<PlayerSettings> {
    match LocalStorage::get::<PlayerSettings>(SETTINGS_KEY) {
        Ok(settings) => {
            settings.validate()?;
            Ok(settings)
        }
        Err(StorageError::KeyNotFound(_)) => Ok(PlayerSettings::default()),
        Err(err) => Err(storage_error(err)),
    }
}

// Native settings file

#[cfg(not(target_arch = "wasm32"))]
fn settings_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chapterdeck"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> SettingsResult<PlayerSettings> {
    match settings_dir() {
        Some(dir) => load_settings_from(&dir),
        None => Ok(PlayerSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings_from(dir: &Path) -> SettingsResult<PlayerSettings> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(PlayerSettings::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    PlayerSettings::from_json(&raw)
}
