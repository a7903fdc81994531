//! Player preferences
//!
//! Persisted in LocalStorage on the web; native builds read a JSON file.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::input::{Button, ControlBinding, Controls};
use crate::sim::state::Team;

/// Key bindings and display toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key bindings for both players
    pub controls: Controls,

    // === HUD ===
    /// Boost bar under each car
    pub show_boost_bars: bool,
    /// Centre line, centre circle and goal boxes
    pub show_field_markings: bool,
    /// Large score numerals drawn on the pitch
    pub show_score: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            controls: Controls::default(),
            show_boost_bars: true,
            show_field_markings: true,
            show_score: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rocket_soccer_settings";

    /// Parse (possibly partial) settings and validate the bindings
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Every button needs a key, and one player can't use a key twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_binding("controls.red", &self.controls.red)?;
        check_binding("controls.blue", &self.controls.blue)?;
        Ok(())
    }

    /// Rebind one button for one player
    pub fn rebind(
        &mut self,
        team: Team,
        button: Button,
        key: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let mut next = self.clone();
        *next.controls.binding_mut(team).key_for_mut(button) = key.into();
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

fn check_binding(field: &'static str, binding: &ControlBinding) -> Result<(), ConfigError> {
    for (i, &button) in Button::ALL.iter().enumerate() {
        let key = binding.key_for(button);
        if key.is_empty() {
            return Err(ConfigError::invalid(field, format!("{button:?} has no key")));
        }
        for &other in &Button::ALL[i + 1..] {
            if binding.key_for(other) == key {
                return Err(ConfigError::invalid(
                    field,
                    format!("{key:?} is bound to both {button:?} and {other:?}"),
                ));
            }
        }
    }
    Ok(())
}
