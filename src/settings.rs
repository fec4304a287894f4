//! Page-level settings
//!
//! Defaults cover the usual page layout. A page can override them with a
//! JSON object in the container's `data-pet` attribute.

use serde::{Deserialize, Serialize};

/// Log verbosity, mirrored onto `log::Level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Pet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetSettings {
    /// Sprite sheet location
    pub sprite_url: String,
    pub log_level: LogLevel,
    /// Fixed RNG seed (random per page load when unset)
    pub seed: Option<u64>,
}

impl Default for PetSettings {
    fn default() -> Self {
        Self {
            sprite_url: "/static/cat.png".to_string(),
            log_level: LogLevel::Info,
            seed: None,
        }
    }
}

impl PetSettings {
    /// Id of the element the cat lives in
    pub const CONTAINER_ID: &'static str = "cat";

    /// Container attribute holding JSON overrides
    pub const DATA_ATTRIBUTE: &'static str = "data-pet";

    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Settings from an optional attribute value, falling back to defaults
    pub fn from_attribute(value: Option<&str>) -> Self {
        let Some(json) = value.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid {} attribute: {}", Self::DATA_ATTRIBUTE, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let settings = PetSettings::from_json(r#"{"seed": 7, "log_level": "debug"}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.sprite_url, "/static/cat.png");
    }

    #[test]
    fn test_invalid_attribute_falls_back() {
        assert_eq!(PetSettings::from_attribute(Some("{not json")), PetSettings::default());
        assert_eq!(PetSettings::from_attribute(Some("   ")), PetSettings::default());
        assert_eq!(PetSettings::from_attribute(None), PetSettings::default());
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::default().to_level(), log::Level::Info);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }
}
