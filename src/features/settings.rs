//! Application settings persistence
//!
//! Handles saving and loading user preferences. The tally value itself is
//! deliberately not part of the settings; it always starts at zero.

use std::path::{Path, PathBuf};

use iced::Color;
use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub appearance: AppearanceSettings,
    /// Feedback pulse settings
    #[serde(default)]
    pub feedback: FeedbackSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceSettings {
    /// Dark interface palette
    pub dark_mode: bool,
    /// Optional pill background override as "#rgb" or "#rrggbb"
    #[serde(default)]
    pub counter_color: Option<String>,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            counter_color: None,
        }
    }
}

impl AppearanceSettings {
    /// Parse the configured pill color; malformed values are ignored
    pub fn counter_color(&self) -> Option<Color> {
        parse_hex_color(self.counter_color.as_deref()?)
    }
}

/// Feedback pulse settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSettings {
    /// Whether completed gestures emit a pulse
    pub enabled: bool,
    /// Pulse length for increment and decrement, in milliseconds
    pub step_pulse_ms: u64,
    /// Pulse length for reset, in milliseconds
    pub reset_pulse_ms: u64,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            step_pulse_ms: 75,
            reset_pulse_ms: 400,
        }
    }
}

impl Settings {
    /// Default settings file location
    fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "slidetally", "Slidetally")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, falling back to defaults
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Parse "#rgb" or "#rrggbb" into a color
fn parse_hex_color(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;

    let component = |pair: &str| u8::from_str_radix(pair, 16).ok();

    match digits.len() {
        3 => {
            let mut channels = digits.chars().filter_map(|c| {
                let digit = c.to_digit(16)? as u8;
                Some(digit * 16 + digit)
            });
            let (r, g, b) = (channels.next()?, channels.next()?, channels.next()?);
            Some(Color::from_rgb8(r, g, b))
        }
        6 => {
            let r = component(&digits[0..2])?;
            let g = component(&digits[2..4])?;
            let b = component(&digits[4..6])?;
            Some(Color::from_rgb8(r, g, b))
        }
        _ => None,
    }
}

/// Settings load/save error
#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let path = std::env::temp_dir().join("slidetally-settings-test.json");

        let mut settings = Settings::default();
        settings.appearance.dark_mode = false;
        settings.appearance.counter_color = Some("#1e1e2e".to_string());
        settings.feedback.reset_pulse_ms = 250;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(!loaded.appearance.dark_mode);
        assert_eq!(loaded.appearance.counter_color.as_deref(), Some("#1e1e2e"));
        assert_eq!(loaded.feedback.reset_pulse_ms, 250);
        assert_eq!(loaded.feedback.step_pulse_ms, 75);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("slidetally-settings-missing.json");
        assert!(Settings::load_from_file(&path).is_err());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.appearance.dark_mode);
        assert!(settings.feedback.enabled);
        assert_eq!(settings.feedback.step_pulse_ms, 75);
        assert_eq!(settings.feedback.reset_pulse_ms, 400);
        assert!(settings.appearance.counter_color().is_none());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffffff"), Some(Color::from_rgb8(255, 255, 255)));
        assert_eq!(parse_hex_color("#111"), Some(Color::from_rgb8(17, 17, 17)));
        assert_eq!(parse_hex_color("111111"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
    }
}
