//! Configuration file management
//!
//! Loads TOML configuration and provides application settings.
//! Default config path: ~/.config/vkeyboard/config.toml

use anyhow::{Context, Result};
use core_types::Point;
use form::HostForm;
use keyboard::TabCaret;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub form: FormConfig,
    pub keyboard: KeyboardConfig,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner size in logical pixels
    pub width: u32,
    pub height: u32,
}

/// Form settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Number of text fields; fixed for the session, must be at least 1
    pub field_count: usize,
    /// Visible rows per text area
    pub rows: usize,
}

/// Keyboard overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Show the overlay at startup
    pub visible: bool,
    /// Initial overlay offset
    pub x: f32,
    pub y: f32,
    /// Caret after Tab: "legacy" (advance 1) or "after-insert" (advance 4)
    pub tab_caret: TabCaret,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Virtual Keyboard Form".to_string(),
            width: 720,
            height: 820,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            field_count: HostForm::DEFAULT_FIELD_COUNT,
            rows: 3,
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            tab_caret: TabCaret::Legacy,
        }
    }
}

impl KeyboardConfig {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Config {
    /// Default config file location
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vkeyboard").join("config.toml"))
    }

    /// Load from the default location, falling back to built-in defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => {
                info!("Using built-in default config");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to built-in defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Loaded config: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and sanitize a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("invalid TOML")?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let defaults = Config::default();
        if self.form.field_count == 0 {
            warn!(
                "form.field_count must be at least 1; using {}",
                defaults.form.field_count
            );
            self.form.field_count = defaults.form.field_count;
        }
        if self.form.rows == 0 {
            self.form.rows = defaults.form.rows;
        }
        if self.window.width == 0 || self.window.height == 0 {
            self.window.width = defaults.window.width;
            self.window.height = defaults.window.height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.form.field_count, 5);
        assert_eq!(config.keyboard.tab_caret, TabCaret::Legacy);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [keyboard]
            visible = true
            x = 40.0
            tab_caret = "after-insert"
            "#,
        )
        .unwrap();

        assert!(config.keyboard.visible);
        assert_eq!(config.keyboard.position(), Point::new(40.0, 0.0));
        assert_eq!(config.keyboard.tab_caret, TabCaret::AfterInsert);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.form.rows, 3);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_toml_str(
            r#"
            [form]
            field_count = 0
            rows = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.form, FormConfig::default());
    }

    #[test]
    fn unknown_tab_caret_is_rejected_at_load() {
        let err = Config::from_toml_str("[keyboard]\ntab_caret = \"diagonal\"").unwrap_err();
        assert!(format!("{err:#}").contains("diagonal"));

        let dir = std::env::temp_dir().join(format!("vkeyboard-tab-caret-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[keyboard]\nvisible = true\ntab_caret = \"diagonal\"\n").unwrap();

        assert_eq!(Config::load_or_default(&path), Config::default());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml_str("[form\nfield_count = ").is_err());
        assert!(Config::from_toml_str("[form]\nfield_count = \"five\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("vkeyboard-definitely-missing").join("config.toml");
        assert!(Config::load_from_file(&path).is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn file_round_trip() {
        let dir = std::env::temp_dir().join(format!("vkeyboard-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.form.field_count = 3;
        config.window.title = "Kiosk".to_string();
        std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

        assert_eq!(Config::load_or_default(&path), config);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
