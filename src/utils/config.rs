//! Configuration management for frameless-chrome
//!
//! Configuration comes from built-in defaults, then environment variables,
//! then command-line flags (applied by the binary). There is deliberately
//! no configuration file.

use crate::paint::Color;
use crate::utils::error::{ChromeError, IntoChromeError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Top-level window configuration
    pub window: WindowConfig,

    /// Title bar configuration
    pub title_bar: TitleBarConfig,

    /// Title bar button colors
    pub buttons: ButtonConfig,

    /// Pointer input tuning
    pub input: InputConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Initial window width
    pub width: u32,

    /// Initial window height
    pub height: u32,

    /// Minimum width a resize gesture may produce
    pub min_width: u32,

    /// Minimum height a resize gesture may produce
    pub min_height: u32,

    /// Start maximized
    pub start_maximized: bool,

    /// Thickness of the invisible resize border
    pub edge_sense_distance: u32,

    /// Corner radius of the window silhouette
    pub corner_radius: u32,

    /// Keep the silhouette rounded while maximized
    pub round_when_maximized: bool,

    /// Silhouette fill (hex, near-transparent so the border stays invisible)
    pub background: String,

    /// Fill of the content area below the title bar (hex)
    pub content_color: String,
}

/// Title bar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleBarConfig {
    /// Fixed height of the bar
    pub height: u32,

    /// Radius of the two top corners
    pub corner_radius: u32,

    /// Bar fill (hex)
    pub background: String,

    /// Title text color (hex)
    pub label_color: String,

    /// Icon image location
    pub icon_path: PathBuf,

    /// Height the icon is scaled to
    pub icon_height: u32,
}

/// Title bar button colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Button fill (hex)
    pub background: String,

    /// Glyph color (hex)
    pub glyph_color: String,
}

/// Pointer input tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum interval between two presses of a double-click
    pub double_click_ms: u64,

    /// Maximum travel between two presses of a double-click
    pub double_click_distance: u32,
}

/// General application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            width: 800,
            height: 600,
            min_width: 120,
            min_height: 60,
            start_maximized: false,
            edge_sense_distance: 3,
            corner_radius: 5,
            round_when_maximized: false,
            background: "#00000001".to_string(),
            content_color: "#A0A0A4FF".to_string(),
        }
    }
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            height: 25,
            corner_radius: 3,
            background: "#FFFFFFB4".to_string(),
            label_color: "#000000FF".to_string(),
            icon_path: PathBuf::from("./assets/default_icon.png"),
            icon_height: 20,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            background: "#FF0000B4".to_string(),
            glyph_color: "#FFFFFFFF".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            double_click_ms: 400,
            double_click_distance: 4,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// Configuration is built in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. Environment variables (FRAMELESS_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides, reading values through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(title) = lookup("FRAMELESS_TITLE") {
            self.window.title = title;
        }

        if let Some(width) = lookup("FRAMELESS_WIDTH") {
            self.window.width = width
                .parse::<u32>()
                .config_err("Invalid FRAMELESS_WIDTH")?;
        }

        if let Some(height) = lookup("FRAMELESS_HEIGHT") {
            self.window.height = height
                .parse::<u32>()
                .config_err("Invalid FRAMELESS_HEIGHT")?;
        }

        if let Some(edge) = lookup("FRAMELESS_EDGE_SENSE") {
            self.window.edge_sense_distance = edge
                .parse::<u32>()
                .config_err("Invalid FRAMELESS_EDGE_SENSE")?;
        }

        if let Some(icon) = lookup("FRAMELESS_ICON") {
            self.title_bar.icon_path = PathBuf::from(icon);
        }

        if let Some(log_level) = lookup("FRAMELESS_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ChromeError::Config("Window dimensions must be non-zero".to_string()));
        }

        if self.window.min_width > self.window.width || self.window.min_height > self.window.height {
            return Err(ChromeError::Config(format!(
                "Minimum size {}x{} exceeds initial size {}x{}",
                self.window.min_width, self.window.min_height, self.window.width, self.window.height
            )));
        }

        if self.window.edge_sense_distance == 0 {
            return Err(ChromeError::Config("Edge sense distance must be at least 1".to_string()));
        }

        if self.title_bar.height == 0 {
            return Err(ChromeError::Config("Title bar height must be non-zero".to_string()));
        }

        for (name, value) in [
            ("window.background", &self.window.background),
            ("window.content_color", &self.window.content_color),
            ("title_bar.background", &self.title_bar.background),
            ("title_bar.label_color", &self.title_bar.label_color),
            ("buttons.background", &self.buttons.background),
            ("buttons.glyph_color", &self.buttons.glyph_color),
        ] {
            Color::from_hex(value).config_err(name)?;
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(ChromeError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).config_err("Failed to serialize config")
    }
}
