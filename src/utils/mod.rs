//! Utility module for frameless-chrome
//!
//! This module provides common utilities used throughout the crate:
//! - Error handling with custom error types
//! - Configuration management

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{ButtonConfig, Config, GeneralConfig, InputConfig, TitleBarConfig, WindowConfig};
pub use error::{ChromeError, IntoChromeError, Result};

/// Initialize the application configuration
///
/// Loads configuration from:
/// 1. Default values
/// 2. Environment variables
pub fn load_config() -> Result<Config> {
    Config::load()
}
