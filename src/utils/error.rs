//! Error types for frameless-chrome
//!
//! The library uses the thiserror-derived `ChromeError`; the binary wraps
//! it in anyhow at the top level.

use thiserror::Error;

/// Main error type for frameless-chrome
#[derive(Error, Debug)]
pub enum ChromeError {
    /// A layout description contained something that is neither a spacing,
    /// a stretch, a registered element, nor a nested layout
    #[error("Invalid layout item: item {item} with type {kind} is not supported")]
    InvalidLayoutItem { item: String, kind: &'static str },

    /// Window-related errors
    #[error("Window error: {0}")]
    Window(String),

    /// Renderer errors
    #[error("Renderer error: {0}")]
    Renderer(String),

    /// Icon asset could not be decoded
    #[error("Icon error: {0}")]
    Icon(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),
}

impl From<image::ImageError> for ChromeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => ChromeError::FileIO(io),
            other => ChromeError::Icon(other.to_string()),
        }
    }
}

/// Convenience type alias for Results in frameless-chrome
pub type Result<T> = std::result::Result<T, ChromeError>;

/// Extension trait for converting other errors to ChromeError
pub trait IntoChromeError<T> {
    /// Convert this error into a ChromeError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn renderer_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoChromeError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromeError::Window(format!("{}: {}", context, e)))
    }

    fn renderer_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromeError::Renderer(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromeError::Config(format!("{}: {}", context, e)))
    }
}
