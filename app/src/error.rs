//! Unified error handling for the terminal host.

use crate::command::CommandError;
use crate::config::ConfigError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] shelf_engine::Error),

    #[error("Invalid command: {0}")]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the event loop should stop.
    ///
    /// Engine and command errors are reported at the prompt and the loop
    /// keeps going; terminal and configuration failures end the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::Io(_))
    }

    /// Text for the status line, or `None` when the view already told the
    /// user through a notice.
    pub fn status_message(&self) -> Option<String> {
        match self {
            AppError::Engine(shelf_engine::Error::EmptyValue) => None,
            AppError::Engine(e) => Some(e.to_string()),
            AppError::Command(e) => Some(e.to_string()),
            other => Some(other.to_string()),
        }
    }
}

/// Result type alias for the host.
pub type Result<T> = std::result::Result<T, AppError>;
