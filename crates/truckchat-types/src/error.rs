//! Error types for truck-chat

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(String),

    /// The reference table could not be read. Sessions cannot continue.
    #[error("Storage unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("Transcript write failed: {0}")]
    Transcript(String),

    #[error("Result write failed: {0}")]
    ResultWrite(String),

    #[error("Input closed before the conversation finished")]
    InputClosed,

    #[error("Not a number: {0}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, Error>;
