//! Error types for mention-helper

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mention-helper
#[derive(Debug, Error)]
pub enum MentionError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<MentionError>,
    },
}

impl MentionError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        MentionError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for MentionError {
    fn from(err: toml::de::Error) -> Self {
        MentionError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for MentionError {
    fn from(err: toml::ser::Error) -> Self {
        MentionError::Toml(err.to_string())
    }
}

/// Result type alias for mention-helper
pub type Result<T> = std::result::Result<T, MentionError>;
