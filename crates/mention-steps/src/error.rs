//! Error types for the step harness

use mention_core::MentionError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing features or running steps
#[derive(Debug, Error)]
pub enum StepError {
    /// Malformed feature file
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// No step definition matches the step text
    #[error("Undefined step: {0}")]
    UndefinedStep(String),

    /// More than one step definition matches the step text
    #[error("Ambiguous step '{text}' matches {patterns:?}")]
    AmbiguousStep { text: String, patterns: Vec<String> },

    /// A step's expectation did not hold
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// A step needed state that no earlier step provided
    #[error("Missing context: {0}")]
    MissingContext(String),

    /// Step pattern does not compile
    #[error("Invalid step pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Feature file or directory not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core library
    #[error(transparent)]
    Core(#[from] MentionError),
}

impl StepError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        StepError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for the step harness
pub type Result<T> = std::result::Result<T, StepError>;
