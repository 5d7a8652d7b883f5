//! Error types and result aliases for Sprout operations.
//!
//! Provides a unified error type that covers all possible error conditions
//! across the Sprout crates with actionable error messages.

use thiserror::Error;

/// Unified error type for all Sprout operations
#[derive(Error, Debug)]
pub enum SproutError {
    // Manifest errors
    #[error("Failed to parse sprout.toml: {message}")]
    TomlParse { message: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // Requirement errors
    #[error("Invalid requirement '{spec}': {reason}")]
    InvalidRequirement { spec: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Sprout operations
pub type SproutResult<T> = Result<T, SproutError>;

impl SproutError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a requirement error for a specifier that failed to parse
    pub fn invalid_requirement(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRequirement {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SproutError::TomlParse { .. } => {
                Some("Check the syntax of sprout.toml or run 'sprout init' to create one")
            },
            SproutError::InvalidRequirement { .. } => {
                Some("Fix the specifier in the requirements file; see PEP 508 for the format")
            },
            SproutError::Io { .. } => Some("Check that the file exists and is readable"),
            _ => None,
        }
    }
}
