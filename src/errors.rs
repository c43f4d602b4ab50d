//! Error types for graph_poet
//!
//! Every failure the crate can report is a caller-input problem detected
//! synchronously. Missing vertices and absent bridges are not errors.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PoetError>;

/// Main error type for graph_poet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoetError {
    /// An operation received an argument outside its domain
    /// (e.g. a negative edge weight)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The corpus could not be opened or read
    #[error("I/O error reading corpus {path}: {message}")]
    Io { path: String, message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PoetError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error for the given corpus location
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by a bad argument to a graph operation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<serde_json::Error> for PoetError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
