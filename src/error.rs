//! Structured error types for configuration loading.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Not found errors
    ConfigurationFileNotFound,

    // Input errors
    ReadFailed,
    InvalidYaml,
    InvalidDocument,

    // Output errors
    DeserializeFailed,
}

/// Errors raised while loading a schema or configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    ConfigurationFileNotFound { path: PathBuf },

    #[error("Failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{} must contain a {expected} at the top level", path.display())]
    InvalidDocument {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Resolved configuration does not match the requested type: {0}")]
    Deserialize(#[source] serde_yaml::Error),
}

impl ConfigError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigurationFileNotFound { path: path.into() }
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::ConfigurationFileNotFound { .. } => ErrorCode::ConfigurationFileNotFound,
            ConfigError::Io { .. } => ErrorCode::ReadFailed,
            ConfigError::Yaml { .. } => ErrorCode::InvalidYaml,
            ConfigError::InvalidDocument { .. } => ErrorCode::InvalidDocument,
            ConfigError::Deserialize(_) => ErrorCode::DeserializeFailed,
        }
    }

    /// Whether this error means a requested file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::ConfigurationFileNotFound { .. })
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
