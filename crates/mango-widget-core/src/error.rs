//! Core error types for mango-widget-core.
//!
//! Timeline generation never fails: missing or malformed store data is
//! replaced by defaults at read time. The types here cover the fallible
//! edges around it, namely loading store fixtures from disk and managing
//! the configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mango-widget-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store fixture errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Errors raised while loading a key-value store snapshot from a file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The fixture file could not be read
    #[error("Failed to read store from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is valid JSON but not a JSON object
    #[error("Store fixture must be a JSON object of key/value pairs")]
    NotAnObject,

    /// A value is neither a string, number nor bool
    #[error("Unsupported value for key '{key}': only strings, numbers and bools are allowed")]
    UnsupportedValue { key: String },

    /// The fixture is not valid JSON
    #[error("Failed to parse store fixture: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
