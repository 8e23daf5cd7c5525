//! Domain error types

use thiserror::Error;

/// Error when a value does not match any entry of an option catalog
#[derive(Debug, Clone, Error)]
#[error("Invalid {kind}: \"{input}\". Valid values are: {valid}")]
pub struct InvalidOptionError {
    pub kind: &'static str,
    pub input: String,
    pub valid: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
