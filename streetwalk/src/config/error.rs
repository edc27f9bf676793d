//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or parsed as INI.
    #[error("Failed to read config file {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    /// The file could not be written.
    #[error("Failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A value could not be parsed into the expected type.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
