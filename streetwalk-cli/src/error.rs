//! CLI error types.

use std::fmt;

use streetwalk::config::ConfigError;
use streetwalk::imagery::ImageryError;
use streetwalk::walker::WalkerError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Config file could not be loaded.
    Config(ConfigError),

    /// Image query failed.
    Imagery(ImageryError),

    /// A movement command was rejected.
    Walker(WalkerError),

    /// Output could not be rendered.
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Imagery(e) => write!(f, "Image lookup failed: {}", e),
            CliError::Walker(e) => write!(f, "Invalid move: {}", e),
            CliError::Output(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Imagery(e) => Some(e),
            CliError::Walker(e) => Some(e),
            CliError::Output(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<ImageryError> for CliError {
    fn from(e: ImageryError) -> Self {
        CliError::Imagery(e)
    }
}

impl From<WalkerError> for CliError {
    fn from(e: WalkerError) -> Self {
        CliError::Walker(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walker_error_display() {
        let err: CliError = WalkerError::UnknownDirection("jump".to_string()).into();
        assert!(err.to_string().starts_with("Invalid move"));
        assert!(err.to_string().contains("jump"));
    }

    #[test]
    fn test_imagery_error_keeps_source() {
        use std::error::Error;

        let err: CliError = ImageryError::Remote {
            status: 500,
            body: "server error".to_string(),
        }
        .into();
        assert!(err.to_string().contains("500 server error"));
        assert!(err.source().is_some());
    }
}
