//! Token command - report the configured access token.

use streetwalk::config::{ConfigFile, LEGACY_TOKEN_ENV_VAR, TOKEN_ENV_VAR};

use super::common::imagery_client;
use crate::error::CliError;

/// Run the token command.
pub fn run(show: bool) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let client = imagery_client(&config, None)?;
    let token = client.access_token();

    if token.is_empty() {
        println!(
            "No access token configured. Set {} (or {}) or mapillary.access_token in the config file.",
            TOKEN_ENV_VAR, LEGACY_TOKEN_ENV_VAR
        );
    } else if show {
        println!("{}", token);
    } else {
        println!(
            "Access token configured ({} characters). Use --show to print it.",
            token.chars().count()
        );
    }

    Ok(())
}
