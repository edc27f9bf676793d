//! Configuration CLI commands.

use clap::Subcommand;
use streetwalk::config::{config_file_path, env_lookup, ConfigFile};

use super::common::format_state;
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective settings (token redacted)
    Show,

    /// Write a config file with the default walker start position
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init => run_init(),
    }
}

fn run_show() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let imagery = config.imagery_config(env_lookup);

    println!("Config file:  {}", config_file_path().display());
    println!("API root:     {}", imagery.base_url);
    println!(
        "Access token: {}",
        if imagery.access_token.is_empty() {
            "(not set)"
        } else {
            "(set)"
        }
    );
    println!("Walker start: {}", format_state(&config.start_state()));
    Ok(())
}

fn run_init() -> Result<(), CliError> {
    let mut config = ConfigFile::load()?;
    let start = config.start_state();
    config.walker.start_lat.get_or_insert(start.lat);
    config.walker.start_lng.get_or_insert(start.lng);
    config.walker.start_bearing.get_or_insert(start.bearing);
    config.save()?;

    println!("Configuration file: {}", config_file_path().display());
    println!("Set mapillary.access_token there, or export MAPILLARY_ACCESS_TOKEN.");
    Ok(())
}
