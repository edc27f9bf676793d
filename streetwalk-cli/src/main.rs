//! Streetwalk CLI - Command-line interface
//!
//! Hosts a walker and an imagery client in one process: move the walker
//! with arrow-style commands and look up Mapillary images around it.

mod commands;
mod error;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::nearby::NearbyArgs;
use commands::walk::WalkArgs;

#[derive(Debug, Parser)]
#[command(
    name = "streetwalk",
    version,
    about = "Walk a virtual explorer and query nearby street-level imagery"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List images around a point
    Nearby(NearbyArgs),

    /// Apply movement commands and optionally look around the end position
    Walk(WalkArgs),

    /// Show the configured Mapillary access token
    Token {
        /// Print the raw token instead of only its presence
        #[arg(long)]
        show: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    streetwalk::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Nearby(args) => commands::nearby::run(args).await,
        Commands::Walk(args) => commands::walk::run(args).await,
        Commands::Token { show } => commands::token::run(show),
        Commands::Config { command } => commands::config::run(command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
