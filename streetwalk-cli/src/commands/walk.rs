//! Walk command - move the walker, then optionally look around.

use clap::Args;
use streetwalk::config::ConfigFile;
use streetwalk::imagery::{nearest_feature, NearbyQuery, DEFAULT_RADIUS_DEG};
use streetwalk::walker::WalkerPositionStore;

use super::common::{format_state, imagery_client, print_images};
use crate::error::CliError;

/// Arguments for `streetwalk walk`.
#[derive(Debug, Args)]
pub struct WalkArgs {
    /// Moves to apply in order: up, down, left, right
    pub moves: Vec<String>,

    /// Query images around the final position
    #[arg(long)]
    pub fetch: bool,

    /// Jump to the nearest image after fetching (implies --fetch)
    #[arg(long)]
    pub teleport: bool,

    /// Half-width of the search box in degrees
    #[arg(long, default_value_t = DEFAULT_RADIUS_DEG)]
    pub radius: f64,

    /// Print image records as JSON
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Run the walk command.
pub async fn run(args: WalkArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let store = WalkerPositionStore::with_state(config.start_state());

    println!("Start: {}", format_state(&store.snapshot()));
    for command in &args.moves {
        store.step_str(command)?;
    }

    let here = store.snapshot();
    println!("End:   {}", format_state(&here));

    if !(args.fetch || args.teleport) {
        return Ok(());
    }

    let client = imagery_client(&config, args.timeout)?;
    let query = NearbyQuery::new(here.lat, here.lng).with_radius(args.radius);
    let images = client.fetch_nearby_images(&query).await?;
    print_images(&images, args.json)?;

    if args.teleport {
        match nearest_feature(&images, here.lat, here.lng)
            .and_then(|f| f.location().map(|(lat, lng)| (f.id.clone(), lat, lng)))
        {
            Some((id, lat, lng)) => {
                let state = store.teleport(id, lat, lng);
                println!("Teleported: {}", format_state(&state));
            }
            None => println!("No image with a location to teleport to."),
        }
    }

    Ok(())
}
