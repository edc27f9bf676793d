//! Nearby command - list images around a point.

use clap::Args;
use streetwalk::config::ConfigFile;
use streetwalk::imagery::{NearbyQuery, DEFAULT_LIMIT, DEFAULT_RADIUS_DEG};

use super::common::{imagery_client, print_images};
use crate::error::CliError;

/// Arguments for `streetwalk nearby`.
#[derive(Debug, Args)]
pub struct NearbyArgs {
    /// Center latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Center longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Half-width of the search box in degrees
    #[arg(long, default_value_t = DEFAULT_RADIUS_DEG)]
    pub radius: f64,

    /// Maximum number of images
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Print raw JSON records
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl NearbyArgs {
    pub fn query(&self) -> NearbyQuery {
        NearbyQuery::new(self.lat, self.lng)
            .with_radius(self.radius)
            .with_limit(self.limit)
    }
}

/// Run the nearby command.
pub async fn run(args: NearbyArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let client = imagery_client(&config, args.timeout)?;

    let query = args.query();
    tracing::info!(
        lat = query.lat,
        lng = query.lng,
        radius = query.radius,
        "Searching for images"
    );

    let images = client.fetch_nearby_images(&query).await?;
    print_images(&images, args.json)
}
