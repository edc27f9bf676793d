//! Output helpers shared across CLI commands.

use streetwalk::config::{env_lookup, ConfigFile};
use streetwalk::imagery::{ImageFeature, ImageryClient, ReqwestClient};
use streetwalk::walker::PositionState;

use crate::error::CliError;

/// Build an imagery client from the config file and environment.
///
/// Requests never time out unless `timeout_secs` is given.
pub fn imagery_client(
    config: &ConfigFile,
    timeout_secs: Option<u64>,
) -> Result<ImageryClient<ReqwestClient>, CliError> {
    let imagery = config.imagery_config(env_lookup);
    match timeout_secs {
        Some(secs) => Ok(ImageryClient::new(ReqwestClient::with_timeout(secs)?, imagery)),
        None => Ok(ImageryClient::from_config(imagery)?),
    }
}

/// One-line summary of an image.
pub fn format_feature(feature: &ImageFeature) -> String {
    let location = feature
        .location()
        .map(|(lat, lng)| format!("{:.6}, {:.6}", lat, lng))
        .unwrap_or_else(|| "no location".to_string());

    let captured = feature
        .captured_time()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown date".to_string());

    format!(
        "{}  ({})  {}  seq {}",
        feature.id,
        location,
        captured,
        feature.sequence.as_deref().unwrap_or("-")
    )
}

/// One-line summary of the walker state.
pub fn format_state(state: &PositionState) -> String {
    let target = state
        .target_image_id
        .as_deref()
        .map(|id| format!(", at image {}", id))
        .unwrap_or_default();

    format!(
        "{:.6}, {:.6} facing {}° ({:.0}° normalized){}",
        state.lat,
        state.lng,
        state.bearing,
        state.normalized_bearing(),
        target
    )
}

/// Print images as text lines or a JSON array.
pub fn print_images(images: &[ImageFeature], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(images)?);
        return Ok(());
    }

    if images.is_empty() {
        println!("No images found.");
        return Ok(());
    }

    println!("{} image(s):", images.len());
    for feature in images {
        println!("  {}", format_feature(feature));
    }
    Ok(())
}
