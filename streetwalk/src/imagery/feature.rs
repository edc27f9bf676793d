//! Image feature records returned by the Graph API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single geotagged image metadata record.
///
/// Only the fields requested by [`IMAGE_FIELDS`](super::IMAGE_FIELDS) are
/// modeled; anything else in the payload is ignored. Apart from `id`, every
/// field is optional because the service omits fields it has no value for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFeature {
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PointGeometry>,

    #[serde(
        default,
        deserialize_with = "optional_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sequence: Option<String>,

    /// Capture time in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<i64>,

    #[serde(
        default,
        deserialize_with = "optional_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub creator_id: Option<String>,
}

/// GeoJSON point. Coordinates are `[longitude, latitude]`, optionally
/// followed by altitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

impl ImageFeature {
    /// Image location as (lat, lng), if the record carries a usable geometry.
    pub fn location(&self) -> Option<(f64, f64)> {
        match self.geometry.as_ref()?.coordinates.as_slice() {
            [lng, lat, ..] => Some((*lat, *lng)),
            _ => None,
        }
    }

    /// Capture timestamp as a UTC datetime.
    pub fn captured_time(&self) -> Option<DateTime<Utc>> {
        self.captured_at
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

/// Picks the feature closest to a point.
///
/// Distance is planar in degrees, which matches how the walker moves.
/// Features without a geometry are skipped.
pub fn nearest_feature(features: &[ImageFeature], lat: f64, lng: f64) -> Option<&ImageFeature> {
    features
        .iter()
        .filter_map(|f| {
            let (flat, flng) = f.location()?;
            let dlat = flat - lat;
            let dlng = flng - lng;
            Some((f, dlat * dlat + dlng * dlng))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(f, _)| f)
}

/// Identifiers are strings on the wire, but tolerate bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(RawId::into_string)
}

fn optional_id_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?.map(RawId::into_string))
}
