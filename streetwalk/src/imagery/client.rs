//! Mapillary Graph API client.

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::error::ImageryError;
use super::feature::ImageFeature;
use super::http::{AsyncHttpClient, ReqwestClient};
use super::query::NearbyQuery;
use crate::config::ImageryConfig;

/// Fields requested for every image.
pub const IMAGE_FIELDS: &str = "id,geometry,sequence,captured_at,creator_id";

/// Response envelope of `GET /images`.
///
/// Entries stay untyped here so one unexpected record cannot sink the rest.
#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

/// Client for image metadata queries.
///
/// Generic over the HTTP transport so tests can substitute a mock.
///
/// # Example
///
/// ```no_run
/// use streetwalk::config::ImageryConfig;
/// use streetwalk::imagery::{ImageryClient, NearbyQuery, ReqwestClient};
///
/// # async fn run() -> Result<(), streetwalk::imagery::ImageryError> {
/// let client = ImageryClient::new(ReqwestClient::new()?, ImageryConfig::new("MLY|..."));
/// let images = client
///     .fetch_nearby_images(&NearbyQuery::new(-29.378889, -50.876111))
///     .await?;
/// println!("{} images nearby", images.len());
/// # Ok(())
/// # }
/// ```
pub struct ImageryClient<C: AsyncHttpClient> {
    http_client: C,
    config: ImageryConfig,
}

impl ImageryClient<ReqwestClient> {
    /// Creates a client backed by reqwest with no request timeout.
    pub fn from_config(config: ImageryConfig) -> Result<Self, ImageryError> {
        Ok(Self::new(ReqwestClient::new()?, config))
    }
}

impl<C: AsyncHttpClient> ImageryClient<C> {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP transport
    /// * `config` - Access token and API root
    pub fn new(http_client: C, config: ImageryConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// The raw access token, for components that talk to Mapillary directly
    /// (for example an embedded image viewer).
    pub fn access_token(&self) -> &str {
        self.config.access_token.as_str()
    }

    /// Fetches images inside the query's bounding box.
    ///
    /// Issues exactly one request. A success response without a `data`
    /// array yields an empty list. Failures are logged and returned as-is.
    pub async fn fetch_nearby_images(
        &self,
        query: &NearbyQuery,
    ) -> Result<Vec<ImageFeature>, ImageryError> {
        let result = self.request_images(query).await;

        match &result {
            Ok(images) => debug!(count = images.len(), "Fetched nearby images"),
            Err(e) => error!(error = %e, "Error fetching Mapillary images"),
        }

        result
    }

    /// Fetches images around a point with the default radius and limit.
    pub async fn fetch_nearby_images_around(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ImageFeature>, ImageryError> {
        self.fetch_nearby_images(&NearbyQuery::new(lat, lng)).await
    }

    async fn request_images(&self, query: &NearbyQuery) -> Result<Vec<ImageFeature>, ImageryError> {
        let url = self.build_url(query)?;
        debug!(bbox = %query.bounding_box(), limit = query.limit, "Requesting nearby images");

        let response = self.http_client.get(url.as_str()).await?;

        if !response.is_success() {
            return Err(ImageryError::Remote {
                status: response.status,
                body: response.text(),
            });
        }

        parse_images(&response.body)
    }

    /// Builds the `/images` request URL.
    ///
    /// Parameter order is fixed: `fields`, `bbox`, `limit`, `access_token`.
    fn build_url(&self, query: &NearbyQuery) -> Result<Url, ImageryError> {
        let endpoint = format!("{}/images", self.config.base_url.trim_end_matches('/'));

        Url::parse_with_params(
            &endpoint,
            &[
                ("fields", IMAGE_FIELDS.to_string()),
                ("bbox", query.bounding_box().to_query_value()),
                ("limit", query.limit.to_string()),
                ("access_token", self.access_token().to_string()),
            ],
        )
        .map_err(|e| ImageryError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }
}

/// Extracts the `data` array of an `/images` response body.
///
/// Only a body that is not the expected JSON document is an error. Entries
/// that do not look like image records are skipped with a warning.
fn parse_images(body: &[u8]) -> Result<Vec<ImageFeature>, ImageryError> {
    let response: ImagesResponse =
        serde_json::from_slice(body).map_err(|e| ImageryError::Decode(e.to_string()))?;

    let images: Vec<ImageFeature> = response
        .data
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<ImageFeature>(entry) {
            Ok(feature) => Some(feature),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable image record");
                None
            }
        })
        .collect();

    Ok(images)
}
