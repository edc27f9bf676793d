//! Mapillary image metadata queries
//!
//! This module fetches image features near a point from the Mapillary Graph
//! API. A query is turned into an axis-aligned bounding box in degree units
//! and sent as a single GET request; the `data` array of the response is
//! returned as [`ImageFeature`] records.
//!
//! # Endpoint
//!
//! `GET https://graph.mapillary.com/images?fields=...&bbox=w,s,e,n&limit=N&access_token=...`
//!
//! # Failure Semantics
//!
//! There is no retry, caching, or request deduplication. Every failure is
//! logged once and returned to the caller unchanged.
//!
//! ```ignore
//! use streetwalk::imagery::{ImageryClient, NearbyQuery, ReqwestClient};
//!
//! let client = ImageryClient::new(ReqwestClient::new()?, config);
//! let images = client
//!     .fetch_nearby_images(&NearbyQuery::new(-29.378889, -50.876111).with_limit(10))
//!     .await?;
//! ```

mod bbox;
mod client;
mod error;
mod feature;
mod http;
mod query;

pub use bbox::BoundingBox;
pub use client::{ImageryClient, IMAGE_FIELDS};
pub use error::ImageryError;
pub use feature::{nearest_feature, ImageFeature, PointGeometry};
pub use http::{AsyncHttpClient, HttpResponse, ReqwestClient};
pub use query::{NearbyQuery, DEFAULT_LIMIT, DEFAULT_RADIUS_DEG};

#[cfg(test)]
pub use http::tests::MockHttpClient;
