//! Streetwalk - street-level imagery lookup for a virtual walker
//!
//! This library provides the two building blocks of a street-level explorer:
//!
//! - [`imagery`]: queries the Mapillary Graph API for geotagged images inside
//!   a bounding box around a point.
//! - [`walker`]: a position/bearing store updated by directional commands
//!   using planar dead reckoning.
//!
//! The two components never call each other. A host application composes
//! them by feeding the walker's position into an imagery query:
//!
//! ```ignore
//! use streetwalk::config::ImageryConfig;
//! use streetwalk::imagery::{ImageryClient, NearbyQuery, ReqwestClient};
//! use streetwalk::walker::{Direction, WalkerPositionStore};
//!
//! let store = WalkerPositionStore::new();
//! store.step(Direction::Forward);
//!
//! let client = ImageryClient::new(ReqwestClient::new()?, ImageryConfig::from_env());
//! let here = store.snapshot();
//! let images = client
//!     .fetch_nearby_images(&NearbyQuery::new(here.lat, here.lng))
//!     .await?;
//! ```

pub mod config;
pub mod imagery;
pub mod logging;
pub mod walker;
