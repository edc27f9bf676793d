//! Virtual walker position tracking.
//!
//! Keeps the walker's map position and facing direction and applies
//! incremental movement commands to it.
//!
//! # Movement Model
//!
//! Planar dead reckoning in degree space:
//!
//! ```text
//! Δlat = cos(bearing) × STEP_SIZE
//! Δlng = sin(bearing) × STEP_SIZE
//! ```
//!
//! Bearing 0° points along +lat (north), 90° along +lng (east). There is no
//! correction for longitude compression away from the equator, and bearing
//! is never wrapped; it may go negative or past 360° after repeated turns.
//!
//! # Example
//!
//! ```ignore
//! use streetwalk::walker::{Direction, WalkerPositionStore};
//!
//! let store = WalkerPositionStore::new();
//! store.step(Direction::TurnRight);
//! let state = store.step(Direction::Forward);
//! println!("{:.6}, {:.6} facing {}°", state.lat, state.lng, state.bearing);
//! ```

mod direction;
mod error;
mod state;
mod store;

pub use direction::Direction;
pub use error::WalkerError;
pub use state::{PositionState, DEFAULT_BEARING, DEFAULT_LAT, DEFAULT_LNG, STEP_SIZE, TURN_SIZE};
pub use store::WalkerPositionStore;
