//! Shared walker state container.

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::direction::Direction;
use super::error::WalkerError;
use super::state::PositionState;

/// Owns the walker's [`PositionState`] and serializes every mutation.
///
/// Readers get immutable snapshots, either on demand with
/// [`snapshot`](Self::snapshot) or pushed through a watch channel from
/// [`subscribe`](Self::subscribe). The lock makes concurrent `step` calls
/// from several tasks safe; each command is applied atomically.
#[derive(Debug)]
pub struct WalkerPositionStore {
    state: Mutex<PositionState>,
    updates: watch::Sender<PositionState>,
}

impl Default for WalkerPositionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkerPositionStore {
    /// Create a store at the default start position.
    pub fn new() -> Self {
        Self::with_state(PositionState::default())
    }

    /// Create a store starting from the given state.
    pub fn with_state(initial: PositionState) -> Self {
        let (updates, _) = watch::channel(initial.clone());
        Self {
            state: Mutex::new(initial),
            updates,
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PositionState {
        self.state.lock().clone()
    }

    /// Apply a movement command and return the resulting state.
    pub fn step(&self, direction: Direction) -> PositionState {
        self.mutate(|state| state.apply(direction), |state| {
            debug!(
                %direction,
                lat = state.lat,
                lng = state.lng,
                bearing = state.bearing,
                "Walker moved"
            );
        })
    }

    /// Parse a command name (`up`, `down`, `left`, `right`) and apply it.
    ///
    /// Unknown names are rejected and leave the state unchanged.
    pub fn step_str(&self, direction: &str) -> Result<PositionState, WalkerError> {
        let direction: Direction = direction.parse().inspect_err(|e| {
            warn!(error = %e, "Ignoring walker command");
        })?;
        Ok(self.step(direction))
    }

    /// Jump directly to an image location, keeping the current bearing.
    pub fn teleport(&self, image_id: impl Into<String>, lat: f64, lng: f64) -> PositionState {
        let image_id = image_id.into();
        self.mutate(
            |state| {
                state.lat = lat;
                state.lng = lng;
                state.target_image_id = Some(image_id);
            },
            |state| {
                debug!(
                    image_id = state.target_image_id.as_deref().unwrap_or_default(),
                    lat = state.lat,
                    lng = state.lng,
                    "Walker teleported"
                );
            },
        )
    }

    /// Receive every state published after a mutation.
    ///
    /// The receiver starts out holding the current state.
    ///
    /// Mutations publish while holding the channel's write lock, so the
    /// guard returned by `Receiver::borrow` must not be held across a call
    /// to [`step`](Self::step), [`step_str`](Self::step_str) or
    /// [`teleport`](Self::teleport) on the same thread; that deadlocks.
    /// Clone the value out of the guard first.
    pub fn subscribe(&self) -> watch::Receiver<PositionState> {
        self.updates.subscribe()
    }

    fn mutate<F, L>(&self, change: F, log: L) -> PositionState
    where
        F: FnOnce(&mut PositionState),
        L: FnOnce(&PositionState),
    {
        let mut state = self.state.lock();
        change(&mut state);
        let snapshot = state.clone();
        // Publish under the lock so subscribers see updates in apply order
        self.updates.send_replace(snapshot.clone());
        drop(state);

        log(&snapshot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::{DEFAULT_LAT, STEP_SIZE};
    use std::sync::Arc;

    #[test]
    fn test_new_store_has_default_state() {
        let store = WalkerPositionStore::new();
        assert_eq!(store.snapshot(), PositionState::default());
    }

    #[test]
    fn test_step_returns_and_stores_new_state() {
        let store = WalkerPositionStore::new();
        let returned = store.step(Direction::TurnRight);
        assert_eq!(returned.bearing, 105.0);
        assert_eq!(store.snapshot(), returned);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = WalkerPositionStore::new();
        let before = store.snapshot();
        store.step(Direction::Forward);
        assert_eq!(before, PositionState::default());
        assert_ne!(store.snapshot(), before);
    }

    #[test]
    fn test_step_str_parses_commands() {
        let store = WalkerPositionStore::with_state(PositionState::new(0.0, 0.0, 0.0));
        store.step_str("left").unwrap();
        assert_eq!(store.snapshot().bearing, -15.0);
    }

    #[test]
    fn test_step_str_rejects_unknown_without_change() {
        let store = WalkerPositionStore::new();
        let err = store.step_str("sideways").unwrap_err();
        assert_eq!(err, WalkerError::UnknownDirection("sideways".to_string()));
        assert_eq!(store.snapshot(), PositionState::default());
    }

    #[test]
    fn test_teleport_sets_target_and_keeps_bearing() {
        let store = WalkerPositionStore::new();
        store.step(Direction::TurnLeft);

        let state = store.teleport("img-42", 1.5, 2.5);
        assert_eq!(state.lat, 1.5);
        assert_eq!(state.lng, 2.5);
        assert_eq!(state.bearing, 75.0);
        assert_eq!(state.target_image_id.as_deref(), Some("img-42"));

        let moved = store.step(Direction::Forward);
        assert!(moved.target_image_id.is_none());
    }

    #[test]
    fn test_subscribers_see_updates() {
        let store = WalkerPositionStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow_and_update(), PositionState::default());

        store.step(Direction::TurnRight);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().bearing, 105.0);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_subscriber_can_step_after_cloning_borrowed_state() {
        let store = WalkerPositionStore::new();
        let rx = store.subscribe();

        let seen = rx.borrow().clone();
        let after = store.step(Direction::TurnLeft);

        assert_eq!(seen.bearing, 90.0);
        assert_eq!(after.bearing, 75.0);
        assert_eq!(rx.borrow().bearing, 75.0);
    }

    #[test]
    fn test_concurrent_steps_are_not_lost() {
        let store = Arc::new(WalkerPositionStore::with_state(PositionState::new(
            DEFAULT_LAT,
            0.0,
            0.0,
        )));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        store.step(Direction::Forward);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let expected = DEFAULT_LAT + 1000.0 * STEP_SIZE;
        assert!((store.snapshot().lat - expected).abs() < 1e-9);
    }
}
