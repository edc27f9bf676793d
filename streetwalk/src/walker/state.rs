//! Walker position record and movement math.

use super::direction::Direction;

/// Distance of one forward/backward step, in degrees (~11 m of latitude).
pub const STEP_SIZE: f64 = 0.0001;

/// Rotation of one turn command, in degrees.
pub const TURN_SIZE: f64 = 15.0;

/// Default start: Gramado bus station (Rodoviária de Gramado), Brazil.
pub const DEFAULT_LAT: f64 = -29.378889;
pub const DEFAULT_LNG: f64 = -50.876111;

/// Default heading: east.
pub const DEFAULT_BEARING: f64 = 90.0;

/// Position and heading of the walker.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionState {
    pub lat: f64,
    pub lng: f64,
    /// Heading in degrees. Not wrapped to [0, 360).
    pub bearing: f64,
    /// Image the walker was placed at directly, cleared by manual steps.
    pub target_image_id: Option<String>,
}

impl Default for PositionState {
    fn default() -> Self {
        Self::new(DEFAULT_LAT, DEFAULT_LNG, DEFAULT_BEARING)
    }
}

impl PositionState {
    /// Create a state with no target image.
    pub fn new(lat: f64, lng: f64, bearing: f64) -> Self {
        Self {
            lat,
            lng,
            bearing,
            target_image_id: None,
        }
    }

    /// Apply one movement command in place.
    pub fn apply(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => {
                let (dlat, dlng) = self.step_delta();
                self.lat += dlat;
                self.lng += dlng;
                self.target_image_id = None;
            }
            Direction::Backward => {
                let (dlat, dlng) = self.step_delta();
                self.lat -= dlat;
                self.lng -= dlng;
                self.target_image_id = None;
            }
            Direction::TurnLeft => self.bearing -= TURN_SIZE,
            Direction::TurnRight => self.bearing += TURN_SIZE,
        }
    }

    /// Bearing folded into [0, 360) for display. The stored value is untouched.
    pub fn normalized_bearing(&self) -> f64 {
        self.bearing.rem_euclid(360.0)
    }

    /// (Δlat, Δlng) of one forward step at the current bearing.
    fn step_delta(&self) -> (f64, f64) {
        let rad = self.bearing.to_radians();
        (rad.cos() * STEP_SIZE, rad.sin() * STEP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn with_target(mut state: PositionState) -> PositionState {
        state.target_image_id = Some("img-1".to_string());
        state
    }

    #[test]
    fn test_default_is_gramado_facing_east() {
        let state = PositionState::default();
        assert_eq!(state.lat, -29.378889);
        assert_eq!(state.lng, -50.876111);
        assert_eq!(state.bearing, 90.0);
        assert!(state.target_image_id.is_none());
    }

    #[test]
    fn test_five_right_turns() {
        let mut state = PositionState::default();
        for _ in 0..5 {
            state.apply(Direction::TurnRight);
        }
        assert_eq!(state.bearing, 165.0);
    }

    #[test]
    fn test_left_turn_does_not_wrap() {
        let mut state = PositionState::new(0.0, 0.0, 0.0);
        state.apply(Direction::TurnLeft);
        assert_eq!(state.bearing, -15.0);
    }

    #[test]
    fn test_turns_keep_position_and_target() {
        let mut state = with_target(PositionState::default());
        state.apply(Direction::TurnLeft);
        state.apply(Direction::TurnRight);
        assert_eq!(state.lat, DEFAULT_LAT);
        assert_eq!(state.lng, DEFAULT_LNG);
        assert_eq!(state.target_image_id.as_deref(), Some("img-1"));
    }

    #[test]
    fn test_forward_facing_east_moves_only_lng() {
        let mut state = with_target(PositionState::default());
        state.apply(Direction::Forward);

        assert!((state.lat - DEFAULT_LAT).abs() < EPSILON);
        assert!((state.lng - (DEFAULT_LNG + STEP_SIZE)).abs() < EPSILON);
        assert!(state.target_image_id.is_none());
    }

    #[test]
    fn test_forward_facing_north_moves_only_lat() {
        let mut state = PositionState::new(10.0, 20.0, 0.0);
        state.apply(Direction::Forward);
        assert!((state.lat - 10.0001).abs() < EPSILON);
        assert!((state.lng - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_backward_facing_east_moves_west() {
        let mut state = PositionState::default();
        state.apply(Direction::Backward);
        assert!((state.lng - (DEFAULT_LNG - STEP_SIZE)).abs() < EPSILON);
    }

    #[test]
    fn test_forward_then_backward_returns_and_clears_target() {
        let mut state = with_target(PositionState::new(-29.378889, -50.876111, 37.0));
        state.apply(Direction::Forward);
        assert!(state.target_image_id.is_none());

        state.target_image_id = Some("img-2".to_string());
        state.apply(Direction::Backward);
        assert!(state.target_image_id.is_none());

        assert!((state.lat - -29.378889).abs() < EPSILON);
        assert!((state.lng - -50.876111).abs() < EPSILON);
    }

    #[test]
    fn test_normalized_bearing() {
        assert_eq!(PositionState::new(0.0, 0.0, -15.0).normalized_bearing(), 345.0);
        assert_eq!(PositionState::new(0.0, 0.0, 375.0).normalized_bearing(), 15.0);
        assert_eq!(PositionState::new(0.0, 0.0, 360.0).normalized_bearing(), 0.0);
        assert_eq!(PositionState::new(0.0, 0.0, 90.0).normalized_bearing(), 90.0);
    }
}
