//! Axis-aligned bounding boxes in degree units.

use std::fmt;

/// A rectangular lat/lng region used to filter image results.
///
/// Edges are plain degree offsets from a center point. Nothing is clamped:
/// a box near the antimeridian or a pole may extend past ±180° / ±90°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Builds the box spanning `radius` degrees on each side of a center.
    ///
    /// The radius is applied identically to latitude and longitude, so the
    /// box gets narrower in meters as latitude increases.
    pub fn around(lat: f64, lng: f64, radius: f64) -> Self {
        Self {
            west: lng - radius,
            south: lat - radius,
            east: lng + radius,
            north: lat + radius,
        }
    }

    /// The `bbox` query parameter value: `west,south,east,north`.
    pub fn to_query_value(&self) -> String {
        self.to_string()
    }

    /// Returns true if the point lies inside the box (edges included).
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.south..=self.north).contains(&lat) && (self.west..=self.east).contains(&lng)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_around_gramado() {
        let bbox = BoundingBox::around(-29.378889, -50.876111, 0.005);
        assert_eq!(bbox.west, -50.876111 - 0.005);
        assert_eq!(bbox.east, -50.876111 + 0.005);
        assert_eq!(bbox.south, -29.378889 - 0.005);
        assert_eq!(bbox.north, -29.378889 + 0.005);
    }

    #[test]
    fn test_query_value_order() {
        let bbox = BoundingBox {
            west: 1.5,
            south: -2.0,
            east: 3.25,
            north: 4.0,
        };
        assert_eq!(bbox.to_query_value(), "1.5,-2,3.25,4");
    }

    #[test]
    fn test_no_clamping_at_antimeridian() {
        let bbox = BoundingBox::around(89.999, 179.999, 0.01);
        assert!(bbox.east > 180.0);
        assert!(bbox.north > 90.0);
    }

    #[test]
    fn test_contains_center_and_edges() {
        let bbox = BoundingBox::around(10.0, 20.0, 1.0);
        assert!(bbox.contains(10.0, 20.0));
        assert!(bbox.contains(9.0, 21.0));
        assert!(!bbox.contains(11.5, 20.0));
        assert!(!bbox.contains(10.0, 18.9));
    }

    proptest! {
        #[test]
        fn prop_edges_are_center_plus_minus_radius(
            lat in -90.0f64..90.0,
            lng in -180.0f64..180.0,
            radius in 0.0001f64..1.0,
        ) {
            let bbox = BoundingBox::around(lat, lng, radius);
            prop_assert!(bbox.west < bbox.east);
            prop_assert!(bbox.south < bbox.north);
            prop_assert_eq!(bbox.west, lng - radius);
            prop_assert_eq!(bbox.east, lng + radius);
            prop_assert_eq!(bbox.south, lat - radius);
            prop_assert_eq!(bbox.north, lat + radius);
        }

        #[test]
        fn prop_box_contains_its_center(
            lat in -90.0f64..90.0,
            lng in -180.0f64..180.0,
            radius in 0.0001f64..1.0,
        ) {
            prop_assert!(BoundingBox::around(lat, lng, radius).contains(lat, lng));
        }
    }
}
