//! Parameters of a nearby-images query.

use super::bbox::BoundingBox;

/// Default search radius in degrees (roughly 550 m of latitude).
pub const DEFAULT_RADIUS_DEG: f64 = 0.005;

/// Default cap on the number of returned images.
pub const DEFAULT_LIMIT: u32 = 100;

/// A request for images around a center point.
///
/// Coordinates are not validated; the caller is responsible for passing
/// sensible degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    /// Half-width of the bounding box, in degrees.
    pub radius: f64,
    /// Maximum number of images the service should return.
    pub limit: u32,
}

impl NearbyQuery {
    /// Creates a query with the default radius and limit.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            radius: DEFAULT_RADIUS_DEG,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the search radius in degrees.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Bounding box covered by this query.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.lat, self.lng, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = NearbyQuery::new(1.0, 2.0);
        assert_eq!(query.radius, 0.005);
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn test_builder() {
        let query = NearbyQuery::new(1.0, 2.0).with_radius(0.01).with_limit(5);
        assert_eq!(query.radius, 0.01);
        assert_eq!(query.limit, 5);
        assert_eq!(query.bounding_box(), BoundingBox::around(1.0, 2.0, 0.01));
    }
}
