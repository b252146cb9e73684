use serde::{Deserialize, Serialize};

/// A geographical coordinate in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A rectangular geographic region given by its southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self { south_west, north_east }
    }

    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Returns the closest point inside the bounds.
    pub fn clamp(&self, point: LatLng) -> LatLng {
        LatLng::new(
            point.lat.clamp(self.south_west.lat, self.north_east.lat),
            point.lng.clamp(self.south_west.lng, self.north_east.lng),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: LatLngBounds =
        LatLngBounds::new(LatLng::new(18.5280, 73.8590), LatLng::new(18.5335, 73.8650));

    #[test]
    fn contains_interior_point() {
        assert!(BOUNDS.contains(&LatLng::new(18.5308, 73.8616)));
    }

    #[test]
    fn contains_is_corner_inclusive() {
        assert!(BOUNDS.contains(&BOUNDS.south_west));
        assert!(BOUNDS.contains(&BOUNDS.north_east));
    }

    #[test]
    fn rejects_outside_point() {
        assert!(!BOUNDS.contains(&LatLng::new(18.6000, 73.8616)));
    }

    #[test]
    fn clamp_is_identity_inside() {
        let p = LatLng::new(18.5308, 73.8616);
        assert_eq!(BOUNDS.clamp(p), p);
    }

    #[test]
    fn clamp_pulls_outside_point_to_edge() {
        let p = BOUNDS.clamp(LatLng::new(19.0, 73.0));
        assert_eq!(p, LatLng::new(18.5335, 73.8590));
        assert!(BOUNDS.contains(&p));
    }
}
