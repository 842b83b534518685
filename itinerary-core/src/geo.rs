//! Great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for all distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn distance_km(&self, other: &LatLng) -> f64 {
        haversine_km(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_at_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.2).abs() < 0.2, "got {d}");
    }

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(haversine_km(26.9124, 75.7873, 26.9124, 75.7873), 0.0);
    }

    #[test]
    fn test_symmetric_and_non_negative() {
        let pairs = [
            (LatLng::new(26.9124, 75.7873), LatLng::new(15.2993, 74.1240)),
            (LatLng::new(-33.8688, 151.2093), LatLng::new(51.5074, -0.1278)),
            (LatLng::new(89.9, 0.0), LatLng::new(-89.9, 180.0)),
        ];
        for (a, b) in pairs {
            let ab = a.distance_km(&b);
            let ba = b.distance_km(&a);
            assert!(ab >= 0.0);
            assert!((ab - ba).abs() < 1e-9, "{ab} vs {ba}");
        }
    }

    #[test]
    fn test_jaipur_to_delhi() {
        // Roughly 235 km as the crow flies
        let d = haversine_km(26.9124, 75.7873, 28.6139, 77.2090);
        assert!((d - 236.0).abs() < 5.0, "got {d}");
    }
}
