//! Great-circle distance between geographic coordinates

use crate::campus::Coordinates;
use crate::graph::types::Meters;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance between two points in meters.
///
/// Symmetric, zero for identical points and never negative. A* uses it as
/// its admissible estimate and the route formatter as the straight-line figure.
pub fn haversine_distance(a: Coordinates, b: Coordinates) -> Meters {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding can push h marginally outside [0, 1]
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    Meters::new((EARTH_RADIUS_METERS * c).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_zero_for_identical_points() {
        let p = Coordinates::new(13.2215, 77.7545);
        assert_eq!(haversine_distance(p, p).value(), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinates::new(13.2215, 77.7545);
        let b = Coordinates::new(13.2225, 77.7558);
        assert_eq!(
            haversine_distance(a, b).value(),
            haversine_distance(b, a).value()
        );
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 0.0);
        // 2 * pi * R / 360
        assert!(approx(haversine_distance(a, b).value(), 111_194.9, 1.0));
    }

    #[test]
    fn test_campus_scale_distance() {
        // Main Gate to Admin Office on the bundled campus
        let a = Coordinates::new(13.2215, 77.7545);
        let b = Coordinates::new(13.2220, 77.7554);
        assert!(approx(haversine_distance(a, b).value(), 112.2, 0.5));
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        let d = haversine_distance(a, b).value();
        assert!(d.is_finite());
        assert!(approx(d, std::f64::consts::PI * EARTH_RADIUS_METERS, 1.0));
    }
}
