//! Great-circle distance helpers for route geometry.

use crate::models::RoutePoint;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two points in meters (Haversine formula).
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Total length of a polyline in meters, summed leg by leg.
pub fn route_length_m(route: &[RoutePoint]) -> f64 {
    route
        .windows(2)
        .map(|leg| haversine_distance(leg[0].lat, leg[0].lon, leg[1].lat, leg[1].lon))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Test known distance: approx 111km per degree of latitude
        let dist = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111_195.0).abs() < 1000.0);
    }

    #[test]
    fn test_route_length_sums_legs() {
        let direct = [RoutePoint::new(0.0, 0.0), RoutePoint::new(2.0, 0.0)];
        let dogleg = [
            RoutePoint::new(0.0, 0.0),
            RoutePoint::new(1.0, 0.5),
            RoutePoint::new(2.0, 0.0),
        ];

        assert!(route_length_m(&dogleg) > route_length_m(&direct));
        assert_eq!(route_length_m(&direct[..1]), 0.0);
        assert_eq!(route_length_m(&[]), 0.0);
    }
}
