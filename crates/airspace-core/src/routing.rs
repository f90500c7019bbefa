//! Route synthesis between origin and destination airports.

use crate::models::{Airport, FlightStatus, RoutePoint};
use rand::Rng;

/// Maximum offset (degrees) applied to each axis of a reroute waypoint.
pub const REROUTE_JITTER_DEG: f64 = 0.5;

/// Build the polyline for a flight.
///
/// - Either endpoint unresolved: `[(0,0), (0,0)]`
/// - Rerouted: origin, jittered midpoint, destination
/// - Otherwise: straight origin to destination
///
/// Only the rerouted branch consumes randomness (latitude offset first).
pub fn synthesize<R: Rng + ?Sized>(
    origin: Option<&Airport>,
    destination: Option<&Airport>,
    status: FlightStatus,
    rng: &mut R,
) -> Vec<RoutePoint> {
    let (Some(origin), Some(destination)) = (origin, destination) else {
        return vec![RoutePoint::ORIGIN, RoutePoint::ORIGIN];
    };

    let start = origin.position();
    let end = destination.position();

    match status {
        FlightStatus::Rerouted => {
            let mid_lat = (start.lat + end.lat) / 2.0
                + rng.random_range(-REROUTE_JITTER_DEG..REROUTE_JITTER_DEG);
            let mid_lon = (start.lon + end.lon) / 2.0
                + rng.random_range(-REROUTE_JITTER_DEG..REROUTE_JITTER_DEG);
            vec![start, RoutePoint::new(mid_lat, mid_lon), end]
        }
        FlightStatus::OnTime | FlightStatus::Delayed => vec![start, end],
    }
}
