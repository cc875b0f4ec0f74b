//! Pure geometric and kinematic primitives.
//!
//! All distance computations in the crate go through
//! [`planar_distance_meters`] so that landmark proximity and speed share one
//! distance model and results stay reproducible.

use geo::{Distance, Haversine, Point};

use crate::model::Position;

/// 2-D great-circle distance in meters, ignoring elevation.
pub fn planar_distance_meters(p1: &Point<f64>, p2: &Point<f64>) -> f64 {
    Haversine.distance(*p1, *p2)
}

/// Instantaneous speed between two samples in km/h.
///
/// A zero or negative time delta signals a recording anomaly and yields
/// `f64::INFINITY`, so such a transition can never classify as a stop.
pub fn speed_kmh(from: &Position, to: &Position) -> f64 {
    let elapsed = (to.time - from.time).num_milliseconds() as f64 / 1000.0;
    if elapsed <= 0.0 {
        return f64::INFINITY;
    }
    planar_distance_meters(&from.geometry, &to.geometry) / elapsed * 3.6
}
