//! Corridor components - landmarks and trajectory samples

use chrono::{DateTime, Utc};
use geo::Point;

/// Named intersection along the corridor
#[derive(Debug, Clone)]
pub struct Landmark {
    /// Display name of the intersection
    pub name: String,
    /// Intersection coordinates
    pub geometry: Point<f64>,
}

/// Single timestamped sample of a recorded trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Sample coordinates
    pub geometry: Point<f64>,
    /// Recording timestamp; non-decreasing within a trajectory
    pub time: DateTime<Utc>,
}
