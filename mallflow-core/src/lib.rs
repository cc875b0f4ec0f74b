//! Batch analytics for recorded vehicle trajectories along a fixed street
//! corridor.
//!
//! The library ingests ordered position sequences (decoded from GPX files),
//! detects proximity events to the corridor's named intersections, classifies
//! crossings by direction of travel, flags crossings made below the stop
//! threshold, and aggregates per-trajectory results into run-wide totals.
//! Scanning one trajectory is a pure unit of work, so the aggregation step
//! accepts partial results in any order and the parallel driver produces
//! totals identical to the sequential one.

pub mod aggregate;
pub mod error;
pub mod kinematics;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod report;
pub mod run;
pub mod scan;

pub use error::Error;
pub use model::{Corridor, Direction, Landmark, Position};

/// Index of a landmark in the corridor's fixed table
pub type LandmarkId = usize;

/// Event counter
pub type Count = u64;
