//! Data model for the corridor under study
//!
//! Contains the static reference data (landmark table, bounding rectangle,
//! thresholds) and the trajectory sample type consumed by the scanner.

pub mod components;
pub mod corridor;

pub use components::{Landmark, Position};
pub use corridor::{Corridor, Direction};
