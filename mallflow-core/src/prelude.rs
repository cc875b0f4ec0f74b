// Re-export key components
pub use crate::aggregate::{CrossingKey, Totals, TrajectoryResult};
pub use crate::loading::{CorridorConfig, decode_gpx_file, gpx_files_in_dir};
pub use crate::report::CorridorReport;
pub use crate::run::{ExecutionMode, analyze_directory, analyze_files};
pub use crate::scan::scan_trajectory;

// Core model types
pub use crate::model::{Corridor, Direction, Landmark, Position};

pub use crate::Count;
pub use crate::Error;
pub use crate::LandmarkId;
