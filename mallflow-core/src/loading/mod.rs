//! This module is responsible for loading trajectory data (GPX) and the
//! corridor configuration the scanner runs against.

pub mod config;
mod discover;
pub mod gpx;

pub use config::CorridorConfig;
pub use discover::gpx_files_in_dir;
pub use gpx::{decode_gpx, decode_gpx_file};
