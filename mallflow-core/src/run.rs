//! Sequential and parallel analysis drivers.
//!
//! Scanning one trajectory is a pure unit of work with no shared mutable
//! state, so the parallel driver only changes scheduling: partial results
//! flow through the same commutative fold as the sequential path, and the
//! final totals are independent of worker completion order.

use std::path::{Path, PathBuf};

use log::{info, warn};
use rayon::prelude::*;

use crate::Error;
use crate::aggregate::{Totals, TrajectoryResult};
use crate::loading::{decode_gpx_file, gpx_files_in_dir};
use crate::model::Corridor;
use crate::scan::scan_trajectory;

/// Scheduling of the per-trajectory scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
}

/// Analyzes every `*.gpx` trajectory in a directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be read. Individual trajectory
/// failures never abort the batch (see [`analyze_files`]).
pub fn analyze_directory(
    dir: &Path,
    corridor: &Corridor,
    mode: ExecutionMode,
) -> Result<Totals, Error> {
    let files = gpx_files_in_dir(dir)?;
    info!(
        "Analyzing {} trajectory files in {}",
        files.len(),
        dir.display()
    );
    Ok(analyze_files(&files, corridor, mode))
}

/// Analyzes the given trajectory files.
///
/// A file that fails to decode is skipped with a diagnostic and does not
/// count as a trip; the rest of the batch continues.
pub fn analyze_files(files: &[PathBuf], corridor: &Corridor, mode: ExecutionMode) -> Totals {
    match mode {
        ExecutionMode::Sequential => {
            let mut totals = Totals::new();
            for path in files {
                if let Some(result) = scan_file(path, corridor) {
                    totals.fold(result);
                }
            }
            totals
        }
        ExecutionMode::Parallel => files
            .par_iter()
            .filter_map(|path| scan_file(path, corridor))
            .fold(Totals::new, |mut totals, result| {
                totals.fold(result);
                totals
            })
            .reduce(Totals::new, |mut left, right| {
                left.merge(right);
                left
            }),
    }
}

fn scan_file(path: &Path, corridor: &Corridor) -> Option<TrajectoryResult> {
    match decode_gpx_file(path) {
        Ok(positions) => Some(scan_trajectory(&positions, corridor)),
        Err(e) => {
            warn!("Skipping trajectory {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::CrossingKey;
    use crate::loading::config::{BoundsConfig, CorridorConfig, LandmarkConfig};
    use crate::model::Direction;

    fn corridor() -> Corridor {
        let config = CorridorConfig {
            name: "Test Corridor".to_string(),
            landmarks: vec![
                LandmarkConfig {
                    name: "Grant".to_string(),
                    lat: 45.0,
                    lon: -93.0,
                },
                LandmarkConfig {
                    name: "Alice".to_string(),
                    lat: 45.00108,
                    lon: -93.0,
                },
            ],
            bounds: BoundsConfig {
                min_lat: 44.99,
                max_lat: 45.01,
                min_lon: -93.01,
                max_lon: -92.99,
            },
            ..CorridorConfig::default()
        };
        Corridor::new(config).unwrap()
    }

    fn write_gpx(dir: &Path, name: &str, points: &[(f64, f64, &str)]) -> PathBuf {
        let mut body = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <gpx version=\"1.1\" creator=\"mallflow-tests\" \
             xmlns=\"http://www.topografix.com/GPX/1/1\">\n<trk><trkseg>\n",
        );
        for (lat, lon, time) in points {
            body.push_str(&format!(
                "<trkpt lat=\"{lat}\" lon=\"{lon}\"><time>{time}</time></trkpt>\n"
            ));
        }
        body.push_str("</trkseg></trk>\n</gpx>\n");

        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn alice_inbound() -> CrossingKey {
        CrossingKey {
            direction: Direction::Inbound,
            landmark: 1,
        }
    }

    #[test]
    fn parallel_totals_equal_sequential_totals() {
        let dir = tempfile::tempdir().unwrap();
        // fast traverse: crossing, no stop
        write_gpx(
            dir.path(),
            "fast.gpx",
            &[
                (45.0, -93.0, "2024-05-01T12:00:00Z"),
                (45.00108, -93.0, "2024-05-01T12:00:40Z"),
            ],
        );
        // slow traverse: crossing and stop
        write_gpx(
            dir.path(),
            "slow.gpx",
            &[
                (45.0, -93.0, "2024-05-01T13:00:00Z"),
                (45.00108, -93.0, "2024-05-01T13:05:00Z"),
            ],
        );

        let corridor = corridor();
        let sequential =
            analyze_directory(dir.path(), &corridor, ExecutionMode::Sequential).unwrap();
        let parallel = analyze_directory(dir.path(), &corridor, ExecutionMode::Parallel).unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(parallel.trip_count(), 2);
        assert_eq!(parallel.crossings(alice_inbound()), 2);
        assert_eq!(parallel.stops(alice_inbound()), 1);
    }

    #[test]
    fn trajectory_outside_the_area_still_counts_as_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_gpx(
            dir.path(),
            "elsewhere.gpx",
            &[
                (44.5, -93.0, "2024-05-01T12:00:00Z"),
                (44.5001, -93.0, "2024-05-01T12:00:40Z"),
            ],
        );

        let totals =
            analyze_directory(dir.path(), &corridor(), ExecutionMode::Sequential).unwrap();
        assert_eq!(totals.trip_count(), 1);
        assert_eq!(totals.crossings(alice_inbound()), 0);
    }

    #[test]
    fn undecodable_file_is_skipped_and_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        write_gpx(
            dir.path(),
            "good.gpx",
            &[
                (45.0, -93.0, "2024-05-01T12:00:00Z"),
                (45.00108, -93.0, "2024-05-01T12:00:40Z"),
            ],
        );
        std::fs::write(dir.path().join("broken.gpx"), "definitely not xml").unwrap();

        let corridor = corridor();
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            let totals = analyze_directory(dir.path(), &corridor, mode).unwrap();
            assert_eq!(totals.trip_count(), 1);
            assert_eq!(totals.crossings(alice_inbound()), 1);
        }
    }

    #[test]
    fn missing_directory_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(analyze_directory(&missing, &corridor(), ExecutionMode::Sequential).is_err());
    }
}
