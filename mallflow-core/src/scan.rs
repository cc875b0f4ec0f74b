//! Single-pass trajectory scanner.
//!
//! Consumes one ordered position sequence and produces the trajectory's
//! crossing and stop counts. Correctness depends on input order: the scanner
//! pairs each in-corridor point with the previous in-corridor point for the
//! speed estimate and tracks the last landmark seen to classify transitions.

use crate::aggregate::{CrossingKey, TrajectoryResult};
use crate::kinematics::{planar_distance_meters, speed_kmh};
use crate::model::{Corridor, Position};
use crate::LandmarkId;

/// Scanner state, owned by one invocation and discarded with it.
#[derive(Debug, Default)]
struct ScanState {
    previous: Option<Position>,
    last_landmark: Option<LandmarkId>,
}

/// Scans one trajectory against the corridor.
///
/// Points outside the area of interest are skipped entirely: they update no
/// state and never enter speed calculations, so a gap of outside points does
/// not break the pairing between the surrounding inside points.
///
/// The landmark loop runs over the full table in configuration order and
/// does not stop at the first proximity hit. When a point is within radius
/// of several landmarks the last one in table order wins, which is the
/// documented tie-break for the transition tracking.
pub fn scan_trajectory(positions: &[Position], corridor: &Corridor) -> TrajectoryResult {
    let mut state = ScanState::default();
    let mut result = TrajectoryResult::default();

    for position in positions {
        if !corridor.contains(&position.geometry) {
            continue;
        }

        let speed = state.previous.as_ref().map(|prev| speed_kmh(prev, position));

        for (id, landmark) in corridor.landmarks().iter().enumerate() {
            let distance = planar_distance_meters(&position.geometry, &landmark.geometry);
            if distance < corridor.proximity_radius_m() {
                if let Some(last) = state.last_landmark
                    && last != id
                {
                    let direction = corridor.direction_between(last, id);
                    let key = CrossingKey {
                        direction,
                        landmark: id,
                    };
                    let stopped = speed.is_some_and(|s| s < corridor.stop_threshold_kmh());
                    result.record(key, stopped);
                }
                state.last_landmark = Some(id);
            }
        }

        state.previous = Some(*position);
    }

    result
}
