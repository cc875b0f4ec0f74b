//! Structured analysis report.
//!
//! The report model carries the numeric fields downstream renderers read:
//! per direction and per landmark (in table order) the crossing count, stop
//! count, and stop percentage, plus the leading trip total. Textual layout
//! lives in the renderers, not here.

mod render;
mod to_geojson;

use serde::{Deserialize, Serialize};

use crate::Count;
use crate::aggregate::{CrossingKey, Totals};
use crate::model::{Corridor, Direction};

/// Per-landmark figures for one direction of travel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub landmark: String,
    pub crossings: Count,
    pub stops: Count,
    /// `stops / crossings * 100`; defined as zero when there are no crossings
    pub stop_percentage: f64,
}

/// All figures for one direction, landmarks in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionBlock {
    pub direction: Direction,
    pub label: String,
    pub lines: Vec<ReportLine>,
}

/// Structured result of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorReport {
    pub corridor: String,
    pub trip_count: Count,
    pub blocks: Vec<DirectionBlock>,
}

impl CorridorReport {
    /// Projects run totals onto the report layout: one block per direction,
    /// lines in landmark table order.
    pub fn from_totals(corridor: &Corridor, totals: &Totals) -> Self {
        let blocks = Direction::BOTH
            .into_iter()
            .map(|direction| DirectionBlock {
                direction,
                label: corridor.direction_label(direction).to_string(),
                lines: corridor
                    .landmarks()
                    .iter()
                    .enumerate()
                    .map(|(id, landmark)| {
                        let key = CrossingKey {
                            direction,
                            landmark: id,
                        };
                        report_line(landmark.name.clone(), totals.crossings(key), totals.stops(key))
                    })
                    .collect(),
            })
            .collect();

        Self {
            corridor: corridor.name().to_string(),
            trip_count: totals.trip_count(),
            blocks,
        }
    }
}

fn report_line(landmark: String, crossings: Count, stops: Count) -> ReportLine {
    #[allow(clippy::cast_precision_loss)]
    let stop_percentage = if crossings == 0 {
        0.0
    } else {
        stops as f64 / crossings as f64 * 100.0
    };
    ReportLine {
        landmark,
        crossings,
        stops,
        stop_percentage,
    }
}
