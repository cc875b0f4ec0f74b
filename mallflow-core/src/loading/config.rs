//! Corridor configuration.
//!
//! All detection constants live here rather than in the algorithm: the
//! landmark table (order significant), the area-of-interest rectangle, the
//! proximity radius, and the stop-speed threshold. The defaults describe the
//! Nicollet Mall deployment; a TOML file with any subset of these fields
//! overrides them.

use serde::{Deserialize, Serialize};

/// One landmark table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkConfig {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Closed bounding rectangle of the area of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsConfig {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Externally configurable constants for one corridor deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorConfig {
    /// Corridor display name, used in report headings
    pub name: String,
    /// Intersection table; iteration order is significant
    pub landmarks: Vec<LandmarkConfig>,
    pub bounds: BoundsConfig,
    /// Landmark proximity radius in meters
    pub proximity_radius_m: f64,
    /// Speed below which a crossing classifies as a stop, in km/h
    pub stop_threshold_kmh: f64,
    /// Rendered label for travel toward increasing latitude
    pub inbound_label: String,
    /// Rendered label for travel toward decreasing latitude
    pub outbound_label: String,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            name: "Nicollet Mall".to_string(),
            landmarks: vec![
                landmark("Grant", 44.970425, -93.278200),
                landmark("Alice", 44.972602, -93.277618),
                landmark("12th", 44.973222, -93.277376),
                landmark("11th", 44.974132, -93.276855),
                landmark("10th", 44.975153, -93.276316),
                landmark("9th", 44.976146, -93.275807),
                landmark("8th", 44.976854, -93.275429),
                landmark("7th", 44.977604, -93.275038),
                landmark("6th", 44.978316, -93.274667),
                landmark("5th", 44.978922, -93.274285),
                landmark("4th", 44.979534, -93.273911),
                landmark("3rd", 44.980054, -93.273598),
            ],
            bounds: BoundsConfig {
                min_lat: 44.970,
                max_lat: 44.980,
                min_lon: -93.278,
                max_lon: -93.273,
            },
            proximity_radius_m: 30.0,
            stop_threshold_kmh: 5.0,
            inbound_label: "Northbound".to_string(),
            outbound_label: "Southbound".to_string(),
        }
    }
}

fn landmark(name: &str, lat: f64, lon: f64) -> LandmarkConfig {
    LandmarkConfig {
        name: name.to_string(),
        lat,
        lon,
    }
}
