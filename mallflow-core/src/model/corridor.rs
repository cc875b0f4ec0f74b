use geo::{Coord, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::loading::CorridorConfig;
use crate::model::Landmark;
use crate::{Error, LandmarkId};

/// Direction of travel along the corridor axis.
///
/// The corridor runs roughly north-south, so the axis coordinate is
/// latitude: `Inbound` is the northbound analog. Rendered labels come from
/// the corridor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Inbound, Direction::Outbound];
}

/// Static reference data for one corridor: the ordered landmark table, the
/// closed bounding rectangle of the area of interest, and the detection
/// thresholds. Constant for the duration of a run.
#[derive(Debug, Clone)]
pub struct Corridor {
    name: String,
    landmarks: Vec<Landmark>,
    bounds: Rect<f64>,
    proximity_radius_m: f64,
    stop_threshold_kmh: f64,
    inbound_label: String,
    outbound_label: String,
}

impl Corridor {
    /// Builds a corridor from its configuration, rejecting invalid tables
    /// before any scanning begins.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` for an empty landmark table, a
    /// non-positive proximity radius or stop threshold, or a degenerate
    /// bounding rectangle.
    pub fn new(config: CorridorConfig) -> Result<Self, Error> {
        validate_config(&config)?;

        let landmarks = config
            .landmarks
            .into_iter()
            .map(|entry| Landmark {
                name: entry.name,
                geometry: Point::new(entry.lon, entry.lat),
            })
            .collect();

        let bounds = Rect::new(
            Coord {
                x: config.bounds.min_lon,
                y: config.bounds.min_lat,
            },
            Coord {
                x: config.bounds.max_lon,
                y: config.bounds.max_lat,
            },
        );

        Ok(Self {
            name: config.name,
            landmarks,
            bounds,
            proximity_radius_m: config.proximity_radius_m,
            stop_threshold_kmh: config.stop_threshold_kmh,
            inbound_label: config.inbound_label,
            outbound_label: config.outbound_label,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Landmark table in configuration order. `LandmarkId`s are indices
    /// into this slice, so iteration order is significant for consumers.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// True iff both coordinates fall within the closed bounding rectangle
    /// of the area of interest.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        let min = self.bounds.min();
        let max = self.bounds.max();
        point.x() >= min.x && point.x() <= max.x && point.y() >= min.y && point.y() <= max.y
    }

    /// Classifies the transition between two landmarks by comparing their
    /// axis (latitude) coordinates. Equal latitudes classify as `Outbound`.
    pub fn direction_between(&self, from: LandmarkId, to: LandmarkId) -> Direction {
        if self.landmarks[from].geometry.y() < self.landmarks[to].geometry.y() {
            Direction::Inbound
        } else {
            Direction::Outbound
        }
    }

    pub fn proximity_radius_m(&self) -> f64 {
        self.proximity_radius_m
    }

    pub fn stop_threshold_kmh(&self) -> f64 {
        self.stop_threshold_kmh
    }

    pub fn direction_label(&self, direction: Direction) -> &str {
        match direction {
            Direction::Inbound => &self.inbound_label,
            Direction::Outbound => &self.outbound_label,
        }
    }
}

fn validate_config(config: &CorridorConfig) -> Result<(), Error> {
    if config.landmarks.is_empty() {
        return Err(Error::ConfigError(
            "corridor has no landmarks".to_string(),
        ));
    }

    if config.proximity_radius_m <= 0.0 {
        return Err(Error::ConfigError(format!(
            "proximity radius must be positive, got {}",
            config.proximity_radius_m
        )));
    }

    if config.stop_threshold_kmh <= 0.0 {
        return Err(Error::ConfigError(format!(
            "stop threshold must be positive, got {}",
            config.stop_threshold_kmh
        )));
    }

    if config.bounds.min_lat >= config.bounds.max_lat
        || config.bounds.min_lon >= config.bounds.max_lon
    {
        return Err(Error::ConfigError(
            "bounding rectangle is degenerate".to_string(),
        ));
    }

    Ok(())
}
