//! GeoJSON export of per-landmark figures, for inspection on a map.

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::Error;
use crate::model::Corridor;
use crate::report::CorridorReport;

impl CorridorReport {
    /// Converts the report to a `GeoJSON` `FeatureCollection` with one point
    /// feature per landmark, carrying both directions' figures as properties.
    ///
    /// The corridor must be the one the report was built from: its landmark
    /// table supplies the geometries, matched to report lines by position.
    pub fn to_geojson(&self, corridor: &Corridor) -> Result<FeatureCollection, Error> {
        let landmarks = corridor.landmarks();
        if self
            .blocks
            .iter()
            .any(|block| block.lines.len() != landmarks.len())
        {
            return Err(Error::GeoJsonError(
                "report does not match the corridor landmark table".to_string(),
            ));
        }

        let features = landmarks
            .iter()
            .enumerate()
            .map(|(id, landmark)| {
                let geometry = Geometry::new(GeoJsonValue::from(&landmark.geometry));

                let mut properties = serde_json::Map::new();
                properties.insert("name".to_string(), json!(landmark.name));
                for block in &self.blocks {
                    let line = &block.lines[id];
                    let prefix = block.label.to_lowercase();
                    properties.insert(format!("{prefix}_crossings"), json!(line.crossings));
                    properties.insert(format!("{prefix}_stops"), json!(line.stops));
                    properties.insert(
                        format!("{prefix}_stop_percentage"),
                        json!(line.stop_percentage),
                    );
                }

                Feature {
                    bbox: None,
                    geometry: Some(geometry),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, corridor: &Corridor) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(corridor)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{CrossingKey, Totals, TrajectoryResult};
    use crate::loading::config::{BoundsConfig, CorridorConfig, LandmarkConfig};
    use crate::model::Direction;

    fn corridor() -> Corridor {
        let config = CorridorConfig {
            name: "Test Corridor".to_string(),
            landmarks: vec![
                LandmarkConfig {
                    name: "South".to_string(),
                    lat: 45.0,
                    lon: -93.0,
                },
                LandmarkConfig {
                    name: "North".to_string(),
                    lat: 45.001,
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

    #[test]
    fn one_feature_per_landmark_with_count_properties() {
        let mut partial = TrajectoryResult::default();
        partial.record(
            CrossingKey {
                direction: Direction::Inbound,
                landmark: 1,
            },
            true,
        );
        let mut totals = Totals::new();
        totals.fold(partial);

        let corridor = corridor();
        let report = CorridorReport::from_totals(&corridor, &totals);
        let collection = report.to_geojson(&corridor).unwrap();

        assert_eq!(collection.features.len(), 2);
        let north = collection.features[1].properties.as_ref().unwrap();
        assert_eq!(north["name"], json!("North"));
        assert_eq!(north["northbound_crossings"], json!(1));
        assert_eq!(north["northbound_stops"], json!(1));
        assert_eq!(north["southbound_crossings"], json!(0));
    }

    #[test]
    fn mismatched_corridor_is_rejected() {
        let corridor = corridor();
        let mut report = CorridorReport::from_totals(&corridor, &Totals::new());
        report.blocks[0].lines.pop();
        assert!(report.to_geojson(&corridor).is_err());
    }
}
