//! GPX trajectory decoding.
//!
//! One GPX file is one trip. Tracks, segments, and points are flattened in
//! document order, which is the recording order the scanner depends on.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::trace;

use crate::Error;
use crate::model::Position;

/// Decodes one GPX file into the trajectory's ordered position sequence.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not valid GPX, or
/// contains a track point without a timestamp (such a trajectory cannot be
/// speed-classified).
pub fn decode_gpx_file(path: &Path) -> Result<Vec<Position>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    decode_gpx(BufReader::new(file))
}

/// Decodes GPX from any reader.
pub fn decode_gpx<R: Read>(reader: R) -> Result<Vec<Position>, Error> {
    let document = gpx::read(reader)?;

    let mut positions = Vec::new();
    for track in document.tracks {
        for segment in track.segments {
            for waypoint in segment.points {
                let geometry = waypoint.point();
                let stamp = waypoint.time.ok_or_else(|| {
                    Error::InvalidData("track point without a timestamp".to_string())
                })?;
                positions.push(Position {
                    geometry,
                    time: to_utc(stamp)?,
                });
            }
        }
    }

    trace!("Decoded {} track points", positions.len());
    Ok(positions)
}

fn to_utc(stamp: gpx::Time) -> Result<DateTime<Utc>, Error> {
    let iso = stamp.format()?;
    let parsed = DateTime::parse_from_rfc3339(&iso)
        .map_err(|e| Error::InvalidData(format!("unparseable track point timestamp: {e}")))?;
    Ok(parsed.with_timezone(&Utc))
}
