//! Plain-text and CSV renderings of the report.

use crate::Error;
use crate::report::CorridorReport;

impl CorridorReport {
    /// Renders the classic analysis layout: a heading with the trip total,
    /// then per direction a crossings block and a stops block with the
    /// percentage of encounters under each landmark.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} Analysis:\n", self.corridor));
        out.push_str(&format!(
            "Total trips on {}: {}\n\n",
            self.corridor, self.trip_count
        ));

        for block in &self.blocks {
            out.push_str(&format!("{} crossings\n", block.label));
            for line in &block.lines {
                out.push_str(&format!("{}: {}\n", line.landmark, line.crossings));
            }
            out.push('\n');

            out.push_str(&format!("{} stops\n", block.label));
            for line in &block.lines {
                out.push_str(&format!("{}: {}\n", line.landmark, line.stops));
                out.push_str(&format!(
                    "Percentage of encounters: {:.2}%\n",
                    line.stop_percentage
                ));
            }
            out.push('\n');
        }

        out
    }

    /// Renders one CSV row per (direction, landmark) pair.
    pub fn to_csv(&self) -> Result<String, Error> {
        let mut buffer = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer.write_record([
                "direction",
                "landmark",
                "crossings",
                "stops",
                "stop_percentage",
            ])?;
            for block in &self.blocks {
                for line in &block.lines {
                    writer.write_record([
                        block.label.as_str(),
                        line.landmark.as_str(),
                        &line.crossings.to_string(),
                        &line.stops.to_string(),
                        &format!("{:.2}", line.stop_percentage),
                    ])?;
                }
            }
            writer.flush()?;
        }
        String::from_utf8(buffer).map_err(|e| Error::InvalidData(e.to_string()))
    }
}
