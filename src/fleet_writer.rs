use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use crate::ship::Ship;

/// Field names of the header line, in record order.
pub const HEADER_FIELDS: [&str; 5] = ["Name", "Year", "Country", "Type", "Captain"];

/// Write a fleet of ships to a delimited text file.
///
/// The output starts with a fixed header line followed by one record per
/// ship, using the canonical class labels.
pub struct FleetWriter {
    delimiter: char,
}

impl FleetWriter {
    /// Create a default FleetWriter definition with ',' as the field delimiter.
    pub fn new() -> FleetWriter {
        FleetWriter {
            delimiter: ',',
        }
    }

    /// Set the field delimiter. The default is ','
    pub fn with_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    /// The header line for the configured delimiter.
    pub fn header(&self) -> String {
        HEADER_FIELDS.join(&self.delimiter.to_string())
    }

    /// Write `ships` to the file at `path`, creating parent directories as
    /// needed.
    pub fn write(&self, path: &Path, ships: &[Ship]) -> Result<(), anyhow::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("path: {}", parent.to_string_lossy()))?;
            }
        }
        let file = File::create(path)
            .with_context(|| format!("path: {}", path.to_string_lossy()))?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", self.header())?;
        for ship in ships {
            writeln!(writer, "{}", ship.to_delimited(self.delimiter))?;
        }
        writer.flush()?;
        log::info!("Wrote {} ships to {}", ships.len(), path.to_string_lossy());
        Ok(())
    }
}

impl Default for FleetWriter {
    fn default() -> FleetWriter {
        FleetWriter::new()
    }
}
