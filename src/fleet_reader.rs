use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use regex::Regex;

use crate::ship::Ship;

/// Read a fleet of ships from a delimited text file.
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
/// use ship_sort::fleet_reader::FleetReader;
///
/// fn load(input: PathBuf) -> Result<(), anyhow::Error> {
///     let reader = FleetReader::new();
///     let fleet = reader.read(&input)?;
///     println!("loaded {} ships", fleet.len());
///     Ok(())
/// }
/// ```
pub struct FleetReader {
    delimiter: char,
    has_header: bool,
    ignore_lines: Option<Regex>,
}

impl FleetReader {
    /// Create a default FleetReader definition.
    ///
    /// * The default field delimiter is a comma (',')
    /// * the first line is treated as a header and discarded
    /// * lines starting with '#' are ignored
    pub fn new() -> FleetReader {
        FleetReader {
            delimiter: ',',
            has_header: true,
            ignore_lines: Some(Regex::new("^#").unwrap()),
        }
    }

    /// Set the field delimiter. The default is ','
    pub fn with_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    /// Specify whether the first line is a header to be discarded. The default is true
    pub fn with_header(&mut self, has_header: bool) {
        self.has_header = has_header;
    }

    /// Specify which lines to ignore. Each line matching the regex will be
    /// skipped and will not produce a record.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r);
    }

    /// Read all parseable records from the file at `path`.
    ///
    /// Unparseable lines - wrong field count, bad year, unknown ship class,
    /// invalid encoding - are logged and skipped; no single line aborts the
    /// load. The result may be empty. Failure to open the file is returned to
    /// the caller.
    pub fn read(&self, path: &Path) -> Result<Vec<Ship>, anyhow::Error> {
        let file = File::open(path)
            .with_context(|| format!("path: {}", path.to_string_lossy()))?;
        let reader = BufReader::new(file);

        let mut ships = Vec::new();
        let mut skipped: usize = 0;
        for (n, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skipping line {} of {}: {}", n + 1, path.to_string_lossy(), e);
                    continue;
                }
            };
            if self.has_header && n == 0 {
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            if let Some(r) = &self.ignore_lines {
                if r.is_match(line.trim()) {
                    continue;
                }
            }
            match Ship::from_delimited(&line, self.delimiter) {
                Ok(ship) => ships.push(ship),
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skipping line {} of {}: {}", n + 1, path.to_string_lossy(), e);
                }
            }
        }
        log::info!(
            "Loaded {} ships from {}, skipped {} lines",
            ships.len(),
            path.to_string_lossy(),
            skipped,
        );
        Ok(ships)
    }
}

impl Default for FleetReader {
    fn default() -> FleetReader {
        FleetReader::new()
    }
}
