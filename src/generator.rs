use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::fleet_writer::FleetWriter;
use crate::ship::Ship;
use crate::ship_class::ShipClass;

const NAMES: [&str; 8] = [
    "Poseidon", "Neptune", "Titanic", "Enterprise",
    "Odyssey", "Aurora", "Viking", "Nautilus",
];

const COUNTRIES: [&str; 7] = ["USA", "Russia", "China", "UK", "Germany", "France", "Japan"];

const CAPTAINS: [&str; 7] = [
    "John Smith", "Ivan Petrov", "Hans Müller", "Jean Dupont",
    "William Brown", "Li Wei", "Carlos Sanchez",
];

/// Generate random fleets for tests and benchmarks.
///
/// # Examples
/// ```
/// use ship_sort::generator::FleetGenerator;
///
/// let fleet = FleetGenerator::new(100).generate();
/// assert_eq!(fleet.len(), 100);
/// ```
pub struct FleetGenerator {
    size: usize,
    min_year: i32,
    max_year: i32,
}

impl FleetGenerator {
    /// Create a generator for `size` ships with years in 1950..=2025.
    pub fn new(size: usize) -> FleetGenerator {
        FleetGenerator {
            size,
            min_year: 1950,
            max_year: 2025,
        }
    }

    /// Set the inclusive range construction years are drawn from.
    pub fn with_year_range(&mut self, min_year: i32, max_year: i32) {
        self.min_year = min_year;
        self.max_year = max_year;
    }

    /// Generate a random fleet.
    pub fn generate(&self) -> Vec<Ship> {
        let mut rng = rand::thread_rng();
        (0..self.size)
            .map(|_| {
                Ship::new(
                    format!("{} {}", NAMES.choose(&mut rng).unwrap(), rng.gen_range(1..=100)),
                    rng.gen_range(self.min_year..=self.max_year),
                    COUNTRIES.choose(&mut rng).unwrap().to_string(),
                    *ShipClass::ALL.choose(&mut rng).unwrap(),
                    CAPTAINS.choose(&mut rng).unwrap().to_string(),
                )
            })
            .collect()
    }

    /// Generate a random fleet and write it as a CSV seed file at `path`.
    pub fn write_csv(&self, path: &Path) -> Result<Vec<Ship>, anyhow::Error> {
        let fleet = self.generate();
        FleetWriter::new().write(path, &fleet)?;
        Ok(fleet)
    }
}
