use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::ParseShipError;
use crate::ship_class::ShipClass;

/// Number of fields in a record line.
pub(crate) const FIELD_COUNT: usize = 5;

/// One fleet record.
///
/// A `Ship` is a plain value: equality compares all fields, while ordering is
/// a separate operation that compares the construction year only. The two are
/// deliberately distinct - `Ship` does not implement [Ord] - so that equal-year
/// ships of different names never compare equal by accident.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    name: String,
    year: i32,
    country: String,
    class: ShipClass,
    captain: String,
}

impl Ship {
    /// Create a new [Ship].
    pub fn new(name: String, year: i32, country: String, class: ShipClass, captain: String) -> Ship {
        Ship {
            name,
            year,
            country,
            class,
            captain,
        }
    }

    /// Parse a ship from a delimited record line.
    ///
    /// Expects exactly five fields in fixed order: name, year, country, class,
    /// captain. The year and class fields are trimmed before parsing.
    pub fn from_delimited(line: &str, delimiter: char) -> Result<Ship, ParseShipError> {
        let parts: Vec<&str> = line.split(delimiter).collect();
        if parts.len() != FIELD_COUNT {
            return Err(ParseShipError::FieldCount {
                expected: FIELD_COUNT,
                found: parts.len(),
            });
        }
        let year = i32::from_str(parts[1].trim())
            .map_err(|_| ParseShipError::InvalidYear(parts[1].trim().to_string()))?;
        let class = ShipClass::from_str(parts[3].trim())?;
        Ok(
            Ship {
                name: parts[0].to_string(),
                year,
                country: parts[2].to_string(),
                class,
                captain: parts[4].to_string(),
            }
        )
    }

    /// Serialize this ship as a delimited record line, without line ending.
    pub fn to_delimited(&self, delimiter: char) -> String {
        format!(
            "{}{delimiter}{}{delimiter}{}{delimiter}{}{delimiter}{}",
            self.name,
            self.year,
            self.country,
            self.class.label(),
            self.captain,
        )
    }

    /// Get the name of this ship.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the construction year of this ship.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Get the country of origin of this ship.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Get the [ShipClass] of this ship.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Get the captain of this ship.
    pub fn captain(&self) -> &str {
        &self.captain
    }

    /// Compare two ships by construction year only.
    ///
    /// This is the ordering contract shared by all sort algorithms. Ships with
    /// equal years compare as [Ordering::Equal] regardless of other fields.
    pub fn cmp_by_year(&self, other: &Ship) -> Ordering {
        self.year.cmp(&other.year)
    }
}
