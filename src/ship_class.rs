use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseShipError;

/// Closed set of ship classes.
///
/// The class field of a record must carry one of the canonical labels below.
/// Anything else fails parsing with [ParseShipError::InvalidCategory] and the
/// record is discarded at ingestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipClass {
    /// Tanker
    Tanker,
    /// Bulk carrier
    BulkCarrier,
    /// Passenger ship
    Passenger,
}

impl ShipClass {
    /// All recognized classes in canonical order.
    pub const ALL: [ShipClass; 3] = [ShipClass::Tanker, ShipClass::BulkCarrier, ShipClass::Passenger];

    /// Canonical textual label as it appears in the data files.
    pub fn label(&self) -> &'static str {
        match self {
            ShipClass::Tanker => "Tanker",
            ShipClass::BulkCarrier => "BulkCarrier",
            ShipClass::Passenger => "Passenger",
        }
    }
}

impl FromStr for ShipClass {
    type Err = ParseShipError;

    fn from_str(s: &str) -> Result<ShipClass, Self::Err> {
        match s {
            "Tanker" => Ok(ShipClass::Tanker),
            "BulkCarrier" => Ok(ShipClass::BulkCarrier),
            "Passenger" => Ok(ShipClass::Passenger),
            other => Err(ParseShipError::InvalidCategory(other.to_string())),
        }
    }
}

impl Display for ShipClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
