use thiserror::Error;

/// Errors raised while parsing a single record line.
///
/// Any of these causes the offending line to be logged and skipped during
/// ingestion. No single line aborts a load.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseShipError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid year '{0}'")]
    InvalidYear(String),
    #[error("unknown ship class '{0}'")]
    InvalidCategory(String),
}
