/// Error types for the water quality core library
use thiserror::Error;

/// Main error type for loading and storing water quality data
#[derive(Error, Debug)]
pub enum WqmError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A numeric column did not hold a number
    #[error("Invalid number in column '{column}': '{value}'")]
    InvalidNumber { column: &'static str, value: String },

    /// A quality tier key was not one of the five known tiers
    #[error("Unknown quality level: {0}")]
    UnknownLevel(String),

    /// A row was missing a required column
    #[error("Missing column '{0}'")]
    MissingColumn(&'static str),

    /// The reading store failed
    #[error("Reading store failure: {0}")]
    Storage(String),
}

/// Type alias for Results using WqmError
pub type Result<T> = std::result::Result<T, WqmError>;
