use chrono::NaiveDate;
use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Input-table schema violations.
///
/// Fatal: the pipeline cannot proceed past ingestion and no partial output
/// is produced.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("row {row}: unparseable timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: invalid {column} value '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: review score {value} outside {min}..={max}")]
    ScoreOutOfBounds {
        row: usize,
        value: u8,
        min: u8,
        max: u8,
    },
}

/// Malformed or out-of-bounds analysis windows.
///
/// Non-fatal: filtering with such a window yields empty derived tables, so
/// callers may surface this as a warning and run the pipeline anyway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },

    #[error("window {start}..={end} lies outside the record span {min}..={max}")]
    OutOfBounds {
        start: NaiveDate,
        end: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
