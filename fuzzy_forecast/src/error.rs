//! Error types for the fuzzy_forecast crate

use thiserror::Error;

/// Custom error types for the fuzzy_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Not enough observations to derive any transition
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Universe of discourse bounds are not ordered
    #[error("Invalid universe: {0}")]
    InvalidUniverse(String),

    /// Model configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
