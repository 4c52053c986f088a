//! Error types for the DataLens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for DataLens operations.
///
/// The analysis engine itself never fails; these errors come from the edges
/// (ingestion, dataset construction, configuration and report persistence).
#[derive(Debug, Error)]
pub enum DataLensError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A row carries a key that is not in the dataset's column list.
    #[error("Row {row} has value for unknown column '{column}'")]
    UnknownColumn { row: usize, column: String },

    /// The same column name appears twice in the column list.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error saving or loading an analysis report.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for DataLens operations.
pub type Result<T> = std::result::Result<T, DataLensError>;
