//! Custom error types for loadout-sheets
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for loadout-sheets operations
#[derive(Error, Debug)]
pub enum SheetsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// The inventory snapshot has no stores or no definitions yet
    #[error("Inventory is not loaded yet; refresh the inventory snapshot and try again")]
    NotLoaded,

    /// Import was given no files, or a file that isn't a CSV
    #[error("Import failed: only .csv files can be imported")]
    WrongFileType,

    /// Import file contained a header but no rows
    #[error("Import failed: {0} contains no rows")]
    EmptyFile(String),

    /// Import file is missing one of the required columns
    #[error("Import failed: {file} is missing required columns ({missing})")]
    WrongFields { file: String, missing: String },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SheetsError {
    /// Check if the failure came from the input files of an import
    pub fn is_import_input(&self) -> bool {
        matches!(
            self,
            Self::WrongFileType | Self::EmptyFile(_) | Self::WrongFields { .. }
        )
    }
}

impl From<std::io::Error> for SheetsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SheetsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SheetsError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for loadout-sheets operations
pub type SheetsResult<T> = Result<T, SheetsError>;
