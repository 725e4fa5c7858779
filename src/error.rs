//! Error types for the rig planner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog JSON is malformed.
    #[error("invalid catalog JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// The catalog parsed but violates a structural rule.
    #[error("invalid catalog: {message}")]
    Invalid { message: String },
}

/// Errors that can occur when exporting a quote.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize the quote to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
