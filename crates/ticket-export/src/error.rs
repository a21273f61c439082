//! Error types for the CSV exporter.

use thiserror::Error;

/// Errors that can occur during CSV export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Nothing to export.
    #[error("No tickets to export")]
    Empty,
}
