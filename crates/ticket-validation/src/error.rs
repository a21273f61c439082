//! Error types for A/B validation.

use thiserror::Error;

/// Errors that can occur while loading data or computing statistics.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Report serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column could not be detected in the header.
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// Too few observations for the requested statistic.
    #[error("{statistic} needs at least {required} observations, got {actual}")]
    InsufficientData {
        statistic: &'static str,
        required: usize,
        actual: usize,
    },

    /// The statistic is undefined for this data.
    #[error("{statistic} is undefined: {reason}")]
    Degenerate {
        statistic: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn require(
        statistic: &'static str,
        required: usize,
        actual: usize,
    ) -> Result<(), ValidationError> {
        if actual < required {
            return Err(ValidationError::InsufficientData {
                statistic,
                required,
                actual,
            });
        }
        Ok(())
    }
}
