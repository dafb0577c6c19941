//! Error types for the forecast pipeline.

use thiserror::Error;

/// Everything that can abort a forecast run.
///
/// None of these are retried: a run either produces the full continent
/// table or stops with the specific cause.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The source table could not be fetched, located or shaped as expected.
    #[error("data unavailable: {reason}")]
    DataUnavailable {
        /// What went wrong (HTTP status, missing table, column count, ...).
        reason: String,
    },

    /// Fitting was attempted without a single row carrying a defined `pop_change`.
    #[error("insufficient data: no rows with a defined pop_change to fit on")]
    InsufficientData,

    /// A continent was not part of the encoding the model was fitted with.
    #[error("model mismatch: continent {continent:?} was not seen during fitting")]
    ModelMismatch {
        /// The unknown continent.
        continent: String,
    },

    /// An encoded row does not have one column per fitted continent.
    #[error("model mismatch: encoded row has {actual} columns, model expects {expected}")]
    WidthMismatch {
        /// Number of continent columns in the fitted encoding.
        expected: usize,
        /// Number of columns supplied.
        actual: usize,
    },

    /// Bad command-line arguments.
    #[error("usage: {0}")]
    Usage(String),

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ForecastError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable { reason: reason.into() }
    }
}

/// A specialized Result type for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;
