//! Prediction pipeline errors.
//!
//! None of these cross the predictor boundary: the predictor maps each one
//! to a documented fallback ranking.

use thiserror::Error;

use crate::ports::OracleError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// Text was empty or had no usable segment.
    #[error("input text has no usable segment")]
    DegenerateInput,

    #[error("oracle failed: {0}")]
    Oracle(#[from] OracleError),

    /// An oracle returned the wrong number of values.
    #[error("expected {expected} similarity values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The posterior mean contained NaN or infinity.
    #[error("posterior estimate is not finite")]
    NonFinitePosterior,
}
