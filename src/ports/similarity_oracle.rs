//! Similarity Oracle Port - Semantic closeness of text to aspect descriptions.
//!
//! The predictor asks this port how close a piece of user text is to each
//! aspect description. Adapters may wrap an embedding model, a remote
//! service, or a plain lexical heuristic.

/// Errors raised by text oracles.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    /// The backing model or service could not be reached.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle rejected the input.
    #[error("invalid oracle input: {0}")]
    InvalidInput(String),

    /// The oracle answered with something unusable.
    #[error("invalid oracle response: {0}")]
    InvalidResponse(String),
}

impl OracleError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Port for semantic similarity scoring.
///
/// # Contract
///
/// Implementations must:
/// - Return exactly one value per candidate, in candidate order
/// - Keep values in roughly `[-1, 1]`, larger meaning closer
/// - Be safe to share across threads
pub trait SimilarityOracle: Send + Sync {
    /// Similarity between `text` and every candidate description.
    fn similarities(&self, text: &str, candidates: &[&str]) -> Result<Vec<f64>, OracleError>;
}
