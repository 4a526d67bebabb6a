//! TendencyExtractor - Free text to tendency samples.
//!
//! Segments the text, asks the similarity oracle how close the first segment
//! is to each aspect description, scales that by the segment's sentiment and
//! rescales into the bounded tendency range.

use std::sync::Arc;

use tracing::{debug, warn};

use super::PredictionError;
use crate::domain::foundation::{Aspect, ASPECT_COUNT};
use crate::domain::prediction::{samples_from_signals, segment_text, TendencySample};
use crate::ports::{OracleError, SentimentOracle, SimilarityOracle};

/// Default rescaling exponent.
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Turns text into one tendency sample per aspect.
#[derive(Clone)]
pub struct TendencyExtractor {
    similarity: Arc<dyn SimilarityOracle>,
    sentiment: Arc<dyn SentimentOracle>,
    gamma: f64,
}

impl TendencyExtractor {
    pub fn new(similarity: Arc<dyn SimilarityOracle>, sentiment: Arc<dyn SentimentOracle>) -> Self {
        Self {
            similarity,
            sentiment,
            gamma: DEFAULT_GAMMA,
        }
    }

    /// Sets the rescaling exponent. Zero, negative and non-finite values are
    /// ignored and the current exponent is kept.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        if gamma.is_finite() && gamma > 0.0 {
            self.gamma = gamma;
        } else {
            warn!(gamma, kept = self.gamma, "ignoring non-positive rescaling exponent");
        }
        self
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Extracts samples from the first segment of `text`.
    ///
    /// # Errors
    ///
    /// - `DegenerateInput` when the text has no non-empty segment
    /// - `Oracle` when either oracle fails or returns a non-finite value
    /// - `DimensionMismatch` when the similarity oracle returns the wrong count
    pub fn extract(&self, text: &str) -> Result<Vec<TendencySample>, PredictionError> {
        let segments = segment_text(text);
        let first = segments.first().ok_or(PredictionError::DegenerateInput)?;

        let descriptions = Aspect::descriptions();
        let similarities = self.similarity.similarities(first, &descriptions)?;

        if similarities.len() != ASPECT_COUNT {
            return Err(PredictionError::DimensionMismatch {
                expected: ASPECT_COUNT,
                actual: similarities.len(),
            });
        }
        if similarities.iter().any(|s| !s.is_finite()) {
            return Err(OracleError::invalid_response("non-finite similarity").into());
        }

        let polarity = self.sentiment.polarity(first)?;
        if !polarity.is_finite() {
            return Err(OracleError::invalid_response("non-finite polarity").into());
        }

        debug!(
            segments = segments.len(),
            polarity,
            "extracted tendency signals from first segment"
        );

        Ok(samples_from_signals(
            &similarities,
            polarity.clamp(-1.0, 1.0),
            self.gamma,
        ))
    }
}

impl std::fmt::Debug for TendencyExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TendencyExtractor")
            .field("gamma", &self.gamma)
            .finish_non_exhaustive()
    }
}
