//! Mock oracles for testing.
//!
//! Both mocks return a preset answer, record the text they were asked about,
//! and can be switched to return an error instead.
//!
//! # Example
//!
//! ```ignore
//! let similarity = FixedSimilarity::uniform(0.8);
//! let sentiment = FixedSentiment::new(-0.5);
//!
//! let sims = similarity.similarities("I dislike crowds", &candidates)?;
//! assert_eq!(similarity.call_count(), 1);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::ASPECT_COUNT;
use crate::ports::{OracleError, SentimentOracle, SimilarityOracle};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Similarity oracle returning a fixed vector.
#[derive(Debug, Clone)]
pub struct FixedSimilarity {
    values: Vec<f64>,
    error: Option<OracleError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FixedSimilarity {
    /// Returns `values` verbatim, whatever the number of candidates.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The same similarity for every aspect.
    pub fn uniform(value: f64) -> Self {
        Self::new(vec![value; ASPECT_COUNT])
    }

    /// Every call fails with `error`.
    pub fn failing(error: OracleError) -> Self {
        Self::new(Vec::new()).with_error(error)
    }

    pub fn with_error(mut self, error: OracleError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Texts passed to the oracle, in call order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

impl SimilarityOracle for FixedSimilarity {
    fn similarities(&self, text: &str, _candidates: &[&str]) -> Result<Vec<f64>, OracleError> {
        lock(&self.calls).push(text.to_string());
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.values.clone()),
        }
    }
}

/// Sentiment oracle returning a fixed polarity.
#[derive(Debug, Clone)]
pub struct FixedSentiment {
    polarity: f64,
    error: Option<OracleError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FixedSentiment {
    pub fn new(polarity: f64) -> Self {
        Self {
            polarity,
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: OracleError) -> Self {
        Self::new(0.0).with_error(error)
    }

    pub fn with_error(mut self, error: OracleError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

impl SentimentOracle for FixedSentiment {
    fn polarity(&self, text: &str) -> Result<f64, OracleError> {
        lock(&self.calls).push(text.to_string());
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.polarity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_records_calls() {
        let oracle = FixedSimilarity::uniform(0.3);
        let values = oracle.similarities("hello", &["a", "b"]).unwrap();

        assert_eq!(values.len(), ASPECT_COUNT);
        assert_eq!(oracle.calls(), vec!["hello".to_string()]);
    }

    #[test]
    fn clones_share_call_history() {
        let oracle = FixedSentiment::new(0.5);
        let clone = oracle.clone();
        clone.polarity("x").unwrap();
        assert_eq!(oracle.call_count(), 1);
    }

    #[test]
    fn injected_errors_are_returned() {
        let sim = FixedSimilarity::failing(OracleError::unavailable("down"));
        let sent = FixedSentiment::failing(OracleError::invalid_input("empty"));

        assert_eq!(
            sim.similarities("x", &[]),
            Err(OracleError::unavailable("down"))
        );
        assert!(sent.polarity("x").is_err());
        assert_eq!(sim.call_count(), 1);
    }
}
