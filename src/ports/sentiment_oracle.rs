//! Sentiment Oracle Port - Polarity of a piece of text.

use super::OracleError;

/// Port for sentiment polarity.
///
/// Implementations return a compound polarity in `[-1, 1]`: negative for
/// dislike or difficulty, positive for enjoyment or strength.
pub trait SentimentOracle: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, OracleError>;
}
