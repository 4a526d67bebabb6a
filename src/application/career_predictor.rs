//! CareerPredictor - Free text to a ranked profession list.
//!
//! Runs extraction, posterior estimation and scoring in sequence. Failures
//! never reach the caller:
//! - an unloadable profession table is replaced by a synthetic one at load time
//! - degenerate text yields a zero-scored ranking without sampling
//! - any other pipeline failure yields a uniform low-confidence ranking

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::{PredictionError, TendencyExtractor};
use crate::adapters::professions::CsvProfessionSource;
use crate::config::AppConfig;
use crate::domain::prediction::{
    PosteriorEstimate, PosteriorEstimator, ProfessionMatrix, ProfessionScorer, RankedProfessions,
};
use crate::ports::{ProfessionSource, SentimentOracle, SimilarityOracle};

/// Score of every profession when the text carries no usable segment.
pub const DEGENERATE_SCORE: f64 = 0.0;

/// Score of every profession when the pipeline fails.
pub const LOW_CONFIDENCE_SCORE: f64 = 0.1;

/// How a ranking was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Scored,
    Degenerate,
    Failed,
}

/// A ranking plus how it was obtained.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    pub ranking: RankedProfessions,
    pub kind: OutcomeKind,
    /// Present only for `Scored` outcomes.
    pub posterior: Option<PosteriorEstimate>,
}

/// Ranks professions for free text.
///
/// The matrix is loaded once and shared read-only; every prediction owns its
/// sampler state, so one predictor can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct CareerPredictor {
    matrix: Arc<ProfessionMatrix>,
    extractor: TendencyExtractor,
    estimator: PosteriorEstimator,
    scorer: ProfessionScorer,
    seed: Option<u64>,
    fallback: bool,
}

impl CareerPredictor {
    pub fn new(matrix: ProfessionMatrix, extractor: TendencyExtractor) -> Self {
        Self {
            matrix: Arc::new(matrix),
            extractor,
            estimator: PosteriorEstimator::default(),
            scorer: ProfessionScorer::default(),
            seed: None,
            fallback: false,
        }
    }

    /// Loads the matrix from `source`, substituting the synthetic fallback set
    /// when loading fails.
    pub fn load(
        source: &dyn ProfessionSource,
        extractor: TendencyExtractor,
        fallback_seed: Option<u64>,
    ) -> Self {
        match source.load() {
            Ok(matrix) => {
                info!(
                    source = %source.describe(),
                    professions = matrix.len(),
                    "profession table loaded"
                );
                Self::new(matrix, extractor)
            }
            Err(e) => {
                warn!(
                    source = %source.describe(),
                    error = %e,
                    "failed to load profession table, using synthetic fallback"
                );
                let mut rng = seeded_rng(fallback_seed);
                let mut predictor = Self::new(ProfessionMatrix::synthetic(&mut rng), extractor);
                predictor.fallback = true;
                predictor
            }
        }
    }

    /// Builds a predictor from configuration: CSV source, sampler settings,
    /// ranking size, rescaling exponent and seed.
    pub fn from_config(
        config: &AppConfig,
        similarity: Arc<dyn SimilarityOracle>,
        sentiment: Arc<dyn SentimentOracle>,
    ) -> Self {
        let extractor =
            TendencyExtractor::new(similarity, sentiment).with_gamma(config.predictor.gamma);
        let source = CsvProfessionSource::new(&config.predictor.professions_path);

        let mut predictor = Self::load(&source, extractor, config.predictor.fallback_seed)
            .with_estimator(PosteriorEstimator::new(config.sampler.to_settings()))
            .with_scorer(ProfessionScorer::new(config.predictor.top_k));
        predictor.seed = config.sampler.seed;
        predictor
    }

    pub fn with_estimator(mut self, estimator: PosteriorEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_scorer(mut self, scorer: ProfessionScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Seeds every prediction identically, making results reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn matrix(&self) -> &ProfessionMatrix {
        &self.matrix
    }

    /// True when the synthetic fallback table is in use.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn predict(&self, text: &str) -> RankedProfessions {
        self.predict_detailed(text).ranking
    }

    pub fn predict_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> RankedProfessions {
        self.predict_detailed_with_rng(text, rng).ranking
    }

    pub fn predict_detailed(&self, text: &str) -> PredictionOutcome {
        let mut rng = seeded_rng(self.seed);
        self.predict_detailed_with_rng(text, &mut rng)
    }

    pub fn predict_detailed_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> PredictionOutcome {
        match self.run(text, rng) {
            Ok((ranking, posterior)) => PredictionOutcome {
                ranking,
                kind: OutcomeKind::Scored,
                posterior: Some(posterior),
            },
            Err(PredictionError::DegenerateInput) => {
                debug!("degenerate input text, returning zero-scored ranking");
                PredictionOutcome {
                    ranking: self.uniform(DEGENERATE_SCORE),
                    kind: OutcomeKind::Degenerate,
                    posterior: None,
                }
            }
            Err(e) => {
                error!(error = %e, "prediction pipeline failed, returning low-confidence ranking");
                PredictionOutcome {
                    ranking: self.uniform(LOW_CONFIDENCE_SCORE),
                    kind: OutcomeKind::Failed,
                    posterior: None,
                }
            }
        }
    }

    fn run<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<(RankedProfessions, PosteriorEstimate), PredictionError> {
        let samples = self.extractor.extract(text)?;
        let posterior = self.estimator.estimate(&samples, rng);

        if !posterior.mean.is_finite() {
            return Err(PredictionError::NonFinitePosterior);
        }

        let ranking = self.scorer.score(&self.matrix, &posterior.mean);
        Ok((ranking, posterior))
    }

    fn uniform(&self, score: f64) -> RankedProfessions {
        RankedProfessions::uniform(&self.matrix, score, self.scorer.top_k())
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::oracles::{FixedSentiment, FixedSimilarity};
    use crate::adapters::professions::InMemoryProfessionSource;
    use crate::domain::foundation::{AspectVector, ASPECT_COUNT};
    use crate::domain::prediction::FALLBACK_PROFESSIONS;
    use crate::ports::OracleError;

    fn unit(index: usize) -> AspectVector {
        let mut v = AspectVector::ZERO;
        v[index] = 1.0;
        v
    }

    fn matrix(n: usize) -> ProfessionMatrix {
        let names = (0..n).map(|i| format!("Job {}", i)).collect();
        let rows = (0..n).map(|i| unit(i % ASPECT_COUNT)).collect();
        ProfessionMatrix::new(names, rows).unwrap()
    }

    fn extractor(sim: FixedSimilarity, sent: FixedSentiment) -> TendencyExtractor {
        TendencyExtractor::new(Arc::new(sim), Arc::new(sent))
    }

    fn similarity_for(index: usize) -> FixedSimilarity {
        let mut values = vec![0.0; ASPECT_COUNT];
        values[index] = 0.9;
        FixedSimilarity::new(values)
    }

    #[test]
    fn scored_prediction_prefers_matching_aspect() {
        let mut against = AspectVector::ZERO;
        against[1] = -1.0;
        let rows = vec![against, unit(1), AspectVector::ZERO];
        let names = vec!["Against".to_string(), "For".to_string(), "Neutral".to_string()];
        let predictor = CareerPredictor::new(
            ProfessionMatrix::new(names, rows).unwrap(),
            extractor(similarity_for(1), FixedSentiment::new(1.0)),
        )
        .with_seed(7);

        let outcome = predictor.predict_detailed("I love writing code");

        assert_eq!(outcome.kind, OutcomeKind::Scored);
        assert_eq!(outcome.ranking.names(), vec!["For", "Neutral", "Against"]);
        assert!(outcome.posterior.unwrap().was_sampled());
    }

    #[test]
    fn degenerate_text_scores_zero_without_oracle_calls() {
        let sim = FixedSimilarity::uniform(0.5);
        let predictor = CareerPredictor::new(
            matrix(12),
            extractor(sim.clone(), FixedSentiment::new(0.5)),
        );

        let outcome = predictor.predict_detailed("   ");

        assert_eq!(outcome.kind, OutcomeKind::Degenerate);
        assert_eq!(outcome.ranking.len(), 10);
        assert!(outcome.ranking.iter().all(|e| e.score == DEGENERATE_SCORE));
        assert_eq!(outcome.ranking.names()[0], "Job 0");
        assert_eq!(sim.call_count(), 0);
    }

    #[test]
    fn oracle_failure_yields_low_confidence() {
        let predictor = CareerPredictor::new(
            matrix(4),
            extractor(
                FixedSimilarity::failing(OracleError::unavailable("offline")),
                FixedSentiment::new(0.5),
            ),
        );

        let outcome = predictor.predict_detailed("I like numbers");

        assert_eq!(outcome.kind, OutcomeKind::Failed);
        assert_eq!(outcome.ranking.len(), 4);
        assert!(outcome.ranking.iter().all(|e| e.score == LOW_CONFIDENCE_SCORE));
        assert!(outcome.posterior.is_none());
    }

    #[test]
    fn neutral_text_takes_fast_path() {
        let predictor = CareerPredictor::new(
            matrix(3),
            extractor(FixedSimilarity::uniform(0.7), FixedSentiment::new(0.0)),
        );

        let outcome = predictor.predict_detailed("The sky is blue");

        assert_eq!(outcome.kind, OutcomeKind::Scored);
        assert!(!outcome.posterior.unwrap().was_sampled());
        assert!(outcome.ranking.iter().all(|e| e.score == 0.5));
    }

    #[test]
    fn failed_load_uses_synthetic_fallback() {
        let predictor = CareerPredictor::load(
            &InMemoryProfessionSource::failing(),
            extractor(FixedSimilarity::uniform(0.5), FixedSentiment::new(0.5)),
            Some(3),
        );

        assert!(predictor.is_fallback());
        assert_eq!(predictor.matrix().len(), FALLBACK_PROFESSIONS.len());
        assert_eq!(predictor.predict("I enjoy teamwork").len(), 5);
    }

    #[test]
    fn fallback_seed_makes_matrix_reproducible() {
        let build = || {
            CareerPredictor::load(
                &InMemoryProfessionSource::failing(),
                extractor(FixedSimilarity::uniform(0.5), FixedSentiment::new(0.5)),
                Some(11),
            )
        };
        assert_eq!(build().matrix(), build().matrix());
    }

    #[test]
    fn seeded_predictions_are_reproducible() {
        let predictor = CareerPredictor::new(
            matrix(10),
            extractor(similarity_for(3), FixedSentiment::new(-0.6)),
        )
        .with_seed(99);

        assert_eq!(predictor.predict("numbers"), predictor.predict("numbers"));
    }

    #[test]
    fn scorer_top_k_limits_every_outcome() {
        let predictor = CareerPredictor::new(
            matrix(8),
            extractor(similarity_for(0), FixedSentiment::new(0.8)),
        )
        .with_scorer(ProfessionScorer::new(3));

        assert_eq!(predictor.predict("maths").len(), 3);
        assert_eq!(predictor.predict("").len(), 3);
    }
}
