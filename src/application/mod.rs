//! Application layer - Use cases over the domain and ports.
//!
//! - `AbilityAssessor` - Profile facts to an ability report
//! - `TendencyExtractor` - Free text to tendency samples via the oracles
//! - `CareerPredictor` - Free text to a ranked profession list, with fallbacks

mod assess_abilities;
mod career_predictor;
mod errors;
mod tendency_extractor;

pub use assess_abilities::{AbilityAssessment, AbilityAssessor};
pub use career_predictor::{
    CareerPredictor, OutcomeKind, PredictionOutcome, DEGENERATE_SCORE, LOW_CONFIDENCE_SCORE,
};
pub use errors::PredictionError;
pub use tendency_extractor::{TendencyExtractor, DEFAULT_GAMMA};
