//! Prediction Module - Free text to ranked professions.
//!
//! # Components
//!
//! - `TendencySample` - Per-aspect signed strength extracted from text
//! - `PosteriorEstimator` - Metropolis-Hastings smoothing of the samples
//! - `ProfessionMatrix` - Named profession rows over the aspect taxonomy
//! - `ProfessionScorer` - Projection, normalisation and top-k ranking

mod posterior;
mod professions;
mod scorer;
mod tendency;

pub use posterior::{
    adapt_step_size, direct_mapping, PosteriorEstimate, PosteriorEstimator, SamplerSettings,
    BURNIN, INITIAL_STEP_SIZE, MAX_SIGMA, MIN_SIGMA, N_SAMPLES, PRIOR_SIGMA, STEP_SIZE_MAX,
    STEP_SIZE_MIN, TARGET_ACCEPTANCE,
};
pub use professions::{ProfessionMatrix, FALLBACK_PROFESSIONS};
pub use scorer::{
    normalize, ProfessionScore, ProfessionScorer, RankedProfessions, DEFAULT_TOP_K, NEUTRAL_SCORE,
};
pub use tendency::{rescale, samples_from_signals, segment_text, TendencySample, TENDENCY_BOUND};
