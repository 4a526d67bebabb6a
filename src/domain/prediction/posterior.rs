//! Posterior estimator - Metropolis-Hastings smoothing of tendency samples.
//!
//! A random-walk chain over the 10-dimensional weight vector `W`:
//!
//! ```text
//! log p(W | data) = -0.5 * |W|^2 / sigma0^2
//!                 + sum over (j, w) in data of -0.5 * (w - W[j])^2 / sigma^2
//! ```
//!
//! The chain starts at zero, proposes `W + N(0, step^2 I)`, adapts the step
//! every 100 iterations toward a 0.44 acceptance rate, and returns the mean
//! of the post-burn-in samples. This is a bounded damping procedure, not
//! exact inference: the iteration count is fixed, so cost is bounded.
//!
//! All chain state is local to one [`PosteriorEstimator::estimate`] call and
//! the random source is injected, so a fixed seed reproduces the estimate.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tendency::TendencySample;
use crate::domain::foundation::{AspectVector, ASPECT_COUNT};

/// Standard deviation of the zero-mean Gaussian prior.
pub const PRIOR_SIGMA: f64 = 1.0;
/// Total chain length.
pub const N_SAMPLES: usize = 1000;
/// Iterations discarded before collecting samples.
pub const BURNIN: usize = 200;
/// Initial proposal standard deviation.
pub const INITIAL_STEP_SIZE: f64 = 0.05;
/// Lower bound of the refined noise scale.
pub const MIN_SIGMA: f64 = 0.01;
/// Upper bound of the refined noise scale.
pub const MAX_SIGMA: f64 = 2.0;
/// Acceptance rate the step-size adaptation aims for.
pub const TARGET_ACCEPTANCE: f64 = 0.44;

/// Bounds of the adapted proposal step size.
pub const STEP_SIZE_MIN: f64 = 0.001;
pub const STEP_SIZE_MAX: f64 = 0.5;

/// Iterations between step-size adaptations.
const ADAPT_INTERVAL: usize = 100;
/// Noise scale used by the likelihood during sampling.
const INITIAL_NOISE_SIGMA: f64 = 1.0;
/// Clip range for the log acceptance ratio.
const LOG_ALPHA_MIN: f64 = -50.0;
const LOG_ALPHA_MAX: f64 = 10.0;
/// Scores below this magnitude carry no signal.
const SIGNAL_EPSILON: f64 = 1e-10;

/// Tunables of the sampler. Defaults are the reference constants; changing
/// any of them changes convergence behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerSettings {
    pub prior_sigma: f64,
    pub n_samples: usize,
    pub burnin: usize,
    pub initial_step_size: f64,
    pub min_sigma: f64,
    pub max_sigma: f64,
    pub target_acceptance: f64,
    /// Emit a diagnostic summary after each sampled estimate.
    pub verbose: bool,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            prior_sigma: PRIOR_SIGMA,
            n_samples: N_SAMPLES,
            burnin: BURNIN,
            initial_step_size: INITIAL_STEP_SIZE,
            min_sigma: MIN_SIGMA,
            max_sigma: MAX_SIGMA,
            target_acceptance: TARGET_ACCEPTANCE,
            verbose: false,
        }
    }
}

/// Result of one estimation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorEstimate {
    /// Posterior mean, or the direct mapping when sampling was skipped.
    pub mean: AspectVector,
    /// Noise scale refined from the residuals (1.0 when not refined).
    pub sigma: f64,
    /// Accepted proposals divided by total iterations.
    pub acceptance_rate: f64,
    /// Proposal step size after the last adaptation.
    pub final_step_size: f64,
    /// Chain iterations run; zero on the direct-mapping path.
    pub iterations: usize,
}

impl PosteriorEstimate {
    fn direct(samples: &[TendencySample], step_size: f64) -> Self {
        Self {
            mean: direct_mapping(samples),
            sigma: INITIAL_NOISE_SIGMA,
            acceptance_rate: 0.0,
            final_step_size: step_size,
            iterations: 0,
        }
    }

    /// True when the chain actually ran.
    pub fn was_sampled(&self) -> bool {
        self.iterations > 0
    }
}

/// Places each in-range sample's score at its aspect index.
///
/// Later samples for the same index overwrite earlier ones; aspects with no
/// sample stay at zero.
pub fn direct_mapping(samples: &[TendencySample]) -> AspectVector {
    let mut v = AspectVector::ZERO;
    for s in samples.iter().filter(|s| s.in_range()) {
        v[s.aspect_index] = s.score;
    }
    v
}

/// One adaptation step: shrink below 80% of target, grow above 120%, then
/// clip to `[STEP_SIZE_MIN, STEP_SIZE_MAX]`.
pub fn adapt_step_size(step_size: f64, acceptance_rate: f64, target: f64) -> f64 {
    let adjusted = if acceptance_rate < target * 0.8 {
        step_size * 0.9
    } else if acceptance_rate > target * 1.2 {
        step_size * 1.1
    } else {
        step_size
    };
    adjusted.clamp(STEP_SIZE_MIN, STEP_SIZE_MAX)
}

/// Population standard deviation.
fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}

/// Metropolis-Hastings estimator. Holds configuration only.
#[derive(Debug, Clone, Default)]
pub struct PosteriorEstimator {
    settings: SamplerSettings,
}

impl PosteriorEstimator {
    pub fn new(settings: SamplerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SamplerSettings {
        &self.settings
    }

    /// Log posterior density of `w`. Any NaN or infinite result becomes
    /// negative infinity, which rejects the proposal.
    pub fn log_posterior(&self, w: &AspectVector, samples: &[TendencySample], sigma: f64) -> f64 {
        let log_prior = -0.5 * w.norm_squared() / self.settings.prior_sigma.powi(2);

        let log_likelihood: f64 = samples
            .iter()
            .filter(|s| s.in_range())
            .map(|s| {
                let residual = s.score - w[s.aspect_index];
                -0.5 * residual.powi(2) / sigma.powi(2)
            })
            .sum();

        let result = log_prior + log_likelihood;
        if result.is_finite() {
            result
        } else {
            f64::NEG_INFINITY
        }
    }

    /// Smooths tendency samples into a posterior weight vector.
    ///
    /// Skips sampling entirely when there is no sample or every score is
    /// effectively zero, returning the direct mapping.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        samples: &[TendencySample],
        rng: &mut R,
    ) -> PosteriorEstimate {
        let s = &self.settings;

        if samples.iter().all(|x| x.score.abs() < SIGNAL_EPSILON) {
            if s.verbose {
                debug!("all tendency scores are zero, using direct mapping");
            }
            return PosteriorEstimate::direct(samples, s.initial_step_size);
        }

        let sigma = INITIAL_NOISE_SIGMA;
        let mut w = AspectVector::ZERO;
        let mut current_log_p = self.log_posterior(&w, samples, sigma);
        let mut step_size = s.initial_step_size;
        let mut accepted = 0usize;

        let mut sum = [0.0f64; ASPECT_COUNT];
        let mut collected = 0usize;

        for iteration in 0..s.n_samples {
            let mut proposal = w;
            for i in 0..ASPECT_COUNT {
                let z: f64 = rng.sample(StandardNormal);
                proposal[i] += z * step_size;
            }

            let proposal_log_p = self.log_posterior(&proposal, samples, sigma);
            let log_alpha = (proposal_log_p - current_log_p).clamp(LOG_ALPHA_MIN, LOG_ALPHA_MAX);

            if log_alpha > 0.0 || rng.gen::<f64>() < log_alpha.exp() {
                w = proposal;
                current_log_p = proposal_log_p;
                accepted += 1;
            }

            if iteration >= s.burnin {
                for (acc, value) in sum.iter_mut().zip(w.as_slice()) {
                    *acc += value;
                }
                collected += 1;
            }

            if iteration > 0 && iteration % ADAPT_INTERVAL == 0 {
                let rate = accepted as f64 / iteration as f64;
                step_size = adapt_step_size(step_size, rate, s.target_acceptance);
            }
        }

        if collected == 0 {
            if s.verbose {
                debug!("no post-burn-in samples collected, using direct mapping");
            }
            return PosteriorEstimate::direct(samples, step_size);
        }

        let mean = AspectVector::new(sum.map(|total| total / collected as f64));
        let sigma = self.refine_sigma(samples, &mean).unwrap_or(sigma);
        let acceptance_rate = accepted as f64 / s.n_samples as f64;

        if s.verbose {
            debug!(
                sigma,
                mean = mean.mean(),
                acceptance_rate,
                final_step_size = step_size,
                "posterior sampling completed"
            );
        }

        PosteriorEstimate {
            mean,
            sigma,
            acceptance_rate,
            final_step_size: step_size,
            iterations: s.n_samples,
        }
    }

    /// Noise scale from residuals against the posterior mean, floored by a
    /// sample-size shrinkage term and clipped to `[min_sigma, max_sigma]`.
    fn refine_sigma(&self, samples: &[TendencySample], mean: &AspectVector) -> Option<f64> {
        let residuals: Vec<f64> = samples
            .iter()
            .filter(|s| s.in_range())
            .map(|s| s.score - mean[s.aspect_index])
            .collect();
        if residuals.is_empty() {
            return None;
        }

        let shrinkage = (0.8 / (samples.len() as f64).sqrt()).max(0.1);
        let sigma = std_dev(&residuals)
            .max(shrinkage)
            .max(self.settings.min_sigma)
            .min(self.settings.max_sigma);
        Some(sigma)
    }
}
