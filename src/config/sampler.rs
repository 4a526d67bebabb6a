//! Posterior sampler configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::prediction::{
    SamplerSettings, BURNIN, INITIAL_STEP_SIZE, MAX_SIGMA, MIN_SIGMA, N_SAMPLES, PRIOR_SIGMA,
    STEP_SIZE_MAX, STEP_SIZE_MIN, TARGET_ACCEPTANCE,
};

/// Metropolis-Hastings sampler configuration
///
/// Defaults are the calibrated constants; changing them changes how strongly
/// text signals are damped.
#[derive(Debug, Clone, Deserialize)]
pub struct SamplerConfig {
    /// Fixed RNG seed for reproducible estimates. Entropy-seeded when absent.
    pub seed: Option<u64>,

    /// Log sampler diagnostics at debug level
    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "default_n_samples")]
    pub n_samples: usize,

    #[serde(default = "default_burnin")]
    pub burnin: usize,

    #[serde(default = "default_initial_step_size")]
    pub initial_step_size: f64,

    /// Standard deviation of the zero-mean prior
    #[serde(default = "default_prior_sigma")]
    pub prior_sigma: f64,

    #[serde(default = "default_min_sigma")]
    pub min_sigma: f64,

    #[serde(default = "default_max_sigma")]
    pub max_sigma: f64,

    #[serde(default = "default_target_acceptance")]
    pub target_acceptance: f64,
}

impl SamplerConfig {
    /// Estimator settings for this configuration
    pub fn to_settings(&self) -> SamplerSettings {
        SamplerSettings {
            prior_sigma: self.prior_sigma,
            n_samples: self.n_samples,
            burnin: self.burnin,
            initial_step_size: self.initial_step_size,
            min_sigma: self.min_sigma,
            max_sigma: self.max_sigma,
            target_acceptance: self.target_acceptance,
            verbose: self.verbose,
        }
    }

    /// Validate sampler configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.n_samples == 0 {
            return Err(ValidationError::NonPositive("n_samples"));
        }

        if self.burnin >= self.n_samples {
            return Err(ValidationError::BurninTooLong {
                burnin: self.burnin,
                n_samples: self.n_samples,
            });
        }

        if self.prior_sigma <= 0.0 {
            return Err(ValidationError::NonPositive("prior_sigma"));
        }

        if self.min_sigma <= 0.0 {
            return Err(ValidationError::NonPositive("min_sigma"));
        }

        if self.min_sigma > self.max_sigma {
            return Err(ValidationError::InvalidSigmaRange);
        }

        if !(STEP_SIZE_MIN..=STEP_SIZE_MAX).contains(&self.initial_step_size) {
            return Err(ValidationError::InvalidStepSize);
        }

        if self.target_acceptance <= 0.0 || self.target_acceptance >= 1.0 {
            return Err(ValidationError::InvalidTargetAcceptance);
        }

        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            verbose: false,
            n_samples: default_n_samples(),
            burnin: default_burnin(),
            initial_step_size: default_initial_step_size(),
            prior_sigma: default_prior_sigma(),
            min_sigma: default_min_sigma(),
            max_sigma: default_max_sigma(),
            target_acceptance: default_target_acceptance(),
        }
    }
}

fn default_n_samples() -> usize {
    N_SAMPLES
}

fn default_burnin() -> usize {
    BURNIN
}

fn default_initial_step_size() -> f64 {
    INITIAL_STEP_SIZE
}

fn default_prior_sigma() -> f64 {
    PRIOR_SIGMA
}

fn default_min_sigma() -> f64 {
    MIN_SIGMA
}

fn default_max_sigma() -> f64 {
    MAX_SIGMA
}

fn default_target_acceptance() -> f64 {
    TARGET_ACCEPTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_estimator_defaults() {
        let config = SamplerConfig::default();
        assert_eq!(config.to_settings(), SamplerSettings::default());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_verbose_flows_into_settings() {
        let config = SamplerConfig {
            verbose: true,
            ..Default::default()
        };
        assert!(config.to_settings().verbose);
    }

    #[test]
    fn test_validation_burnin_too_long() {
        let config = SamplerConfig {
            burnin: 1000,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::BurninTooLong {
                burnin: 1000,
                n_samples: 1000
            })
        );
    }

    #[test]
    fn test_validation_sigma_range() {
        let config = SamplerConfig {
            min_sigma: 3.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSigmaRange));

        let config = SamplerConfig {
            prior_sigma: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::NonPositive("prior_sigma"))
        );
    }

    #[test]
    fn test_validation_step_size_bounds() {
        let config = SamplerConfig {
            initial_step_size: 0.6,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidStepSize));
    }

    #[test]
    fn test_validation_target_acceptance() {
        let config = SamplerConfig {
            target_acceptance: 1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTargetAcceptance)
        );
    }
}
