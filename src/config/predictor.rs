//! Career predictor configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::prediction::DEFAULT_TOP_K;

/// Profession table and ranking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// CSV file with the profession feature matrix
    #[serde(default = "default_professions_path")]
    pub professions_path: String,

    /// Number of professions returned
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Seed for the synthetic fallback matrix
    pub fallback_seed: Option<u64>,

    /// Exponent applied when rescaling text signals
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

impl PredictorConfig {
    /// Validate predictor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.professions_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PREDICTOR__PROFESSIONS_PATH"));
        }

        if self.top_k == 0 {
            return Err(ValidationError::InvalidTopK);
        }

        if self.gamma.is_nan() || self.gamma <= 0.0 {
            return Err(ValidationError::NonPositive("gamma"));
        }

        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            professions_path: default_professions_path(),
            top_k: default_top_k(),
            fallback_seed: None,
            gamma: default_gamma(),
        }
    }
}

fn default_professions_path() -> String {
    "weights.csv".to_string()
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_gamma() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictor_defaults() {
        let config = PredictorConfig::default();
        assert_eq!(config.professions_path, "weights.csv");
        assert_eq!(config.top_k, 10);
        assert_eq!(config.gamma, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_gamma() {
        let config = PredictorConfig {
            gamma: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NonPositive("gamma")));

        let config = PredictorConfig {
            gamma: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_top_k() {
        let config = PredictorConfig {
            top_k: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTopK));
    }

    #[test]
    fn test_validation_empty_path() {
        let config = PredictorConfig {
            professions_path: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
