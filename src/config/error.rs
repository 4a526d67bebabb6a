//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Burn-in ({burnin}) must be smaller than the sample count ({n_samples})")]
    BurninTooLong { burnin: usize, n_samples: usize },

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("min_sigma exceeds max_sigma")]
    InvalidSigmaRange,

    #[error("Initial step size must be within [0.001, 0.5]")]
    InvalidStepSize,

    #[error("Target acceptance must be within (0, 1)")]
    InvalidTargetAcceptance,

    #[error("top_k must be at least 1")]
    InvalidTopK,

    #[error("Invalid log format '{0}', expected 'text' or 'json'")]
    InvalidLogFormat(String),
}
