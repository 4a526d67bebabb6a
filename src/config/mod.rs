//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAREER_COMPASS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use career_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Professions loaded from {}", config.predictor.professions_path);
//! ```

mod error;
mod logging;
mod predictor;
mod rules;
mod sampler;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use predictor::PredictorConfig;
pub use rules::RulesConfig;
pub use sampler::SamplerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Posterior sampler configuration
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// Profession table and ranking
    #[serde(default)]
    pub predictor: PredictorConfig,

    /// Ability rule table source
    #[serde(default)]
    pub rules: RulesConfig,

    /// Log output for the binary
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAREER_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAREER_COMPASS__SAMPLER__SEED=42` -> `sampler.seed = 42`
    /// - `CAREER_COMPASS__PREDICTOR__PROFESSIONS_PATH=...` -> `predictor.professions_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sampler.validate()?;
        self.predictor.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
