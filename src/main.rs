//! career-compass - Assess a profile and rank professions from stdin.
//!
//! Reads one JSON request from stdin:
//!
//! ```json
//! { "profile": { "major": "Physics", "interests": ["chess"], "mbti": "INTJ" },
//!   "text": "I love solving hard maths problems." }
//! ```
//!
//! and writes the ability report and the profession ranking as JSON to
//! stdout. Logs go to stderr.

use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use career_compass::adapters::{LexicalSimilarity, LexiconSentiment};
use career_compass::application::{
    AbilityAssessment, AbilityAssessor, CareerPredictor, PredictionOutcome,
};
use career_compass::config::{AppConfig, LoggingConfig};
use career_compass::domain::abilities::{RuleTableError, UserProfile};

#[derive(Debug, Error)]
enum CliError {
    #[error("rule table: {0}")]
    Rules(#[from] RuleTableError),

    #[error("failed to read request: {0}")]
    Io(#[from] io::Error),

    #[error("invalid request: {0}")]
    Request(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Request {
    profile: Option<UserProfile>,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    abilities: Option<AbilityAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<String>,
    prediction: PredictionOutcome,
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.as_str().into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn run(config: &AppConfig) -> Result<Response, CliError> {
    let assessor = AbilityAssessor::from_config(&config.rules)?;
    let predictor = CareerPredictor::from_config(
        config,
        Arc::new(LexicalSimilarity::new()),
        Arc::new(LexiconSentiment::new()),
    );

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let request: Request = serde_json::from_str(&input)?;

    let abilities = request.profile.map(|p| assessor.assess(p));
    let report = abilities.as_ref().map(|a| a.report.to_string());
    let prediction = predictor.predict_detailed(&request.text);

    Ok(Response {
        abilities,
        report,
        prediction,
    })
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration");
        return ExitCode::FAILURE;
    }

    let response = match run(&config) {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "request failed");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to encode response");
            ExitCode::FAILURE
        }
    }
}
