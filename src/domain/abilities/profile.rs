//! User profile supplied by the dialogue collaborator.

use serde::{Deserialize, Serialize};

use super::challenges::ChallengeCatalog;
use crate::domain::foundation::AspectVector;

/// Answers meaning "no MBTI code", compared case-insensitively.
const UNKNOWN_MBTI_ANSWERS: &[&str] = &[
    "i don't know",
    "i dont know",
    "not sure",
    "unknown",
    "不知道",
];

/// Structured facts about a user, plus the ability vector inferred from them.
///
/// The ability vector starts at zero and is written only by the rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub major: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_mbti")]
    pub mbti: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default, skip_deserializing)]
    abilities: AspectVector,
}

impl UserProfile {
    /// Creates a profile. The MBTI code is upper-cased and trimmed.
    pub fn new(
        major: impl Into<String>,
        interests: Vec<String>,
        mbti: &str,
        challenges: Vec<String>,
    ) -> Self {
        Self {
            major: major.into(),
            interests,
            mbti: normalize_mbti(mbti),
            challenges,
            abilities: AspectVector::ZERO,
        }
    }

    /// Builds a profile from raw dialogue answers.
    ///
    /// - `interests` is a comma separated list; entries are trimmed and empty
    ///   entries dropped.
    /// - `mbti` answers such as "I don't know" or "not sure" mean no code.
    /// - `challenge_codes` is a comma separated list of menu codes resolved
    ///   through [`ChallengeCatalog`].
    pub fn from_answers(major: &str, interests: &str, mbti: &str, challenge_codes: &str) -> Self {
        let interests = interests
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let mbti = if UNKNOWN_MBTI_ANSWERS.contains(&mbti.trim().to_lowercase().as_str()) {
            ""
        } else {
            mbti
        };

        Self::new(
            major.trim(),
            interests,
            mbti,
            ChallengeCatalog::resolve_selection(challenge_codes),
        )
    }

    /// The inferred ability vector (all zero until assessed).
    pub fn abilities(&self) -> &AspectVector {
        &self.abilities
    }

    /// Seeds the ability vector before assessment, e.g. when resuming from a
    /// previously assessed profile.
    pub fn with_initial_abilities(mut self, abilities: AspectVector) -> Self {
        self.abilities = abilities;
        self
    }

    pub(crate) fn set_abilities(&mut self, abilities: AspectVector) {
        self.abilities = abilities;
    }
}

fn normalize_mbti(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn deserialize_mbti<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_mbti(&raw))
}
