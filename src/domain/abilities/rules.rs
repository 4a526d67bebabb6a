//! Inference rules and the rule table.
//!
//! A rule is a tagged union with one variant per rule kind. Each variant
//! carries only the fields its kind needs, so the engine's dispatch is an
//! exhaustive `match` rather than a probe for optional keys.
//!
//! Rule tables are static: the built-in knowledge base is constructed once
//! on first use, and custom tables are loaded once from YAML.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::Aspect;

/// Mapping from aspect name to a signed value (a delta or a suppression factor).
///
/// Keys are kept as names: an entry naming an aspect outside the taxonomy is
/// skipped when the rule is applied rather than rejected at load time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Effects(BTreeMap<String, f64>);

impl Effects {
    /// An empty effect set.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries whose key names a known aspect.
    pub fn resolved(&self) -> impl Iterator<Item = (Aspect, f64)> + '_ {
        self.0
            .iter()
            .filter_map(|(name, value)| Aspect::from_name(name).map(|a| (a, *value)))
    }

    /// Raw value for an aspect name, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Effects {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Builds an [`Effects`] set from `(aspect name, value)` pairs.
pub fn effects(pairs: &[(&str, f64)]) -> Effects {
    pairs.iter().map(|(name, value)| (*name, *value)).collect()
}

/// Rule kind, used for reporting which rules fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Major,
    Interest,
    Mbti,
    Challenge,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "Major"),
            Self::Interest => write!(f, "Interest"),
            Self::Mbti => write!(f, "MBTI"),
            Self::Challenge => write!(f, "Challenge"),
        }
    }
}

/// A single inference rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Fires when any alias is a case-insensitive substring of the major.
    /// Only the first matching major rule is applied.
    Major { aliases: Vec<String>, effects: Effects },

    /// Fires once per interest phrase that contains any alias
    /// (case-insensitive substring).
    Interest { aliases: Vec<String>, effects: Effects },

    /// Fires once per occurrence of `letter` in the MBTI code.
    Mbti { letter: char, effects: Effects },

    /// Fires when a challenge phrase equals `phrase` exactly. Suppression is
    /// applied before the direct effects.
    Challenge {
        phrase: String,
        #[serde(default)]
        suppression: Effects,
        #[serde(default)]
        direct_effects: Effects,
    },
}

impl Rule {
    pub fn major(aliases: &[&str], effects: Effects) -> Self {
        Rule::Major {
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            effects,
        }
    }

    pub fn interest(aliases: &[&str], effects: Effects) -> Self {
        Rule::Interest {
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            effects,
        }
    }

    pub fn mbti(letter: char, effects: Effects) -> Self {
        Rule::Mbti { letter, effects }
    }

    pub fn challenge(phrase: &str, suppression: Effects, direct_effects: Effects) -> Self {
        Rule::Challenge {
            phrase: phrase.to_string(),
            suppression,
            direct_effects,
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Major { .. } => RuleKind::Major,
            Rule::Interest { .. } => RuleKind::Interest,
            Rule::Mbti { .. } => RuleKind::Mbti,
            Rule::Challenge { .. } => RuleKind::Challenge,
        }
    }
}

/// Returns true if any alias occurs in `text`, ignoring case.
pub(crate) fn matches_any_alias(aliases: &[String], text: &str) -> bool {
    let haystack = text.to_lowercase();
    aliases
        .iter()
        .any(|alias| haystack.contains(&alias.to_lowercase()))
}

/// Errors that can occur while loading a rule table.
#[derive(Debug, Error)]
pub enum RuleTableError {
    #[error("Failed to read rule table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse rule table: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Rule {index} ({kind}) has an empty condition")]
    EmptyCondition { index: usize, kind: RuleKind },
}

/// Ordered, immutable collection of rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates a table, rejecting rules whose condition could never be
    /// meaningful (an empty alias matches every text).
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleTableError> {
        for (index, rule) in rules.iter().enumerate() {
            let empty = match rule {
                Rule::Major { aliases, .. } | Rule::Interest { aliases, .. } => {
                    aliases.is_empty() || aliases.iter().any(|a| a.trim().is_empty())
                }
                Rule::Mbti { letter, .. } => letter.is_whitespace(),
                Rule::Challenge { phrase, .. } => phrase.trim().is_empty(),
            };
            if empty {
                return Err(RuleTableError::EmptyCondition {
                    index,
                    kind: rule.kind(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Wraps rules that are known to be well-formed (the built-in table).
    pub(crate) fn from_rules_unchecked(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parses a YAML sequence of tagged rules.
    ///
    /// ```yaml
    /// - kind: major
    ///   aliases: ["Physics", "PHY"]
    ///   effects: { "Mathematical Skills": 0.5 }
    /// - kind: challenge
    ///   phrase: "dislikes group projects"
    ///   suppression: { "Teamwork": 0.2 }
    ///   direct_effects: { "Teamwork": -0.2 }
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleTableError> {
        let rules: Vec<Rule> = serde_yaml::from_str(yaml)?;
        Self::new(rules)
    }

    /// Reads and parses a YAML rule table from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RuleTableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules of the given kind.
    pub fn count_of(&self, kind: RuleKind) -> usize {
        self.rules.iter().filter(|r| r.kind() == kind).count()
    }
}
