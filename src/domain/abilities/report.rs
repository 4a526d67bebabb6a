//! Ability report - structured output of an assessment.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::rules::RuleKind;
use crate::domain::foundation::{Aspect, AspectVector};

/// Width of the aspect name column in the rendered report.
pub const REPORT_NAME_WIDTH: usize = 25;

/// A rule that fired during inference, with the text that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFiring {
    pub kind: RuleKind,
    pub trigger: String,
}

impl RuleFiring {
    pub fn new(kind: RuleKind, trigger: impl Into<String>) -> Self {
        Self {
            kind,
            trigger: trigger.into(),
        }
    }
}

/// Ordered `(aspect, score)` pairs plus the trace of fired rules.
///
/// Scores are sorted by descending value; ties keep taxonomy order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityReport {
    scores: Vec<(Aspect, f64)>,
    fired: Vec<RuleFiring>,
}

impl AbilityReport {
    pub fn new(abilities: &AspectVector, fired: Vec<RuleFiring>) -> Self {
        let mut scores: Vec<(Aspect, f64)> = abilities.iter().collect();
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        Self { scores, fired }
    }

    /// Scores in descending order.
    pub fn scores(&self) -> &[(Aspect, f64)] {
        &self.scores
    }

    /// Rules that fired, in application order.
    pub fn fired(&self) -> &[RuleFiring] {
        &self.fired
    }

    /// Score for a single aspect.
    pub fn score(&self, aspect: Aspect) -> f64 {
        self.scores
            .iter()
            .find(|(a, _)| *a == aspect)
            .map(|(_, s)| *s)
            .unwrap_or(0.0)
    }

    /// Highest-scoring aspect.
    pub fn strongest(&self) -> Option<Aspect> {
        self.scores.first().map(|(a, _)| *a)
    }

    /// Lowest-scoring aspect.
    pub fn weakest(&self) -> Option<Aspect> {
        self.scores.last().map(|(a, _)| *a)
    }
}

/// One line per aspect: `"<name padded to 25> <+0.00>"`.
impl fmt::Display for AbilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (aspect, score)) in self.scores.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<width$} {:+.2}",
                aspect.name(),
                score,
                width = REPORT_NAME_WIDTH
            )?;
        }
        Ok(())
    }
}
