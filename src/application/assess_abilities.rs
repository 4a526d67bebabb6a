//! AbilityAssessor - Runs the rule engine over a profile.
//!
//! Owns the rule table for the process lifetime: the built-in knowledge base
//! by default, or a YAML table named in configuration.

use std::borrow::Cow;

use serde::Serialize;
use tracing::info;

use crate::config::RulesConfig;
use crate::domain::abilities::{
    builtin_rule_table, AbilityReport, RuleEngine, RuleTable, RuleTableError, UserProfile,
};

/// A profile with its inferred abilities, plus the report.
#[derive(Debug, Clone, Serialize)]
pub struct AbilityAssessment {
    pub profile: UserProfile,
    pub report: AbilityReport,
}

/// Assesses profiles against a fixed rule table.
#[derive(Debug, Clone)]
pub struct AbilityAssessor {
    table: Cow<'static, RuleTable>,
}

impl Default for AbilityAssessor {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AbilityAssessor {
    pub fn builtin() -> Self {
        Self {
            table: Cow::Borrowed(builtin_rule_table()),
        }
    }

    pub fn with_table(table: RuleTable) -> Self {
        Self {
            table: Cow::Owned(table),
        }
    }

    /// Uses the YAML table from `rules_path` when set, the built-in one otherwise.
    ///
    /// # Errors
    ///
    /// Returns `RuleTableError` when the custom table cannot be read or is invalid.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RuleTableError> {
        match config.custom_path() {
            Some(path) => {
                let table = RuleTable::from_yaml_file(path)?;
                info!(path, rules = table.len(), "loaded custom rule table");
                Ok(Self::with_table(table))
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Infers abilities, storing them on the profile.
    pub fn assess(&self, mut profile: UserProfile) -> AbilityAssessment {
        let report = RuleEngine::new(&self.table).apply(&mut profile);
        AbilityAssessment { profile, report }
    }
}
