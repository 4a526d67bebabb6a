//! Abilities Module - Rule-based ability inference.
//!
//! Converts structured profile facts (major, interests, MBTI letters,
//! self-reported challenges) into a bounded ability vector.
//!
//! # Components
//!
//! - `UserProfile` - Profile facts plus the inferred ability vector
//! - `Rule` / `RuleTable` - Tagged-union rules and the ordered table
//! - `RuleEngine` - Ordered passes with diminishing-returns effects
//! - `AbilityReport` - Sorted scores and the trace of fired rules
//! - `ChallengeCatalog` - Numbered challenge menu used by the dialogue layer

mod challenges;
mod engine;
mod knowledge_base;
mod profile;
mod report;
mod rules;

pub use challenges::{ChallengeCatalog, CHALLENGE_PHRASES};
pub use engine::{
    apply_effects, apply_suppression, diminished, RuleEngine, ABILITY_MAX, ABILITY_MIN,
};
pub use knowledge_base::builtin_rule_table;
pub use profile::UserProfile;
pub use report::{AbilityReport, RuleFiring, REPORT_NAME_WIDTH};
pub use rules::{effects, Effects, Rule, RuleKind, RuleTable, RuleTableError};
