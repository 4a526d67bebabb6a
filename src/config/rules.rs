//! Rule table configuration

use serde::Deserialize;

/// Where the ability rules come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesConfig {
    /// YAML rule table replacing the built-in one
    pub rules_path: Option<String>,
}

impl RulesConfig {
    /// Path of the custom table, ignoring blank values
    pub fn custom_path(&self) -> Option<&str> {
        self.rules_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
