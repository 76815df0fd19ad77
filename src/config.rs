//! Rule selection configuration.
//!
//! Discovery and reading of config files stays with the host; this module
//! only parses config text and applies it to a [`RuleStore`]. Rule names may
//! be written in camelCase (the canonical function name) or kebab-case (the
//! rule name), both select the same rule.

use crate::rule::RuleLevel;
use crate::store::RuleStore;
use crate::util::find_best_match_for_name;
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Config {
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct RulesConfig {
    /// Rules to run at the error level. Empty means "all rules".
    pub errors: Vec<String>,
    /// Rules to run at the warning level.
    pub warnings: Vec<String>,
    /// Rules excluded from the run entirely.
    pub allowed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(String),
    #[error("unknown rule `{name}`, did you mean `{suggestion}`?")]
    UnknownRuleWithSuggestion { name: String, suggestion: String },
    #[error("unknown rule `{name}`")]
    UnknownRule { name: String },
}

impl Config {
    /// Parse a config from TOML text.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// The level a rule should be reported at.
    pub fn rule_level(&self, name: &str) -> RuleLevel {
        let name = name.to_kebab_case();
        if self.rules.warnings.iter().any(|warning| warning.to_kebab_case() == name) {
            RuleLevel::Warning
        } else {
            RuleLevel::Error
        }
    }

    /// Narrow `store` down to the rules this config selects.
    ///
    /// With empty `errors` and `warnings` lists every rule stays, minus the
    /// `allowed` ones. Any name which matches no rule in the store is an
    /// error, with a "did you mean" suggestion where one exists.
    pub fn apply(&self, store: RuleStore) -> Result<RuleStore, ConfigError> {
        let known: Vec<String> = store.names().map(ToOwned::to_owned).collect();
        let resolve = |name: &String| -> Result<String, ConfigError> {
            let kebab = name.to_kebab_case();
            if known.iter().any(|candidate| *candidate == kebab) {
                Ok(kebab)
            } else if let Some(suggestion) =
                find_best_match_for_name(known.iter().map(String::as_str), &kebab, None)
            {
                Err(ConfigError::UnknownRuleWithSuggestion {
                    name: name.clone(),
                    suggestion: suggestion.to_string(),
                })
            } else {
                Err(ConfigError::UnknownRule { name: name.clone() })
            }
        };

        let mut selected: Vec<String> = Vec::new();
        for name in self.rules.errors.iter().chain(&self.rules.warnings) {
            selected.push(resolve(name)?);
        }
        let allowed = self
            .rules
            .allowed
            .iter()
            .map(resolve)
            .collect::<Result<Vec<_>, _>>()?;

        let mut narrowed = RuleStore::new();
        narrowed.load_rules(store.rules.into_iter().filter(|rule| {
            let name = rule.name();
            let wanted = selected.is_empty() || selected.iter().any(|s| s == name);
            wanted && !allowed.iter().any(|a| a == name)
        }));
        Ok(narrowed)
    }
}
