//! A rule store, which houses the rules for a linting run.

use crate::deprecations::{DeprecationTable, TableError};
use crate::rules::{deprecations, DeprecatedCall};
use crate::rule::Rule;
use crate::AstRule;
use log::debug;
use std::collections::BTreeMap;

/// A utility structure for housing rules for a linting run.
///
/// Stores are built explicitly by the host, either from the builtin table or
/// from a table it supplies, and passed around by reference from there on.
#[derive(Debug, Default, Clone)]
pub struct RuleStore {
    pub rules: Vec<Box<dyn AstRule>>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rules synthesized from the builtin deprecation table.
    pub fn builtins(mut self) -> Self {
        self.rules.extend(deprecations());
        self
    }

    /// Synthesize one rule per entry of `table`.
    ///
    /// Fails fast on entries with no reasons and on two functions whose
    /// kebab-cased rule names collide, instead of silently keeping the later
    /// entry.
    ///
    /// # Examples
    /// ```
    /// use lodash_deprecate::{DeprecationEntry, DeprecationTable, RuleStore};
    ///
    /// let mut table = DeprecationTable::new();
    /// table.insert("pluck", DeprecationEntry::new(vec!["use Array#map"]));
    ///
    /// let store = RuleStore::from_table(&table).unwrap();
    /// assert!(store.get("pluck").is_some());
    /// ```
    pub fn from_table(table: &DeprecationTable) -> Result<Self, TableError> {
        let mut store = Self::new();
        let mut seen: BTreeMap<String, String> = BTreeMap::new();

        for (function, entry) in table.iter() {
            if entry.reasons.is_empty() {
                return Err(TableError::EmptyReasons {
                    function: function.clone(),
                });
            }

            let rule = DeprecatedCall::new(function.clone(), entry.reasons.iter().cloned());
            if let Some(first) = seen.insert(rule.name().to_string(), function.clone()) {
                return Err(TableError::DuplicateRule {
                    name: rule.name().to_string(),
                    first,
                    second: function.clone(),
                });
            }

            debug!("synthesized rule `{}` for `{}`", rule.name(), function);
            store.rules.push(Box::new(rule));
        }
        Ok(store)
    }

    /// Load a list of rules into this store.
    pub fn load_rules(&mut self, rules: impl IntoIterator<Item = Box<dyn AstRule>>) {
        self.rules.extend(rules);
    }

    /// Get a rule using its kebab-case rule name from this store.
    ///
    /// # Examples
    /// ```
    /// use lodash_deprecate::RuleStore;
    ///
    /// assert!(RuleStore::new().builtins().get("pluck").is_some())
    /// ```
    pub fn get(&self, rule_name: impl AsRef<str>) -> Option<Box<dyn AstRule>> {
        self.rules
            .iter()
            .find(|rule| rule.name() == rule_name.as_ref())
            .cloned()
    }

    /// The names of all rules in this store, in store order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deprecations::DeprecationEntry;

    #[test]
    fn an_empty_table_yields_an_empty_store() {
        let store = RuleStore::from_table(&DeprecationTable::new()).unwrap();
        assert!(store.rules.is_empty());
    }

    #[test]
    fn every_entry_is_keyed_by_its_kebab_cased_name() {
        let mut table = DeprecationTable::new();
        table.insert("pluck", DeprecationEntry::new(vec!["use Array#map"]));
        table.insert(
            "sortByOrder",
            DeprecationEntry::new(vec!["renamed to orderBy in lodash 4"]),
        );

        let store = RuleStore::from_table(&table).unwrap();
        assert_eq!(store.rules.len(), 2);
        assert!(store.get("pluck").is_some());
        assert!(store.get("sort-by-order").is_some());
        assert!(store.get("sortByOrder").is_none());
    }

    #[test]
    fn colliding_rule_names_fail_synthesis() {
        let mut table = DeprecationTable::new();
        table.insert("indexBy", DeprecationEntry::new(vec!["renamed to keyBy"]));
        table.insert("index-by", DeprecationEntry::new(vec!["duplicate"]));

        let err = RuleStore::from_table(&table).unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateRule {
                name: "index-by".into(),
                first: "index-by".into(),
                second: "indexBy".into(),
            }
        );
    }

    #[test]
    fn entries_without_reasons_fail_synthesis() {
        let mut table = DeprecationTable::new();
        table.insert("pluck", DeprecationEntry::new(Vec::<String>::new()));

        assert_eq!(
            RuleStore::from_table(&table).unwrap_err(),
            TableError::EmptyReasons {
                function: "pluck".into()
            }
        );
    }
}
