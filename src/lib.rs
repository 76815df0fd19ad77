//! Lint rules flagging calls to deprecated lodash and underscore functions.
//!
//! The crate is a rule plugin, not a linter: it owns a deprecation table
//! (function name → reasons) and synthesizes one rule per entry, named after
//! the kebab-cased function name. A host owns parsing and drives the rules
//! over the [`ast`] node contract; a rule reports a finding whenever a call
//! expression invokes its function through one of the known library aliases
//! (`_`, `lodash`, `underscore`), with the entry's reasons joined by `", "`
//! as the message.
//!
//! ## Using the runner
//!
//! Build a [`RuleStore`] — [`RuleStore::builtins`] for the builtin table, or
//! [`RuleStore::from_table`] for one you supply — then hand each file's
//! syntax tree to [`lint_ast`].
//!
//! ## Running a single rule
//!
//! Look a rule up with [`get_rule_by_name`] or [`RuleStore::get`] and run it
//! in full on a tree with [`run_rule`]. Rules never fail: a node whose shape
//! does not match (a bare identifier callee, a computed member access, ...)
//! is a silent non-match, by design.

mod rule;
mod store;
mod testing;
mod util;

pub mod ast;
pub mod config;
pub mod deprecations;
pub mod diagnostic;
pub mod rules;

pub use self::{
    config::{Config, ConfigError, RulesConfig},
    deprecations::{builtin_table, Alias, DeprecationEntry, DeprecationTable, TableError},
    diagnostic::{Diagnostic, FileSpan, Severity},
    rule::{AstRule, Outcome, Rule, RuleCtx, RuleLevel, RuleResult},
    store::RuleStore,
};

use crate::ast::Expr;
use log::trace;
use std::collections::HashMap;

/// The result of linting a file.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// The diagnostics emitted by each rule run, keyed by rule name.
    pub rule_results: HashMap<String, RuleResult>,
    pub file_id: usize,
    pub verbose: bool,
}

impl LintResult {
    /// All diagnostics thrown during linting, rule by rule.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.rule_results
            .values()
            .flat_map(|result| result.diagnostics.iter())
    }

    /// The overall outcome of linting this file.
    pub fn outcome(&self) -> Outcome {
        Outcome::merge(self.rule_results.values().map(|result| result.outcome()))
    }
}

/// Lint a syntax tree with every rule in a store.
pub fn lint_ast(file_id: usize, root: &Expr, store: &RuleStore, verbose: bool) -> LintResult {
    let rule_results = store
        .rules
        .iter()
        .map(|rule| {
            (
                rule.name().to_string(),
                run_rule(&**rule, file_id, root, verbose),
            )
        })
        .collect();

    LintResult {
        rule_results,
        file_id,
        verbose,
    }
}

/// Run a single rule on an entire syntax tree.
pub fn run_rule(rule: &dyn AstRule, file_id: usize, root: &Expr, verbose: bool) -> RuleResult {
    trace!("running rule `{}`", rule.name());
    let mut ctx = RuleCtx::new(file_id, verbose);
    for node in root.descendants() {
        rule.check_node(node, &mut ctx);
    }
    RuleResult::new(ctx.diagnostics)
}

/// Get a builtin rule by its kebab-case name.
pub fn get_rule_by_name(name: &str) -> Option<Box<dyn AstRule>> {
    RuleStore::new().builtins().get(name)
}

/// Get a builtin rule's documentation.
pub fn get_rule_docs(name: &str) -> Option<String> {
    get_rule_by_name(name).map(|rule| rule.docs().to_string())
}

/// Get a suggestion for an incorrect rule name for things such as
/// "did you mean ...?".
pub fn get_rule_suggestion(incorrect_rule_name: &str) -> Option<String> {
    let store = RuleStore::new().builtins();
    util::find_best_match_for_name(store.names(), incorrect_rule_name, None)
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Ident;

    // underscore.pluck(list, "id") next to an unrelated call
    fn file_root() -> Expr {
        Expr::other(
            vec![
                Expr::call(
                    Expr::member(
                        Expr::ident("underscore", 0..10),
                        Ident::new("pluck", 11..16),
                        0..16,
                    ),
                    vec![Expr::ident("list", 17..21), Expr::ident("id", 23..27)],
                    0..28,
                ),
                Expr::call(Expr::ident("render", 30..36), vec![], 30..38),
            ],
            0..38,
        )
    }

    #[test]
    fn linting_a_file_reports_under_the_offending_rule() {
        let store = RuleStore::new().builtins();
        let result = lint_ast(7, &file_root(), &store, false);

        assert_eq!(result.outcome(), Outcome::Failure);
        let diagnostics: Vec<&Diagnostic> = result.diagnostics().collect();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code.as_deref(), Some("pluck"));
        assert_eq!(diagnostics[0].file_id, 7);
        assert_eq!(
            diagnostics[0].title,
            "removed in lodash 4, use Array#map with a property accessor"
        );
        assert!(result.rule_results["pluck"].outcome() == Outcome::Failure);
        assert!(result.rule_results["where"].diagnostics.is_empty());
    }

    #[test]
    fn a_clean_tree_lints_successfully() {
        let store = RuleStore::new().builtins();
        let root = Expr::call(Expr::ident("render", 0..6), vec![], 0..8);
        let result = lint_ast(0, &root, &store, false);
        assert_eq!(result.outcome(), Outcome::Success);
        assert_eq!(result.diagnostics().count(), 0);
    }

    #[test]
    fn builtin_rules_are_reachable_by_name() {
        assert!(get_rule_by_name("pad-left").is_some());
        assert!(get_rule_by_name("padLeft").is_none());
        assert!(get_rule_docs("pluck").unwrap().contains("pluck"));
        assert_eq!(get_rule_suggestion("pluckk"), Some("pluck".to_string()));
    }
}
