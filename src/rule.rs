//! Core traits for rule definitions and rule context.

use crate::ast::Expr;
use crate::diagnostic::{Diagnostic, Severity};
use dyn_clone::DynClone;
use std::borrow::Borrow;
use std::fmt::Debug;

/// A generic trait which describes things common to a rule regardless of what
/// it runs on.
///
/// Unlike a hand-declared lint, the rules in this crate are synthesized from
/// deprecation table entries at store construction, so names and docs are
/// owned by the rule instance rather than being `'static` literals.
pub trait Rule: Debug + DynClone + Send + Sync {
    /// A unique, kebab-case name for the rule.
    fn name(&self) -> &str;
    /// The name of the group this rule belongs to.
    fn group(&self) -> &'static str;
    /// Optional docs for the rule, an empty string by default.
    fn docs(&self) -> &str {
        ""
    }
}

/// The main type of rule run by the runner. The rule takes individual
/// nodes of the host-supplied syntax tree and checks them.
///
/// Rules must all be [`Send`] + [`Sync`] so a host may lint files in parallel.
pub trait AstRule: Rule {
    /// Check an individual node in the syntax tree.
    ///
    /// The return type is `Option<()>` to allow usage of `?` on the optional
    /// properties of nodes. A node whose shape does not match is a silent
    /// non-match, never an error.
    fn check_node(&self, node: &Expr, ctx: &mut RuleCtx) -> Option<()>;
}

dyn_clone::clone_trait_object!(Rule);
dyn_clone::clone_trait_object!(AstRule);

/// The level configured for a rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleLevel {
    Warning,
    Error,
}

/// Context given to a rule when running it.
#[derive(Debug, Clone)]
pub struct RuleCtx {
    /// The file id of the file being linted.
    pub file_id: usize,
    /// Whether the host asked for more (potentially spammy) context in
    /// diagnostics.
    pub verbose: bool,
    /// An empty vector of diagnostics which the rule adds to.
    pub diagnostics: Vec<Diagnostic>,
}

impl RuleCtx {
    pub fn new(file_id: usize, verbose: bool) -> Self {
        Self {
            file_id,
            verbose,
            diagnostics: vec![],
        }
    }

    /// Make a new error diagnostic builder.
    pub fn err(&mut self, code: impl Into<String>, message: impl Into<String>) -> Diagnostic {
        Diagnostic::error(self.file_id, code.into(), message.into())
    }

    pub fn add_err(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic)
    }
}

/// The result of running a single rule on a syntax tree.
#[derive(Debug, Clone)]
pub struct RuleResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl RuleResult {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get the result of running this rule.
    pub fn outcome(&self) -> Outcome {
        Outcome::from(&self.diagnostics)
    }
}

/// The overall result of running a single rule or linting a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Running the rule resulted in one or more errors.
    Failure,
    /// Running the rule resulted in one or more warnings.
    Warning,
    /// Running the rule resulted in no errors or warnings.
    Success,
}

impl<T> From<T> for Outcome
where
    T: IntoIterator,
    T::Item: Borrow<Diagnostic>,
{
    fn from(diagnostics: T) -> Self {
        let mut outcome = Outcome::Success;
        for diagnostic in diagnostics {
            match diagnostic.borrow().severity {
                Severity::Error => outcome = Outcome::Failure,
                Severity::Warning if outcome != Outcome::Failure => outcome = Outcome::Warning,
                _ => {}
            }
        }
        outcome
    }
}

impl Outcome {
    pub fn merge(outcomes: impl IntoIterator<Item = impl Borrow<Outcome>>) -> Outcome {
        let mut overall = Outcome::Success;
        for outcome in outcomes {
            match outcome.borrow() {
                Outcome::Failure => overall = Outcome::Failure,
                Outcome::Warning if overall != Outcome::Failure => overall = Outcome::Warning,
                _ => {}
            }
        }
        overall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_prefers_failure_over_warning() {
        let diagnostics = vec![
            Diagnostic::warning(0, "pluck", "use Array#map"),
            Diagnostic::error(0, "where", "use Array#filter"),
        ];
        assert_eq!(Outcome::from(&diagnostics), Outcome::Failure);
        assert_eq!(
            Outcome::merge([Outcome::Success, Outcome::Warning]),
            Outcome::Warning
        );
    }
}
