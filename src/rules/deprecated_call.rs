use crate::ast::Expr;
use crate::deprecations::Alias;
use crate::rule::{AstRule, Rule, RuleCtx};
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};

/// Flags call expressions which invoke one deprecated library function
/// through a known alias (`_`, `lodash` or `underscore`).
///
/// One instance exists per deprecation table entry; the rule name is the
/// kebab-cased function name, so `mapValues` is reported under `map-values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedCall {
    name: String,
    function: String,
    reasons: Vec<String>,
    docs: String,
}

impl DeprecatedCall {
    pub fn new(
        function: impl Into<String>,
        reasons: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let function = function.into();
        let reasons: Vec<String> = reasons.into_iter().map(Into::into).collect();
        let name = function.to_kebab_case();
        let docs = format!(
            "Disallow calls to the deprecated `{}` function through the `_`, \
             `lodash` or `underscore` aliases.\n\n{}",
            function,
            reasons.join(", ")
        );
        Self {
            name,
            function,
            reasons,
            docs,
        }
    }

    /// The canonical function name this rule matches against.
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    fn message(&self) -> String {
        self.reasons.join(", ")
    }
}

impl Rule for DeprecatedCall {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> &'static str {
        "deprecations"
    }

    fn docs(&self) -> &str {
        &self.docs
    }
}

impl AstRule for DeprecatedCall {
    fn check_node(&self, node: &Expr, ctx: &mut RuleCtx) -> Option<()> {
        let call = node.as_call()?;
        let member = call.callee.as_member()?;
        let object = member.object.as_ident()?;
        let prop = member.prop_name()?;
        let alias = Alias::from_ident(&object.name)?;

        if prop.name == self.function {
            let mut err = ctx.err(self.name(), self.message()).primary(call, "");
            if ctx.verbose {
                err = err.footer_note(format!(
                    "the call goes through the `{}` alias",
                    alias.as_str()
                ));
            }
            ctx.add_err(err);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Ident, Span};
    use crate::rule_tests;

    // alias.function(list)
    fn call_through(alias: &str, function: &str) -> Expr {
        let object_end = alias.len();
        let prop_end = object_end + 1 + function.len();
        let call_end = prop_end + 6;
        Expr::call(
            Expr::member(
                Expr::ident(alias, 0..object_end),
                Ident::new(function, object_end + 1..prop_end),
                0..prop_end,
            ),
            vec![Expr::ident("list", prop_end + 1..prop_end + 5)],
            0..call_end,
        )
    }

    rule_tests! {
        DeprecatedCall::new("pluck", vec!["use Array#map"]),
        err: {
            call_through("_", "pluck"),
            call_through("lodash", "pluck"),
            call_through("underscore", "pluck"),
            // nested inside an unmodeled production
            Expr::other(vec![call_through("_", "pluck")], 0..30),
        },
        ok: {
            // some other library exposing the same name
            call_through("ramda", "pluck"),
            // the alias calling a function that is not deprecated
            call_through("_", "map"),
            // bare identifier callee
            Expr::call(Expr::ident("pluck", 0..5), vec![], 0..7),
            // computed member access has no static property name
            Expr::call(
                Expr::computed_member(
                    Expr::ident("_", 0..1),
                    Expr::ident("key", 2..5),
                    0..6,
                ),
                vec![],
                0..8,
            ),
            // member object is not a plain identifier
            Expr::call(
                Expr::member(
                    Expr::member(
                        Expr::ident("wrapped", 0..7),
                        Ident::new("lodash", 8..14),
                        0..14,
                    ),
                    Ident::new("pluck", 15..20),
                    0..20,
                ),
                vec![],
                0..22,
            ),
        }
    }

    #[test]
    fn report_carries_the_joined_reasons_and_the_call_span() {
        let rule = DeprecatedCall::new(
            "contains",
            vec!["renamed to includes in lodash 4", "use Array#includes"],
        );
        let node = call_through("_", "contains");
        let result = crate::run_rule(&rule, 0, &node, false);

        assert_eq!(result.diagnostics.len(), 1);
        let diagnostic = &result.diagnostics[0];
        assert_eq!(
            diagnostic.title,
            "renamed to includes in lodash 4, use Array#includes"
        );
        assert_eq!(diagnostic.code.as_deref(), Some("contains"));
        assert_eq!(diagnostic.children[0].span.span, Span::new(0, 16));
        assert!(diagnostic.footers.is_empty());
    }

    #[test]
    fn verbose_reports_name_the_matched_alias() {
        let rule = DeprecatedCall::new("pluck", vec!["use Array#map"]);
        let result = crate::run_rule(&rule, 0, &call_through("lodash", "pluck"), true);

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].footers[0].msg,
            "the call goes through the `lodash` alias"
        );
    }

    #[test]
    fn camel_case_functions_get_kebab_case_rule_names() {
        let rule = DeprecatedCall::new("sortByOrder", vec!["renamed to orderBy in lodash 4"]);
        assert_eq!(rule.name(), "sort-by-order");
        assert_eq!(rule.function(), "sortByOrder");

        // the match is still against the canonical camelCase name
        let result = crate::run_rule(&rule, 0, &call_through("_", "sortByOrder"), false);
        assert_eq!(result.diagnostics.len(), 1);
        let miss = crate::run_rule(&rule, 0, &call_through("_", "sort-by-order"), false);
        assert!(miss.diagnostics.is_empty());
    }

    #[test]
    fn each_matching_call_is_reported_once() {
        let rule = DeprecatedCall::new("pluck", vec!["use Array#map"]);
        // _.pluck(_.pluck(list))
        let node = Expr::call(
            Expr::member(Expr::ident("_", 0..1), Ident::new("pluck", 2..7), 0..7),
            vec![call_through("_", "pluck")],
            0..22,
        );
        let result = crate::run_rule(&rule, 0, &node, false);
        assert_eq!(result.diagnostics.len(), 2);
    }
}
