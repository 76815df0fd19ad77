//! Macros for easily making rule tests.

/// A macro for generating linter rule tests.
///
/// Each entry of `err` and `ok` is an expression producing the
/// [`Expr`](crate::ast::Expr) to run the rule on; `err` nodes must produce at
/// least one diagnostic, `ok` nodes must produce none. Tests run with
/// `verbose` set so the verbose paths of rules are exercised too.
#[macro_export]
macro_rules! rule_tests {
    ($rule:expr,
    err: {
        $($err:expr),* $(,)?
    },
    ok: {
        $($ok:expr),* $(,)?
    } $(,)?) => {
        rule_tests!(valid, invalid, $rule, err: { $($err),* }, ok: { $($ok),* });
    };
    (
    $ok_name:ident,
    $err_name:ident,
    $rule:expr,
    err: {
        $($err:expr),* $(,)?
    },
    ok: {
        $($ok:expr),* $(,)?
    } $(,)?) => {
        #[test]
        fn $err_name() {
            $(
                let node = $err;
                let res = $crate::run_rule(&$rule, 0, &node, true);
                if res.diagnostics.is_empty() {
                    panic!(
                        "\nExpected node:\n{:#?}\nto fail linting, but instead it passed",
                        node
                    );
                }
            )*
        }

        #[test]
        fn $ok_name() {
            $(
                let node = $ok;
                let res = $crate::run_rule(&$rule, 0, &node, true);
                if !res.diagnostics.is_empty() {
                    panic!(
                        "\nExpected node:\n{:#?}\nto pass linting, but instead it threw {} diagnostics",
                        node,
                        res.diagnostics.len()
                    );
                }
            )*
        }
    };
}
