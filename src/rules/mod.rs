//! The rules synthesized from the builtin deprecation table.

mod deprecated_call;

pub use deprecated_call::DeprecatedCall;

use crate::deprecations::builtin_table;
use crate::AstRule;

/// One rule per builtin deprecation table entry.
pub fn deprecations() -> Vec<Box<dyn AstRule>> {
    builtin_table()
        .iter()
        .map(|(function, entry)| {
            Box::new(DeprecatedCall::new(
                function.clone(),
                entry.reasons.iter().cloned(),
            )) as Box<dyn AstRule>
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_entry_yields_a_rule() {
        assert_eq!(deprecations().len(), builtin_table().len());
    }
}
