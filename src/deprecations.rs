//! The deprecation table: which library functions are flagged, and why.
//!
//! The table is plain data. Rule synthesis happens in
//! [`RuleStore::from_table`](crate::RuleStore::from_table), which turns every
//! entry into one rule named after the kebab-cased function name.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The identifiers an analyzed source may invoke the library through.
///
/// The set is closed, adding a future alias is a one-line change here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alias {
    /// The `_` binding.
    Shorthand,
    /// The `lodash` binding.
    Lodash,
    /// The `underscore` binding.
    Underscore,
}

impl Alias {
    pub const ALL: [Alias; 3] = [Alias::Shorthand, Alias::Lodash, Alias::Underscore];

    /// The alias an identifier refers to, if any.
    pub fn from_ident(ident: &str) -> Option<Alias> {
        match ident {
            "_" => Some(Alias::Shorthand),
            "lodash" => Some(Alias::Lodash),
            "underscore" => Some(Alias::Underscore),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alias::Shorthand => "_",
            Alias::Lodash => "lodash",
            Alias::Underscore => "underscore",
        }
    }
}

/// A single table entry: why a function should no longer be called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct DeprecationEntry {
    /// Human readable explanations, reported joined by `", "`. Must not be
    /// empty, see [`TableError::EmptyReasons`].
    pub reasons: Vec<String>,
}

impl DeprecationEntry {
    pub fn new(reasons: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            reasons: reasons.into_iter().map(Into::into).collect(),
        }
    }
}

/// A mapping from canonical function name to its deprecation entry.
///
/// Iteration order is the lexicographic order of the function names, so rule
/// synthesis is deterministic regardless of how the table was assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct DeprecationTable(BTreeMap<String, DeprecationEntry>);

impl DeprecationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry for the same function.
    pub fn insert(&mut self, function: impl Into<String>, entry: DeprecationEntry) {
        self.0.insert(function.into(), entry);
    }

    pub fn get(&self, function: &str) -> Option<&DeprecationEntry> {
        self.0.get(function)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DeprecationEntry)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> std::iter::FromIterator<(K, DeprecationEntry)> for DeprecationTable {
    fn from_iter<I: IntoIterator<Item = (K, DeprecationEntry)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(function, entry)| (function.into(), entry))
                .collect(),
        )
    }
}

/// An error in the contents of a deprecation table, raised by rule synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two functions kebab-case to the same rule name. The synthesizer fails
    /// fast instead of silently keeping the later entry.
    #[error("functions `{first}` and `{second}` both produce the rule name `{name}`")]
    DuplicateRule {
        name: String,
        first: String,
        second: String,
    },
    /// An entry with no reasons would produce a rule with an empty message.
    #[error("the entry for `{function}` has no reasons")]
    EmptyReasons { function: String },
}

/// Functions dropped or renamed in lodash 4, with the migration to prefer.
/// This stands in for the data module the upstream plugin ships.
static BUILTIN_DEPRECATIONS: &[(&str, &[&str])] = &[
    ("all", &["removed in lodash 4 (alias of every)", "use Array#every"]),
    ("any", &["removed in lodash 4 (alias of some)", "use Array#some"]),
    ("collect", &["removed in lodash 4 (alias of map)", "use Array#map"]),
    ("compose", &["renamed to flowRight in lodash 4"]),
    ("contains", &["renamed to includes in lodash 4", "use Array#includes"]),
    ("findWhere", &["removed in lodash 4", "use Array#find with a predicate"]),
    ("indexBy", &["renamed to keyBy in lodash 4"]),
    ("object", &["removed in lodash 4", "use Object.fromEntries"]),
    ("padLeft", &["renamed to padStart in lodash 4", "use String#padStart"]),
    ("padRight", &["renamed to padEnd in lodash 4", "use String#padEnd"]),
    ("pairs", &["renamed to toPairs in lodash 4", "use Object.entries"]),
    ("pluck", &["removed in lodash 4", "use Array#map with a property accessor"]),
    ("sortByOrder", &["renamed to orderBy in lodash 4"]),
    ("trimLeft", &["renamed to trimStart in lodash 4", "use String#trimStart"]),
    ("where", &["removed in lodash 4", "use Array#filter with a predicate"]),
];

/// The builtin deprecation table, built once and shared.
pub fn builtin_table() -> &'static DeprecationTable {
    static TABLE: Lazy<DeprecationTable> = Lazy::new(|| {
        BUILTIN_DEPRECATIONS
            .iter()
            .map(|(function, reasons)| (*function, DeprecationEntry::new(reasons.iter().copied())))
            .collect()
    });
    &TABLE
}
