//! Recipe option sets.
//!
//! An `OptionSet` is an immutable mapping from option name to value. The
//! configuration builder produces new sets instead of mutating in place;
//! removing an option is a set-difference (`without`), so a removed key
//! cannot leak back into later records with a default value.

use std::collections::BTreeMap;
use std::fmt;

/// Name of the shared/static toggle.
pub const SHARED: &str = "shared";

/// Name of the position-independent-code toggle. Removed entirely, not
/// disabled, on Windows-family targets.
pub const POSITION_INDEPENDENT_CODE: &str = "position_independent_code";

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// Parse a value from its CLI spelling: `true`/`false` become booleans,
    /// anything else stays a string.
    pub fn parse(s: &str) -> Self {
        match s {
            "true" | "True" => OptionValue::Bool(true),
            "false" | "False" => OptionValue::Bool(false),
            _ => OptionValue::Str(s.to_string()),
        }
    }

    /// The boolean value, if this is a boolean option.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

/// An immutable set of named options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet {
    values: BTreeMap<String, OptionValue>,
}

impl OptionSet {
    /// Create an empty option set.
    pub fn new() -> Self {
        OptionSet::default()
    }

    /// Return a new set with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Return a new set without `key`. This is the only way an option
    /// leaves a set; there is no in-place deletion.
    pub fn without(&self, key: &str) -> Self {
        let mut values = self.values.clone();
        values.remove(key);
        OptionSet { values }
    }

    /// Look up an option value.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Look up a boolean option value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    /// Whether the set contains `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Option names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Number of options in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, OptionValue)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        OptionSet {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_is_set_difference() {
        let base = OptionSet::new()
            .with(SHARED, false)
            .with(POSITION_INDEPENDENT_CODE, true);

        let reduced = base.without(POSITION_INDEPENDENT_CODE);

        assert!(!reduced.contains(POSITION_INDEPENDENT_CODE));
        assert_eq!(reduced.get_bool(SHARED), Some(false));

        // The original set is untouched.
        assert!(base.contains(POSITION_INDEPENDENT_CODE));
    }

    #[test]
    fn test_without_missing_key_is_noop() {
        let base = OptionSet::new().with(SHARED, true);
        let same = base.without("nonexistent");
        assert_eq!(base, same);
    }

    #[test]
    fn test_value_parse() {
        assert_eq!(OptionValue::parse("true"), OptionValue::Bool(true));
        assert_eq!(OptionValue::parse("False"), OptionValue::Bool(false));
        assert_eq!(
            OptionValue::parse("c++17"),
            OptionValue::Str("c++17".to_string())
        );
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let set = OptionSet::new()
            .with("zeta", true)
            .with("alpha", false)
            .with("mid", "x");

        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
