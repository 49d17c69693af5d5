//! Named arguments bound into templates.

use std::collections::{BTreeMap, HashMap};

/// An immutable `(key, value)` pair.
///
/// The value is stored as text; anything with a `Display` impl can be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangArg {
    key: String,
    value: String,
}

impl LangArg {
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An ordered argument set for one resolution call.
///
/// When the same key appears more than once, the last occurrence wins. This
/// holds for substitution and for the cache fingerprint alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangArgs {
    args: Vec<LangArg>,
}

impl LangArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(LangArg::new(key, value));
        self
    }

    pub fn push(&mut self, arg: LangArg) {
        self.args.push(arg);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LangArg> {
        self.args.iter()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Look up the effective value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .rev()
            .find(|arg| arg.key == key)
            .map(LangArg::value)
    }

    /// Key to value map with last-one-wins applied.
    pub(crate) fn lookup_table(&self) -> HashMap<&str, &str> {
        self.args
            .iter()
            .map(|arg| (arg.key.as_str(), arg.value.as_str()))
            .collect()
    }

    /// Identity of the effective argument set.
    ///
    /// Two sets that bind the same keys to the same values produce equal
    /// fingerprints regardless of argument order or overridden duplicates.
    pub fn fingerprint(&self) -> ArgsFingerprint {
        let effective: BTreeMap<&str, &str> = self
            .args
            .iter()
            .map(|arg| (arg.key.as_str(), arg.value.as_str()))
            .collect();
        ArgsFingerprint(
            effective
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl FromIterator<LangArg> for LangArgs {
    fn from_iter<T: IntoIterator<Item = LangArg>>(iter: T) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<LangArg>> for LangArgs {
    fn from(args: Vec<LangArg>) -> Self {
        Self { args }
    }
}

/// Canonical, collision-free form of an argument set, used as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgsFingerprint(Vec<(String, String)>);
