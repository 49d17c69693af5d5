//! Field storage for a single language.

use std::collections::HashMap;

use crate::{
    core::{language::Language, value::Value},
    error::{LangError, LangResult},
};

/// Normalize a field name for storage and lookup.
///
/// Fields are case-insensitive and dot-segmented. Surrounding whitespace is
/// ignored. Blank names and names with an empty segment (`"a..b"`, `".a"`)
/// are rejected with [`LangError::InvalidField`].
pub fn normalize_field(field: &str) -> LangResult<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() || trimmed.split('.').any(|segment| segment.trim().is_empty()) {
        return Err(LangError::InvalidField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_lowercase())
}

/// Mapping from field name to [`Value`] for one language.
///
/// Append-only with overwrite-on-set. The store has no locking of its own;
/// the engine serializes mutation against resolution.
#[derive(Debug, Clone, Default)]
pub struct LanguageStore {
    fields: HashMap<String, Value>,
}

impl LanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-insensitive lookup in this store only.
    pub fn lookup(&self, field: &str) -> LangResult<Option<&Value>> {
        let key = normalize_field(field)?;
        Ok(self.fields.get(&key))
    }

    /// Insert or overwrite `field`.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> LangResult<()> {
        let key = normalize_field(field)?;
        self.fields.insert(key, value.into());
        Ok(())
    }

    /// Lookup by a key that already went through [`normalize_field`].
    pub(crate) fn get_normalized(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, field: &str) -> bool {
        normalize_field(field).is_ok_and(|key| self.fields.contains_key(&key))
    }

    /// Copy every field of `other` into this store, overwriting on conflict.
    pub fn append(&mut self, other: LanguageStore) {
        self.fields.extend(other.fields);
    }

    /// All stored (normalized) field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Stores for many languages plus the global store, as produced by a loader.
#[derive(Debug, Default)]
pub struct StoreSet {
    pub languages: HashMap<Language, LanguageStore>,
    pub global: LanguageStore,
}

impl StoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store for `language`, created empty on first use.
    pub fn store_mut(&mut self, language: Language) -> &mut LanguageStore {
        self.languages.entry(language).or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.languages.values().all(LanguageStore::is_empty)
    }
}
