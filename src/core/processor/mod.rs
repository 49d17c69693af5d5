//! Resolution pipeline.
//!
//! [`Engine`] is the context object every resolution goes through. It owns
//! the language registry, one [`LanguageStore`] per language, the global
//! store consulted last, the placeholder style, and the shared random source.
//!
//! # Resolution order
//!
//! 1. The store for the requested language, then each fallback hop.
//! 2. The global store.
//! 3. The field name itself, so a missing translation shows up as visible
//!    text instead of an error.
//!
//! # Concurrency
//!
//! Stores sit behind one read/write lock. Resolution takes the read side for
//! the whole pipeline, so a reload never interleaves with a half-processed
//! value. Mutation (`set`, `append`) takes the write side.

use std::{
    collections::HashMap,
    fmt,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::debug;

use crate::{
    core::{
        args::LangArgs,
        cache::ResolutionCache,
        language::{Language, Languages},
        output::RenderedOutput,
        random::SharedRandom,
        store::{LanguageStore, StoreSet, normalize_field},
        value::{Process, ProcessContext, Value, ValueKind},
        walk::{Definition, PlaceholderStyle},
    },
    error::LangResult,
};


/// Where a field was found during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSource {
    Language(Language),
    Global,
}

impl fmt::Display for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSource::Language(language) => write!(f, "{language}"),
            FieldSource::Global => write!(f, "global"),
        }
    }
}

/// Someone who receives broadcast output in their own language.
pub trait Recipient {
    fn language(&self) -> Language;
}

#[derive(Debug, Default)]
struct Stores {
    languages: HashMap<Language, LanguageStore>,
    global: LanguageStore,
}

impl Stores {
    /// Find `key` (already normalized) along the fallback chain, then globally.
    fn find<'s>(
        &'s self,
        languages: &Languages,
        key: &str,
        language: &Language,
    ) -> Option<(&'s Value, FieldSource)> {
        for hop in languages.chain(language) {
            if let Some(value) = self
                .languages
                .get(hop)
                .and_then(|store| store.get_normalized(key))
            {
                return Some((value, FieldSource::Language(hop.clone())));
            }
        }
        self.global
            .get_normalized(key)
            .map(|value| (value, FieldSource::Global))
    }
}

/// The localization engine.
#[derive(Debug)]
pub struct Engine {
    languages: Languages,
    style: PlaceholderStyle,
    random: SharedRandom,
    stores: RwLock<Stores>,
}

impl Engine {
    /// Engine with braces placeholders and an OS-seeded random source.
    pub fn new(languages: Languages) -> Self {
        Self {
            languages,
            style: PlaceholderStyle::default(),
            random: SharedRandom::default(),
            stores: RwLock::new(Stores::default()),
        }
    }

    pub fn with_style(mut self, style: PlaceholderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_random(mut self, random: SharedRandom) -> Self {
        self.random = random;
        self
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    fn read(&self) -> RwLockReadGuard<'_, Stores> {
        self.stores.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Stores> {
        self.stores.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ============================================================
    // Mutation
    // ============================================================

    pub fn set(&self, language: &Language, field: &str, value: impl Into<Value>) -> LangResult<()> {
        self.write()
            .languages
            .entry(language.clone())
            .or_default()
            .set(field, value)
    }

    pub fn set_global(&self, field: &str, value: impl Into<Value>) -> LangResult<()> {
        self.write().global.set(field, value)
    }

    /// Merge a loaded set of stores, overwriting fields that already exist.
    ///
    /// The whole set is applied under one write lock, so resolution sees
    /// either none or all of it.
    pub fn append(&self, set: StoreSet) {
        let mut stores = self.write();
        for (language, store) in set.languages {
            stores.languages.entry(language).or_default().append(store);
        }
        stores.global.append(set.global);
    }

    // ============================================================
    // Queries (single store, no fallback)
    // ============================================================

    pub fn contains(&self, language: &Language, field: &str) -> bool {
        self.read()
            .languages
            .get(language)
            .is_some_and(|store| store.contains(field))
    }

    pub fn kind_of(&self, language: &Language, field: &str) -> LangResult<Option<ValueKind>> {
        let stores = self.read();
        match stores.languages.get(language) {
            Some(store) => Ok(store.lookup(field)?.map(Value::kind)),
            None => normalize_field(field).map(|_| None),
        }
    }

    /// Field count per loaded language, sorted by tag, plus the global count.
    pub fn summary(&self) -> (Vec<(Language, usize)>, usize) {
        let stores = self.read();
        let mut counts: Vec<(Language, usize)> = stores
            .languages
            .iter()
            .map(|(language, store)| (language.clone(), store.len()))
            .collect();
        counts.sort();
        (counts, stores.global.len())
    }

    /// Which store would serve `field` for `language`, if any.
    pub fn source_of(&self, field: &str, language: &Language) -> LangResult<Option<FieldSource>> {
        let key = normalize_field(field)?;
        let stores = self.read();
        Ok(stores
            .find(&self.languages, &key, language)
            .map(|(_, source)| source))
    }

    // ============================================================
    // Resolution
    // ============================================================

    /// Resolve `field` for `language` with `args` bound.
    ///
    /// Fails only when the field name itself is invalid. A field missing from
    /// every store resolves to the field name; an empty pool resolves to
    /// empty text.
    pub fn resolve(
        &self,
        field: &str,
        language: &Language,
        args: &LangArgs,
    ) -> LangResult<RenderedOutput> {
        let key = normalize_field(field)?;
        let stores = self.read();

        let Some((value, source)) = stores.find(&self.languages, &key, language) else {
            debug!(field, %language, "field not found in any store, echoing field name");
            return Ok(RenderedOutput::text(field));
        };

        if source != FieldSource::Language(language.clone()) {
            debug!(field, %language, %source, "field resolved through fallback");
        }

        let definition = Definition::new(self.style, args);
        let ctx = ProcessContext {
            language,
            definition: &definition,
            random: &self.random,
        };
        Ok(value.process(&ctx))
    }

    /// Resolve to plain text, flattening any component structure.
    pub fn resolve_text(
        &self,
        field: &str,
        language: &Language,
        args: &LangArgs,
    ) -> LangResult<String> {
        Ok(self.resolve(field, language, args)?.to_plain_text())
    }

    /// Resolve to plain text split into lines.
    pub fn resolve_lines(
        &self,
        field: &str,
        language: &Language,
        args: &LangArgs,
    ) -> LangResult<Vec<String>> {
        let text = self.resolve_text(field, language, args)?;
        Ok(text.split('\n').map(str::to_string).collect())
    }

    /// Resolve `field` once per distinct recipient language and hand the
    /// output to `deliver` for every recipient.
    ///
    /// Returns the number of recipients delivered to. An invalid field name
    /// fails before anything is delivered.
    pub fn broadcast<R, I, F>(
        &self,
        field: &str,
        args: &LangArgs,
        recipients: I,
        mut deliver: F,
    ) -> LangResult<usize>
    where
        R: Recipient,
        I: IntoIterator<Item = R>,
        F: FnMut(R, &RenderedOutput),
    {
        normalize_field(field)?;
        let mut cache = ResolutionCache::new();
        let mut delivered = 0;
        for recipient in recipients {
            let language = recipient.language();
            let output = cache.get_or_resolve(field, &language, args, self)?;
            deliver(recipient, output);
            delivered += 1;
        }
        debug!(
            field,
            delivered,
            resolved = cache.misses(),
            "broadcast complete"
        );
        Ok(delivered)
    }
}
