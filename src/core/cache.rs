//! Per-broadcast memoization of resolved output.

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    core::{
        args::{ArgsFingerprint, LangArgs},
        language::Language,
        output::RenderedOutput,
        processor::Engine,
        store::normalize_field,
    },
    error::LangResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    field: String,
    language: Language,
    args: ArgsFingerprint,
}

/// Memoizes `(field, language, arguments)` → output for one broadcast.
///
/// A cache must live no longer than the single broadcast it serves. Output
/// depends on the argument values, so a long-lived cache would grow without
/// bound and, for pools, freeze a value that should vary between calls.
/// [`Engine::broadcast`] creates one per call and drops it on return.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<CacheKey, RenderedOutput>,
    hits: usize,
    misses: usize,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached output, resolving through `engine` on a miss.
    pub fn get_or_resolve(
        &mut self,
        field: &str,
        language: &Language,
        args: &LangArgs,
        engine: &Engine,
    ) -> LangResult<&RenderedOutput> {
        let key = CacheKey {
            field: normalize_field(field)?,
            language: language.clone(),
            args: args.fingerprint(),
        };
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                let output = engine.resolve(field, language, args)?;
                Ok(entry.insert(output))
            }
        }
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
