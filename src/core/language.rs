//! Language tags and the fallback graph between them.

use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::error::{LangError, LangResult};

/// A normalized language tag such as `en` or `pt_br`.
///
/// Tags are trimmed, lowercased, and use `_` as the region separator, so
/// `"pt-BR"` and `"pt_br"` name the same language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(String);

impl Language {
    pub fn new(tag: &str) -> LangResult<Self> {
        let code = tag.trim().to_lowercase().replace('-', "_");
        if code.is_empty() || code.starts_with('_') || code.ends_with('_') {
            return Err(LangError::InvalidLanguage {
                tag: tag.to_string(),
            });
        }
        Ok(Self(code))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Generic languages, each a chain root.
const BUILTIN_ROOTS: &[&str] = &[
    "en", "es", "pt", "fr", "de", "it", "nl", "ru", "zh", "ja", "ko", "pl", "sv",
];

/// Regional variants and the generic language they fall back to.
const BUILTIN_REGIONS: &[(&str, &str)] = &[
    ("en_us", "en"),
    ("en_gb", "en"),
    ("en_au", "en"),
    ("en_ca", "en"),
    ("es_es", "es"),
    ("es_mx", "es"),
    ("es_ar", "es"),
    ("pt_br", "pt"),
    ("pt_pt", "pt"),
    ("fr_fr", "fr"),
    ("fr_ca", "fr"),
    ("de_de", "de"),
    ("de_at", "de"),
    ("de_ch", "de"),
    ("it_it", "it"),
    ("nl_nl", "nl"),
    ("ru_ru", "ru"),
    ("zh_cn", "zh"),
    ("zh_tw", "zh"),
    ("ja_jp", "ja"),
    ("ko_kr", "ko"),
    ("pl_pl", "pl"),
    ("sv_se", "sv"),
];

/// Registry of known languages and their fallback links.
///
/// # Invariants
///
/// Every fallback target is itself registered, and following fallback links
/// from any language reaches a root (a language without a fallback) in at
/// most `len()` hops. Both are checked by [`Languages::new`], so a registry
/// that exists is always safe to walk.
#[derive(Debug, Clone, Default)]
pub struct Languages {
    fallbacks: BTreeMap<Language, Option<Language>>,
}

impl Languages {
    /// Build a registry from `(language, fallback)` pairs.
    ///
    /// Fails with [`LangError::UnknownFallback`] when a fallback names an
    /// undeclared language and with [`LangError::FallbackCycle`] when the
    /// links loop.
    pub fn new<I>(entries: I) -> LangResult<Self>
    where
        I: IntoIterator<Item = (Language, Option<Language>)>,
    {
        let languages = Self {
            fallbacks: entries.into_iter().collect(),
        };
        languages.validate()?;
        Ok(languages)
    }

    /// The built-in table: generic languages plus regional variants.
    pub fn builtin() -> Self {
        let mut fallbacks = BTreeMap::new();
        for root in BUILTIN_ROOTS {
            fallbacks.insert(Language(root.to_string()), None);
        }
        for (region, root) in BUILTIN_REGIONS {
            fallbacks.insert(
                Language(region.to_string()),
                Some(Language(root.to_string())),
            );
        }
        Self { fallbacks }
    }

    fn validate(&self) -> LangResult<()> {
        for (language, fallback) in &self.fallbacks {
            if let Some(fallback) = fallback
                && !self.fallbacks.contains_key(fallback)
            {
                return Err(LangError::UnknownFallback {
                    language: language.to_string(),
                    fallback: fallback.to_string(),
                });
            }
        }

        for start in self.fallbacks.keys() {
            let mut visited = vec![start];
            let mut current = start;
            while let Some(next) = self.fallback(current) {
                if visited.contains(&next) {
                    let mut chain: Vec<String> = visited.iter().map(|l| l.to_string()).collect();
                    chain.push(next.to_string());
                    return Err(LangError::FallbackCycle { chain });
                }
                visited.push(next);
                current = next;
            }
        }

        Ok(())
    }

    pub fn fallback(&self, language: &Language) -> Option<&Language> {
        self.fallbacks.get(language).and_then(Option::as_ref)
    }

    pub fn contains(&self, language: &Language) -> bool {
        self.fallbacks.contains_key(language)
    }

    /// The language itself followed by each fallback hop, root last.
    ///
    /// Unregistered languages yield only themselves.
    pub fn chain<'a>(&'a self, language: &'a Language) -> FallbackChain<'a> {
        FallbackChain {
            languages: self,
            next: Some(language),
            remaining: self.fallbacks.len() + 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Language, Option<&Language>)> {
        self.fallbacks.iter().map(|(l, f)| (l, f.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fallbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// Iterator returned by [`Languages::chain`].
pub struct FallbackChain<'a> {
    languages: &'a Languages,
    next: Option<&'a Language>,
    remaining: usize,
}

impl<'a> Iterator for FallbackChain<'a> {
    type Item = &'a Language;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next?;
        self.next = self.languages.fallback(current);
        Some(current)
    }
}
