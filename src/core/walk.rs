//! Argument binding ("definition walk").
//!
//! A walk copies a template and replaces every placeholder whose name is a
//! known argument key with that argument's text.
//!
//! # Invariants
//!
//! 1. **Copy-on-write**: walking never mutates its input; every walk returns
//!    freshly owned data.
//! 2. **Single pass**: substituted text is not re-scanned, so argument values
//!    that themselves look like placeholders are emitted literally.
//! 3. **Unknown tokens survive**: a placeholder with no matching argument is
//!    left verbatim. This allows staged resolution and is never an error.
//!
//! # Placeholder syntax
//!
//! | Style     | Token     |
//! |-----------|-----------|
//! | `braces`  | `{name}`  |
//! | `percent` | `%name%`  |
//!
//! Names consist of ASCII letters, digits, `_`, `.` and `-`, and match
//! argument keys case-sensitively.

use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::core::args::LangArgs;

static BRACES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_.\-]+)\}").unwrap());

static PERCENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z0-9_.\-]+)%").unwrap());

/// Which delimiters wrap a placeholder name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    #[default]
    Braces,
    Percent,
}

impl PlaceholderStyle {
    fn pattern(self) -> &'static Regex {
        match self {
            PlaceholderStyle::Braces => &BRACES_REGEX,
            PlaceholderStyle::Percent => &PERCENT_REGEX,
        }
    }

    /// Whether `text` contains at least one placeholder token.
    pub fn needs_walk(self, text: &str) -> bool {
        self.pattern().is_match(text)
    }

    pub fn needs_walk_any<S: AsRef<str>>(self, texts: &[S]) -> bool {
        texts.iter().any(|text| self.needs_walk(text.as_ref()))
    }

    /// Render `name` as a token in this style.
    pub fn token(self, name: &str) -> String {
        match self {
            PlaceholderStyle::Braces => format!("{{{name}}}"),
            PlaceholderStyle::Percent => format!("%{name}%"),
        }
    }
}

/// An argument set bound to a placeholder style, ready to walk templates.
pub struct Definition<'a> {
    style: PlaceholderStyle,
    table: HashMap<&'a str, &'a str>,
}

impl<'a> Definition<'a> {
    pub fn new(style: PlaceholderStyle, args: &'a LangArgs) -> Self {
        Self {
            style,
            table: args.lookup_table(),
        }
    }

    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Substitute known placeholders in `text`.
    pub fn walk_str(&self, text: &str) -> String {
        if self.table.is_empty() {
            return text.to_string();
        }
        let replaced: Cow<'_, str> =
            self.style
                .pattern()
                .replace_all(text, |caps: &Captures<'_>| match self.table.get(&caps[1]) {
                    Some(value) => (*value).to_string(),
                    None => caps[0].to_string(),
                });
        replaced.into_owned()
    }

    pub fn walk_lines(&self, lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| self.walk_str(line)).collect()
    }
}

/// Copy-producing argument binding for template values.
pub trait Walk {
    /// Return a copy with every known placeholder substituted.
    fn walk(&self, definition: &Definition<'_>) -> Self;

    /// Whether any stored text contains a placeholder. When this is false,
    /// [`Walk::walk`] would return an identical copy.
    fn needs_walk(&self, style: PlaceholderStyle) -> bool;
}
