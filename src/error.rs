//! Error taxonomy for the resolution engine.
//!
//! Structural problems (bad field names, broken fallback graphs) surface as
//! [`LangError`]. Data gaps (missing fields, empty pools) never do: the
//! processor turns them into degraded output instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangError {
    /// Field name is empty, blank, or has an empty dot segment.
    #[error("invalid field name: \"{field}\"")]
    InvalidField { field: String },

    /// A string pool was polled with no entries.
    #[error("the string pool is empty and cannot be polled")]
    EmptyPool,

    /// Following fallback links returned to a language already visited.
    #[error("language fallback cycle: {}", chain.join(" -> "))]
    FallbackCycle { chain: Vec<String> },

    /// A language falls back to a tag that was never declared.
    #[error("language \"{language}\" falls back to undeclared language \"{fallback}\"")]
    UnknownFallback { language: String, fallback: String },

    #[error("invalid language tag: \"{tag}\"")]
    InvalidLanguage { tag: String },
}

pub type LangResult<T> = Result<T, LangError>;

#[cfg(test)]
mod tests {
    use crate::error::*;

    #[test]
    fn test_invalid_field_display() {
        let err = LangError::InvalidField {
            field: " ".to_string(),
        };
        assert_eq!(err.to_string(), "invalid field name: \" \"");
    }

    #[test]
    fn test_fallback_cycle_display() {
        let err = LangError::FallbackCycle {
            chain: vec!["en_us".into(), "en".into(), "en_us".into()],
        };
        assert_eq!(
            err.to_string(),
            "language fallback cycle: en_us -> en -> en_us"
        );
    }
}
