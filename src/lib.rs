//! Langpack - localization template resolution
//!
//! Langpack stores translated templates per language, resolves a field for a
//! requested language by walking its fallback chain and then a global store,
//! and renders the result with caller-supplied arguments bound to named
//! placeholders. Values can be plain text, string pools that rotate or pick
//! randomly between variants, or action text carrying a click command and
//! hover lines.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Stores, values, the resolution engine and message loading
//! - `error`: Error type of the core operations
//!
//! ## Example
//!
//! ```
//! use langpack::{Engine, LangArgs, Language, Languages};
//!
//! let engine = Engine::new(Languages::builtin());
//! let en = Language::new("en").unwrap();
//! let en_gb = Language::new("en-GB").unwrap();
//! engine.set(&en, "greeting", "Hello {player}!").unwrap();
//!
//! let args = LangArgs::new().with("player", "Ann");
//! let text = engine.resolve_text("greeting", &en_gb, &args).unwrap();
//! assert_eq!(text, "Hello Ann!");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::core::{
    Engine, FieldSource, LangArg, LangArgs, Language, Languages, Recipient, RenderedOutput,
    Value, ValueKind,
};
pub use error::{LangError, LangResult};
