//! Localization engine.
//!
//! - `language`: language tags and the fallback registry
//! - `store`: per-language field storage
//! - `value`: stored value kinds and how each one renders
//! - `walk`: placeholder substitution
//! - `processor`: the [`Engine`] that ties lookup, fallback and rendering together
//! - `cache`: per-broadcast memoization
//! - `parsers`: message file loading
//! - `context`: building a ready engine from configuration

pub mod args;
pub mod cache;
pub mod context;
pub mod language;
pub mod output;
pub mod parsers;
pub mod processor;
pub mod random;
pub mod store;
pub mod value;
pub mod walk;

pub use args::{ArgsFingerprint, LangArg, LangArgs};
pub use cache::ResolutionCache;
pub use context::{EngineContext, LoadedMessages, load_engine};
pub use language::{Language, Languages};
pub use output::RenderedOutput;
pub use processor::{Engine, FieldSource, Recipient};
pub use random::{RandomSource, RngSource, SharedRandom};
pub use store::{LanguageStore, StoreSet, normalize_field};
pub use value::{
    ActionNode, Literal, PoolMode, Process, ProcessContext, RenderedComponent, StringPool, Value,
    ValueKind,
};
pub use walk::{Definition, PlaceholderStyle, Walk};
