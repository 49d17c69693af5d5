//! Message file parsers.
//!
//! - `json`: JSON message files (`<tag>.json` per language, `global.json`)

pub mod json;
