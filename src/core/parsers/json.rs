use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value as Json};
use tracing::{info, warn};

use crate::core::{
    Language, LanguageStore, StoreSet,
    value::{ActionNode, PoolMode, StringPool, Value},
};

/// File stem of the message file that fills the global store.
pub const GLOBAL_FILE_STEM: &str = "global";

/// A warning from scanning message files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub stores: StoreSet,
    pub warnings: Vec<MessageScanWarning>,
    /// Number of message files that parsed successfully.
    pub files_loaded: usize,
}

/// Parse one message file into a store.
///
/// Problems with individual values are returned as warnings alongside the
/// store; only unreadable or malformed files fail.
pub fn parse_json_file(path: &Path) -> Result<(LanguageStore, Vec<MessageScanWarning>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Json = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let file_path = path.to_string_lossy().to_string();
    let mut store = LanguageStore::new();
    let mut warnings = Vec::new();
    flatten_json(
        &json,
        String::new(),
        &mut |field: &str, issue: String| {
            warn!(file = %file_path, field, "{issue}");
            warnings.push(MessageScanWarning {
                file_path: file_path.clone(),
                error: format!("{field}: {issue}"),
            });
        },
        &mut store,
    );
    Ok((store, warnings))
}

/// Pool and action objects are recognized by their `"type"` member.
/// Any other object is a section whose members become dotted fields.
fn complex_type(map: &Map<String, Json>) -> Option<&str> {
    match map.get("type").and_then(Json::as_str)? {
        "pool" | "string_pool" => Some("pool"),
        "action" | "action_text" => Some("action"),
        _ => None,
    }
}

fn flatten_json(
    value: &Json,
    prefix: String,
    warn: &mut dyn FnMut(&str, String),
    result: &mut LanguageStore,
) {
    let parsed: Option<Value> = match value {
        Json::Object(map) => match complex_type(map) {
            Some("pool") => Some(parse_pool(map, &prefix, warn).into()),
            Some(_) => parse_action(map, &prefix, warn).map(Value::from),
            None => {
                for (key, val) in map {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    flatten_json(val, new_prefix, warn, result);
                }
                None
            }
        },
        Json::String(s) => Some(Value::literal(s.as_str())),
        Json::Number(n) => Some(Value::literal(n.to_string())),
        Json::Bool(b) => Some(Value::literal(b.to_string())),
        Json::Array(arr) => {
            // Empty arrays don't produce any fields
            if arr.is_empty() {
                return;
            }
            match string_lines(arr) {
                Some(lines) => Some(Value::literal(lines.join("\n"))),
                None => {
                    warn(&prefix, "arrays may only contain strings".to_string());
                    None
                }
            }
        }
        Json::Null => {
            warn(&prefix, "null value ignored".to_string());
            None
        }
    };

    if let Some(parsed) = parsed
        && let Err(e) = result.set(&prefix, parsed)
    {
        warn(&prefix, e.to_string());
    }
}

fn string_lines(arr: &[Json]) -> Option<Vec<&str>> {
    arr.iter().map(Json::as_str).collect()
}

/// Text for a pool entry: strings as-is, null as empty, scalars as text.
fn entry_text(value: &Json) -> Option<String> {
    match value {
        Json::String(s) => Some(s.clone()),
        Json::Null => Some(String::new()),
        Json::Number(n) => Some(n.to_string()),
        Json::Bool(b) => Some(b.to_string()),
        Json::Array(_) | Json::Object(_) => None,
    }
}

fn parse_pool(
    map: &Map<String, Json>,
    field: &str,
    warn: &mut dyn FnMut(&str, String),
) -> StringPool {
    let mode = match map.get("mode").and_then(Json::as_str) {
        Some(name) => name.parse().unwrap_or_else(|e: String| {
            warn(field, format!("{e}, using {}", PoolMode::Random));
            PoolMode::Random
        }),
        None => PoolMode::default(),
    };

    let mut pool = StringPool::new(mode);
    match map.get("pool") {
        Some(Json::Array(entries)) => {
            for entry in entries {
                match entry_text(entry) {
                    Some(text) => pool.push(text),
                    None => warn(field, "pool entries must be scalar values".to_string()),
                }
            }
        }
        _ => warn(field, "pool has no \"pool\" array".to_string()),
    }
    pool
}

fn parse_action(
    map: &Map<String, Json>,
    field: &str,
    warn: &mut dyn FnMut(&str, String),
) -> Option<ActionNode> {
    let Some(text) = map.get("text").and_then(Json::as_str) else {
        warn(field, "action has no \"text\" string".to_string());
        return None;
    };

    let mut node = ActionNode::new(text);
    if let Some(command) = map.get("command").and_then(Json::as_str) {
        node = node.with_command(command);
    }
    match map.get("hover") {
        None => {}
        Some(Json::String(line)) => node = node.with_hover([line.as_str()]),
        Some(Json::Array(lines)) => match string_lines(lines) {
            Some(lines) => node = node.with_hover(lines),
            None => warn(field, "hover lines must be strings".to_string()),
        },
        Some(_) => warn(field, "hover must be a string or an array of strings".to_string()),
    }
    Some(node)
}

/// Extracts the language tag from a filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "pt_BR.json" -> Some("pt_BR")
/// - "/path/to/lang/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<tag>.json` in `message_dir`, plus `global.json` as the global store.
pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .langpackrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(message_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    // Deterministic warning order across platforms.
    paths.sort();

    for path in paths {
        let Some(stem) = extract_locale(&path) else {
            continue;
        };
        let file_path = path.to_string_lossy().to_string();

        let target = if stem.eq_ignore_ascii_case(GLOBAL_FILE_STEM) {
            None
        } else {
            match Language::new(&stem) {
                Ok(language) => Some(language),
                Err(e) => {
                    result.warnings.push(MessageScanWarning {
                        file_path,
                        error: e.to_string(),
                    });
                    continue;
                }
            }
        };

        match parse_json_file(&path) {
            Ok((store, warnings)) => {
                result.files_loaded += 1;
                result.warnings.extend(warnings);
                match target {
                    Some(language) => result.stores.store_mut(language).append(store),
                    None => result.stores.global.append(store),
                }
            }
            Err(e) => {
                warn!(file = %file_path, "skipping message file: {e:#}");
                result.warnings.push(MessageScanWarning {
                    file_path,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        dir = %message_dir.display(),
        files = result.files_loaded,
        warnings = result.warnings.len(),
        "scanned message files"
    );
    Ok(result)
}
