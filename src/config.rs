use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Language, Languages, PlaceholderStyle};

pub const CONFIG_FILE_NAME: &str = ".langpackrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default)]
    pub placeholder: PlaceholderStyle,
    /// Language tag to optional fallback tag. The built-in table is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, Option<String>>>,
    /// Seed for the random source, for reproducible pool output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_messages_root() -> String {
    "./lang".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            placeholder: PlaceholderStyle::default(),
            languages: None,
            seed: None,
        }
    }
}

impl Config {
    /// Build the language registry this config describes.
    ///
    /// Fails on malformed tags, fallbacks to undeclared languages and
    /// fallback cycles.
    pub fn languages(&self) -> Result<Languages> {
        let Some(table) = &self.languages else {
            return Ok(Languages::builtin());
        };

        let mut entries = Vec::with_capacity(table.len());
        for (tag, fallback) in table {
            let language = Language::new(tag)
                .with_context(|| format!("Invalid language in 'languages': \"{}\"", tag))?;
            let fallback = match fallback {
                Some(fallback) => Some(Language::new(fallback).with_context(|| {
                    format!("Invalid fallback for \"{}\" in 'languages': \"{}\"", tag, fallback)
                })?),
                None => None,
            };
            entries.push((language, fallback));
        }

        Languages::new(entries).context("Invalid fallback table in 'languages'")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        self.languages()?;
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the search start when using defaults.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
