//! Building a ready [`Engine`] from configuration and message files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        SharedRandom,
        parsers::json::{MessageScanWarning, scan_message_files},
        processor::Engine,
    },
};

/// An engine loaded from disk, plus what happened while loading it.
pub struct EngineContext {
    pub engine: Engine,
    pub config: Config,
    /// True if a config file was found, false if using defaults.
    pub config_from_file: bool,
    pub message_dir: PathBuf,
    pub warnings: Vec<MessageScanWarning>,
    /// Number of message files that parsed successfully.
    pub files_loaded: usize,
}

impl EngineContext {
    /// Create a new `EngineContext` from command line arguments.
    ///
    /// Configuration is searched from the current directory upwards.
    /// `--messages-root` overrides the config file and resolves against the
    /// current directory; `messagesRoot` from the file resolves against the
    /// file's directory.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid (including a broken fallback table)
    /// - Messages directory doesn't exist
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(Path::new("."))?;

        if common_args.verbose && !config_result.from_file {
            eprintln!("Note: No .langpackrc.json found, using default configuration");
        }

        let config = config_result.config;
        let message_dir = match &common_args.messages_root {
            Some(messages_root) => messages_root.clone(),
            None => resolve_messages_root(&config_result.base_dir, &config.messages_root),
        };

        let (engine, loaded) = load_engine(&config, &message_dir)?;
        Ok(Self {
            engine,
            config,
            config_from_file: config_result.from_file,
            message_dir,
            warnings: loaded.warnings,
            files_loaded: loaded.files_loaded,
        })
    }
}

fn resolve_messages_root(base_dir: &Path, messages_root: &str) -> PathBuf {
    let p = Path::new(messages_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
    base_dir.join(rel)
}

/// What a load left behind besides the stores themselves.
#[derive(Debug, Default)]
pub struct LoadedMessages {
    pub warnings: Vec<MessageScanWarning>,
    pub files_loaded: usize,
}

/// Build an engine from `config` and fill it from `message_dir`.
pub fn load_engine(config: &Config, message_dir: &Path) -> Result<(Engine, LoadedMessages)> {
    let mut engine = Engine::new(config.languages()?).with_style(config.placeholder);
    if let Some(seed) = config.seed {
        engine = engine.with_random(SharedRandom::seeded(seed));
    }

    let scan = scan_message_files(message_dir)?;
    engine.append(scan.stores);
    info!(
        dir = %message_dir.display(),
        files = scan.files_loaded,
        warnings = scan.warnings.len(),
        "message directory appended"
    );

    Ok((
        engine,
        LoadedMessages {
            warnings: scan.warnings,
            files_loaded: scan.files_loaded,
        },
    ))
}

#[cfg(test)]
mod tests {
    use crate::core::{LangArgs, Language, PlaceholderStyle, context::*};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_messages_root() {
        let base = Path::new("/srv/app");
        assert_eq!(
            resolve_messages_root(base, "./lang"),
            PathBuf::from("/srv/app/lang")
        );
        assert_eq!(
            resolve_messages_root(base, "i18n/messages"),
            PathBuf::from("/srv/app/i18n/messages")
        );
        assert_eq!(
            resolve_messages_root(base, "/etc/lang"),
            PathBuf::from("/etc/lang")
        );
    }

    #[test]
    fn test_load_engine_applies_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("en.json"),
            r#"{ "welcome": "Hi %player%", "only_en": "English" }"#,
        )
        .unwrap();
        fs::write(dir.path().join("en_pirate.json"), r#"{ "welcome": "Ahoy %player%" }"#).unwrap();

        let config: Config = serde_json::from_str(
            r#"{
                "placeholder": "percent",
                "languages": { "en": null, "en_pirate": "en" },
                "seed": 1
            }"#,
        )
        .unwrap();

        let (engine, loaded) = load_engine(&config, dir.path()).unwrap();
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.files_loaded, 2);
        assert_eq!(engine.style(), PlaceholderStyle::Percent);

        let pirate = Language::new("en_pirate").unwrap();
        let args = LangArgs::new().with("player", "Ann");
        assert_eq!(
            engine.resolve_text("welcome", &pirate, &args).unwrap(),
            "Ahoy Ann"
        );
        assert_eq!(
            engine.resolve_text("only_en", &pirate, &args).unwrap(),
            "English"
        );
    }

    #[test]
    fn test_load_engine_missing_dir() {
        let dir = tempdir().unwrap();
        let result = load_engine(&Config::default(), &dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_engine_invalid_languages() {
        let dir = tempdir().unwrap();
        let config: Config =
            serde_json::from_str(r#"{ "languages": { "a": "b", "b": "a" } }"#).unwrap();
        assert!(load_engine(&config, dir.path()).is_err());
    }
}
