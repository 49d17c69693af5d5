use crate::core::{FieldSource, Language, RenderedOutput, parsers::json::MessageScanWarning};

#[derive(Debug)]
pub enum CommandSummary {
    Resolve(ResolveSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub field: String,
    pub language: Language,
    /// Store that served the field, `None` when the field name was echoed.
    pub source: Option<FieldSource>,
    pub output: RenderedOutput,
    pub json: bool,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub message_dir: String,
    pub files_loaded: usize,
    /// Field count per loaded language, sorted by tag.
    pub languages: Vec<(Language, usize)>,
    pub global_fields: usize,
    /// Number of languages in the fallback registry.
    pub registered_languages: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running langpack commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems found while loading message files.
    pub warnings: Vec<MessageScanWarning>,
    /// If true, exit code 1 should be returned when there are warnings.
    pub exit_on_warnings: bool,
}
