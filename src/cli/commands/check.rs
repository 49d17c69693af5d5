use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::core::EngineContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = EngineContext::new(&cmd.common)?;
    let (languages, global_fields) = ctx.engine.summary();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            message_dir: ctx.message_dir.display().to_string(),
            files_loaded: ctx.files_loaded,
            languages,
            global_fields,
            registered_languages: ctx.engine.languages().len(),
        }),
        warnings: ctx.warnings,
        exit_on_warnings: true,
    })
}
