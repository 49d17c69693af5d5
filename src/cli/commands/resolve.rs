use anyhow::{Context, Result};

use super::super::args::ResolveCommand;
use super::{CommandResult, CommandSummary, ResolveSummary};
use crate::core::{EngineContext, LangArg, LangArgs, Language};

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let ctx = EngineContext::new(&cmd.common)?;

    let language: Language = cmd
        .lang
        .parse()
        .with_context(|| format!("Invalid --lang value: \"{}\"", cmd.lang))?;
    let args: LangArgs = cmd
        .args
        .into_iter()
        .map(|(key, value)| LangArg::new(key, value))
        .collect();

    let output = ctx
        .engine
        .resolve(&cmd.field, &language, &args)
        .with_context(|| format!("Cannot resolve \"{}\"", cmd.field))?;
    let source = ctx.engine.source_of(&cmd.field, &language)?;

    Ok(CommandResult {
        summary: CommandSummary::Resolve(ResolveSummary {
            field: cmd.field,
            language,
            source,
            output,
            json: cmd.json,
        }),
        warnings: ctx.warnings,
        exit_on_warnings: false,
    })
}
