use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init, resolve::resolve},
};

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
