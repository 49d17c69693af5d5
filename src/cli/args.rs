//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Resolve one field for a language and print the result
//! - `check`: Load config and message files and report load problems
//! - `init`: Initialize langpack configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Messages directory path (overrides config file)
    #[arg(long, env = "LANGPACK_MESSAGES_ROOT")]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a `key=value` argument. The value may itself contain `=`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got \"{s}\"")),
    }
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Field to resolve, e.g. `greeting.welcome`
    pub field: String,

    /// Language tag to resolve for
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Argument bound to a placeholder, repeatable: --arg player=Ann --arg count=3
    #[arg(short, long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    /// Print the rendered output as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a field for a language and print it
    Resolve(ResolveCommand),
    /// Validate the config and message files, reporting load warnings
    Check(CheckCommand),
    /// Initialize a new .langpackrc.json configuration file
    Init,
}
