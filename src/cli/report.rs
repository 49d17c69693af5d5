//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow langpack to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary, ResolveSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::parsers::json::MessageScanWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout, with verbose notes on stderr.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match &result.summary {
        CommandSummary::Resolve(summary) => print_resolve(summary, verbose, out, err)?,
        CommandSummary::Check(summary) => print_check(summary, &result.warnings, verbose, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
    Ok(())
}

fn print_resolve<W: Write, E: Write>(
    summary: &ResolveSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    if summary.json {
        let json = serde_json::to_string_pretty(&summary.output)
            .context("Failed to serialize rendered output.")?;
        let _ = writeln!(out, "{}", json);
    } else {
        let _ = writeln!(out, "{}", summary.output.to_plain_text());
    }

    if verbose {
        let note = match &summary.source {
            Some(source) => format!(
                "\"{}\" for {} served by {}",
                summary.field, summary.language, source
            ),
            None => format!(
                "\"{}\" not found for {}, showing the field name",
                summary.field, summary.language
            ),
        };
        let _ = writeln!(err, "{} {}", "note:".bold(), note);

        if !summary.json {
            if let Some(command) = &summary.output.command {
                let _ = writeln!(err, "  {} command: {}", "=".blue(), command);
            }
            for line in &summary.output.hover {
                let _ = writeln!(err, "  {} hover: {}", "=".blue(), line);
            }
        }
    }
    Ok(())
}

fn print_check<W: Write>(
    summary: &CheckSummary,
    warnings: &[MessageScanWarning],
    verbose: bool,
    out: &mut W,
) {
    let width = summary
        .languages
        .iter()
        .map(|(language, _)| language.code().len())
        .chain(["global".len()])
        .max()
        .unwrap_or(0);

    for (language, count) in &summary.languages {
        let _ = writeln!(
            out,
            "{}  {}",
            format!("{:<width$}", language.code()).cyan(),
            fields(*count)
        );
    }
    if summary.global_fields > 0 || verbose {
        let _ = writeln!(
            out,
            "{}  {}",
            format!("{:<width$}", "global").cyan(),
            fields(summary.global_fields)
        );
    }
    if verbose {
        let _ = writeln!(
            out,
            "{} {} languages registered, messages from {}",
            "note:".bold(),
            summary.registered_languages,
            summary.message_dir
        );
    }

    for warning in warnings {
        let _ = writeln!(out, "{}: {}", "warning".bold().yellow(), warning.error);
        let _ = writeln!(out, "  {} {}", "-->".blue(), warning.file_path);
    }

    let files = plural(summary.files_loaded, "message file", "message files");
    if warnings.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Loaded {} - no problems found", files).green()
        );
    } else {
        let _ = writeln!(
            out,
            "\n{} Loaded {} with {} {}",
            FAILURE_MARK.red(),
            files,
            warnings.len(),
            if warnings.len() == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn fields(count: usize) -> String {
    plural(count, "field", "fields")
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldSource, Language, RenderedOutput};
    use pretty_assertions::assert_eq;

    fn strip_ansi(s: &str) -> String {
        // Simple ANSI escape code stripper for testing
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render(result: &CommandResult, verbose: bool) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_to(result, verbose, &mut out, &mut err).unwrap();
        (
            strip_ansi(&String::from_utf8(out).unwrap()),
            strip_ansi(&String::from_utf8(err).unwrap()),
        )
    }

    fn resolve_result(output: RenderedOutput, json: bool) -> CommandResult {
        CommandResult {
            summary: CommandSummary::Resolve(ResolveSummary {
                field: "welcome".to_string(),
                language: Language::new("fr").unwrap(),
                source: Some(FieldSource::Language(Language::new("en").unwrap())),
                output,
                json,
            }),
            warnings: Vec::new(),
            exit_on_warnings: false,
        }
    }

    #[test]
    fn test_resolve_plain_text() {
        let result = resolve_result(RenderedOutput::text("Hello Ann"), false);
        let (out, err) = render(&result, false);
        assert_eq!(out, "Hello Ann\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_resolve_verbose_note() {
        let output = RenderedOutput::text("Click").with_command("/spawn");
        let (out, err) = render(&resolve_result(output, false), true);
        assert_eq!(out, "Click\n");
        assert_eq!(
            err,
            "note: \"welcome\" for fr served by en\n  = command: /spawn\n"
        );
    }

    #[test]
    fn test_resolve_json() {
        let output = RenderedOutput::text("Click").with_command("/spawn");
        let (out, _) = render(&resolve_result(output, true), false);
        assert_eq!(
            out,
            "{\n  \"text\": \"Click\",\n  \"command\": \"/spawn\"\n}\n"
        );
    }

    fn check_result(warnings: Vec<MessageScanWarning>) -> CommandResult {
        CommandResult {
            summary: CommandSummary::Check(CheckSummary {
                message_dir: "./lang".to_string(),
                files_loaded: 2,
                languages: vec![
                    (Language::new("en").unwrap(), 3),
                    (Language::new("pt_br").unwrap(), 1),
                ],
                global_fields: 0,
                registered_languages: 2,
            }),
            warnings,
            exit_on_warnings: true,
        }
    }

    #[test]
    fn test_check_clean() {
        let (out, _) = render(&check_result(Vec::new()), false);
        assert_eq!(
            out,
            "en      3 fields\npt_br   1 field\n\u{2713} Loaded 2 message files - no problems found\n"
        );
    }

    #[test]
    fn test_check_with_warnings() {
        let warnings = vec![MessageScanWarning {
            file_path: "lang/en.json".to_string(),
            error: "tips: pool has no \"pool\" array".to_string(),
        }];
        let (out, _) = render(&check_result(warnings), false);
        assert!(out.contains("warning: tips: pool has no \"pool\" array\n  --> lang/en.json\n"));
        assert!(out.ends_with("\u{2718} Loaded 2 message files with 1 warning\n"));
    }

    #[test]
    fn test_init_message() {
        let result = CommandResult {
            summary: CommandSummary::Init(InitSummary { created: true }),
            warnings: Vec::new(),
            exit_on_warnings: false,
        };
        let (out, _) = render(&result, false);
        assert_eq!(out, "\u{2713} Created .langpackrc.json\n");
    }
}
