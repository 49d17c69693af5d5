use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file("lang/en.json", r#"{ "a": "A", "b": { "c": "C" } }"#)?;
    test.write_file("lang/pt-BR.json", r#"{ "a": "A" }"#)?;
    test.write_file("lang/global.json", r#"{ "name": "Lobby" }"#)?;

    let output = test.check_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "en      2 fields\npt_br   1 field\nglobal  1 field\n\u{2713} Loaded 3 message files - no problems found\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "lang/en.json",
        r#"{
  "tips": { "type": "pool", "mode": "shuffle", "pool": ["a"] },
  "nothing": null
}"#,
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("warning: tips: unknown pool mode \"shuffle\", using RANDOM"));
    assert!(out.contains("warning: nothing: null value ignored"));
    assert!(out.contains("Loaded 1 message file with 2 warnings"));
    Ok(())
}

#[test]
fn test_check_unparseable_file() -> Result<()> {
    let test = CliTest::with_file("lang/en.json", r#"{ "ok": "fine" }"#)?;
    test.write_file("lang/fr.json", "{ not json")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("fr.json"));
    assert!(out.contains("Loaded 1 message file with 1 warning"));
    Ok(())
}

#[test]
fn test_check_fallback_cycle() -> Result<()> {
    let test = CliTest::with_file(
        ".langpackrc.json",
        r#"{ "languages": { "a": "b", "b": "a" } }"#,
    )?;
    test.write_file("lang/a.json", "{}")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("language fallback cycle: a -> b -> a"));
    Ok(())
}

#[test]
fn test_check_unknown_fallback() -> Result<()> {
    let test = CliTest::with_file(
        ".langpackrc.json",
        r#"{ "languages": { "en_pirate": "en" } }"#,
    )?;
    test.write_file("lang/en_pirate.json", "{}")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("undeclared language \"en\""));
    Ok(())
}

#[test]
fn test_check_verbose() -> Result<()> {
    let test = CliTest::with_file("lang/en.json", r#"{ "a": "A" }"#)?;

    let output = test.check_command().arg("--verbose").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("No .langpackrc.json found"));
    let out = stdout(&output);
    assert!(out.contains("global  0 fields"));
    assert!(out.contains("languages registered"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("resolve"));
    assert!(out.contains("check"));
    assert!(out.contains("init"));
    Ok(())
}
