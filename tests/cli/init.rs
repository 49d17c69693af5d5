use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(
        parsed.get("messagesRoot").and_then(Value::as_str),
        Some("./lang")
    );
    assert_eq!(
        parsed.get("placeholder").and_then(Value::as_str),
        Some("braces")
    );
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\u{2713} Created .langpackrc.json\n");
    assert!(test.root().join(".langpackrc.json").exists());

    let content = test.read_file(".langpackrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".langpackrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".langpackrc.json already exists"));
    assert_eq!(test.read_file(".langpackrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("lang/en.json", r#"{ "hello": "Hello {player}" }"#)?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = test
        .resolve_command("hello")
        .args(["--arg", "player=Ann"])
        .output()?;
    assert_eq!(stdout(&output), "Hello Ann\n");

    Ok(())
}
