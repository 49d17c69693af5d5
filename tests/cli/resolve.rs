use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "lang/en.json",
        r#"{
  "greeting": { "welcome": "Welcome, {player}!" },
  "motd": ["Line one", "Line two"],
  "tips": { "type": "pool", "mode": "sequential", "pool": ["first", "second"] },
  "spawn": {
    "type": "action",
    "text": "[Go to {place}]",
    "command": "/warp {place}",
    "hover": ["Teleport to {place}"]
  }
}"#,
    )?;
    test.write_file("lang/fr.json", r#"{ "greeting": { "welcome": "Bienvenue, {player} !" } }"#)?;
    test.write_file("lang/global.json", r#"{ "server": { "name": "Lobby" } }"#)?;
    Ok(test)
}

#[test]
fn test_resolve_with_args() -> Result<()> {
    let test = project()?;
    let output = test
        .resolve_command("greeting.welcome")
        .args(["--arg", "player=Ann"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Welcome, Ann!\n");
    Ok(())
}

#[test]
fn test_resolve_other_language() -> Result<()> {
    let test = project()?;
    let output = test
        .resolve_command("greeting.welcome")
        .args(["--lang", "fr", "-a", "player=Ann"])
        .output()?;

    assert_eq!(stdout(&output), "Bienvenue, Ann !\n");
    Ok(())
}

#[test]
fn test_resolve_regional_fallback() -> Result<()> {
    let test = project()?;
    let output = test
        .resolve_command("GREETING.WELCOME")
        .args(["--lang", "en-GB", "--arg", "player=Bo"])
        .output()?;

    assert_eq!(stdout(&output), "Welcome, Bo!\n");
    Ok(())
}

#[test]
fn test_resolve_global_store() -> Result<()> {
    let test = project()?;
    let output = test
        .resolve_command("server.name")
        .args(["--lang", "fr"])
        .output()?;

    assert_eq!(stdout(&output), "Lobby\n");
    Ok(())
}

#[test]
fn test_resolve_missing_field_echoes_name() -> Result<()> {
    let test = project()?;
    let output = test.resolve_command("menu.title").arg("-v").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "menu.title\n");
    assert!(stderr(&output).contains("not found for en"));
    Ok(())
}

#[test]
fn test_resolve_unknown_placeholder_is_kept() -> Result<()> {
    let test = project()?;
    let output = test.resolve_command("greeting.welcome").output()?;

    assert_eq!(stdout(&output), "Welcome, {player}!\n");
    Ok(())
}

#[test]
fn test_resolve_lines() -> Result<()> {
    let test = project()?;
    let output = test.resolve_command("motd").output()?;

    assert_eq!(stdout(&output), "Line one\nLine two\n");
    Ok(())
}

#[test]
fn test_resolve_action_json() -> Result<()> {
    let test = project()?;
    let output = test
        .resolve_command("spawn")
        .args(["--arg", "place=spawn", "--json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let rendered: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        rendered,
        json!({
            "text": "[Go to spawn]",
            "command": "/warp spawn",
            "hover": ["Teleport to spawn"]
        })
    );
    Ok(())
}

#[test]
fn test_resolve_pool_starts_at_first_entry() -> Result<()> {
    let test = project()?;
    let output = test.resolve_command("tips").output()?;

    assert_eq!(stdout(&output), "first\n");
    Ok(())
}

#[test]
fn test_resolve_invalid_field() -> Result<()> {
    let test = project()?;
    let output = test.resolve_command("a..b").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid field name"));
    Ok(())
}

#[test]
fn test_resolve_invalid_arg() -> Result<()> {
    let test = project()?;
    let output = test.resolve_command("motd").args(["--arg", "player"]).output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected key=value"));
    Ok(())
}

#[test]
fn test_resolve_percent_placeholders() -> Result<()> {
    let test = CliTest::with_file(".langpackrc.json", r#"{ "placeholder": "percent" }"#)?;
    test.write_file("lang/en.json", r#"{ "hello": "Hi %player%, {player}" }"#)?;

    let output = test
        .resolve_command("hello")
        .args(["--arg", "player=Ann"])
        .output()?;

    assert_eq!(stdout(&output), "Hi Ann, {player}\n");
    Ok(())
}

#[test]
fn test_resolve_messages_root_override() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{ "hello": "Hi" }"#)?;

    let output = test
        .resolve_command("hello")
        .args(["--messages-root", "i18n"])
        .output()?;

    assert_eq!(stdout(&output), "Hi\n");
    Ok(())
}

#[test]
fn test_resolve_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.resolve_command("hello").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));
    Ok(())
}
