use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!([]));
    assert_eq!(parsed["ignores"], serde_json::json!(["**/node_modules/**"]));
    assert_eq!(parsed["ignoreTestFiles"], true);
    assert_eq!(parsed["style"], "closure");
    assert_eq!(parsed["idGenerator"], "key");

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("\u{2713} Created .jsmsgrc.json\n"));
    assert!(test.root().join(".jsmsgrc.json").exists());

    let content = test.read_file(".jsmsgrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".jsmsgrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "Error: .jsmsgrc.json already exists\n");
    assert_eq!(test.read_file(".jsmsgrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_in_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/src/app.js", "")?;

    let output = run(test.command().args(["init", "--source-root", "web"]))?;

    assert_eq!(output.code, Some(0));
    assert!(test.root().join("web/.jsmsgrc.json").exists());
    assert!(!test.root().join(".jsmsgrc.json").exists());

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;
    test.write_file(
        "src/app.js",
        "/** @desc Title */ var MSG_TITLE = goog.getMsg('Title');\n",
    )?;

    let output = run(&mut test.check_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        output.stderr
    );

    Ok(())
}
