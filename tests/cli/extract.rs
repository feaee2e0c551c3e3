use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

const APP: &str = r#"
/**
 * @desc Greeting shown on the home page.
 * @meaning greeting
 */
var MSG_HELLO = goog.getMsg('Hello, {$name}!', {'name': user.name});

/** @desc Fallback greeting. */
var MSG_HI = goog.getMsg('Hi');

var greeting = goog.getMsgWithFallback(MSG_HELLO, MSG_HI);
"#;

#[test]
fn test_extract_to_stdout() -> Result<()> {
    let test = CliTest::with_file("src/app.js", APP)?;

    let output = run(&mut test.extract_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");

    let parsed: Value = serde_json::from_str(&output.stdout)?;
    let messages = parsed["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);

    let hello = &messages[0];
    assert_eq!(hello["key"], "MSG_HELLO");
    assert_eq!(hello["id"], "MSG_HELLO");
    assert_eq!(hello["desc"], "Greeting shown on the home page.");
    assert_eq!(hello["meaning"], "greeting");
    assert_eq!(
        hello["parts"],
        json!([
            {"type": "text", "value": "Hello, "},
            {"type": "placeholder", "value": "name"},
            {"type": "text", "value": "!"},
        ])
    );
    assert!(hello["sourceName"].as_str().unwrap().ends_with("src/app.js:6"));

    assert_eq!(
        parsed["fallbacks"],
        json!([{"first": "MSG_HELLO", "second": "MSG_HI"}])
    );

    Ok(())
}

#[test]
fn test_extract_to_output_file() -> Result<()> {
    let test = CliTest::with_file("src/app.js", APP)?;

    let output = run(test.extract_command().args(["-o", "messages.json"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert_eq!(
        output.stderr,
        "\u{2713} Extracted 2 messages from 1 source file - no issues found\n"
    );

    let parsed: Value = serde_json::from_str(&test.read_file("messages.json")?)?;
    assert_eq!(parsed["messages"].as_array().unwrap().len(), 2);

    Ok(())
}

#[test]
fn test_extract_omits_invalid_messages() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"/** @desc Ok */ var MSG_OK = goog.getMsg('ok');
/** @desc Broken */ var MSG_BROKEN = goog.getMsg('{$missing}');
"#,
    )?;

    let output = run(&mut test.extract_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stderr
            .contains("Unrecognized message placeholder referenced: missing")
    );

    let parsed: Value = serde_json::from_str(&output.stdout)?;
    let keys: Vec<&str> = parsed["messages"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["key"].as_str())
        .collect();
    assert_eq!(keys, vec!["MSG_OK"]);
    assert!(parsed.get("fallbacks").is_none());

    Ok(())
}

#[test]
fn test_extract_with_fingerprint_ids() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "/** @desc A */ var MSG_A = goog.getMsg('Same');\n/** @desc B */ var MSG_B = goog.getMsg('Same');\n",
    )?;

    let output = run(test.extract_command().args(["--id-generator", "fingerprint"]))?;

    assert_eq!(output.code, Some(0));
    let parsed: Value = serde_json::from_str(&output.stdout)?;
    let messages = parsed["messages"].as_array().unwrap();
    let first = messages[0]["id"].as_str().unwrap();
    let second = messages[1]["id"].as_str().unwrap();
    assert!(first.chars().all(|c| c.is_ascii_digit()));
    assert_ne!(first, second);

    Ok(())
}

#[test]
fn test_extract_legacy_messages_with_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "var MSG_SAVE_HELP = 'Save button';\nvar MSG_SAVE = 'Save';\n",
    )?;

    let output = run(test.extract_command().args(["--style", "relax"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("warning:"));

    let parsed: Value = serde_json::from_str(&output.stdout)?;
    let save = &parsed["messages"][0];
    assert_eq!(save["key"], "MSG_SAVE");
    assert_eq!(save["desc"], "Save button");

    Ok(())
}
