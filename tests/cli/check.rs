use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"
/** @desc Greeting shown on the home page. */
var MSG_HELLO = goog.getMsg('Hello, {$name}!', {'name': user.name});
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 source file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_missing_description_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "var MSG_HELLO = goog.getMsg('Hello');\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: Message MSG_HELLO has no description"));
    assert!(output.stdout.contains("src/app.js:1:5"));
    assert!(output.stdout.contains("1 | var MSG_HELLO = goog.getMsg('Hello');"));
    assert!(output.stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_relax_style_downgrades_to_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "var MSG_A_HELP = 'Shown on the button';\nvar MSG_A = 'Save';\n",
    )?;

    let output = run(test.check_command().args(["--style", "relax"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning:"));
    assert!(output.stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_style_from_config_file() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "var MSG_A = 'Save';\n")?;
    test.write_file(".jsmsgrc.json", r#"{ "style": "legacy" }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_cli_style_overrides_config_file() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "var MSG_A = 'Save';\n")?;
    test.write_file(".jsmsgrc.json", r#"{ "style": "legacy" }"#)?;

    let output = run(test.check_command().args(["--style", "closure"]))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error:"));

    Ok(())
}

#[test]
fn test_orphaned_call_and_duplicate_key() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"/** @desc A */
var MSG_A = goog.getMsg('a');
/** @desc A again */
var MSG_A = goog.getMsg('b');
alert(goog.getMsg('c'));
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("Duplicate message variable name found for MSG_A"));
    assert!(output.stdout.contains("= note: initial definition"));
    assert!(output.stdout.contains("2 problems (2 errors, 0 warnings)"));

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "var MSG_A = goog.getMsg(;\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("src/broken.js"));
    assert!(output.stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_node_modules_and_test_files_are_ignored() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "/** @desc A */ var MSG_A = goog.getMsg('a');\n",
    )?;
    test.write_file("node_modules/lib/index.js", "var MSG_X = 'legacy';\n")?;
    test.write_file("src/app.test.js", "var MSG_Y = 'legacy';\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 source file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_externs_are_not_checked() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "/** @desc A */ var MSG_A = goog.getMsg('a');\n",
    )?;
    test.write_file("externs/goog.js", "var MSG_EXTERN = 'legacy';\n")?;
    test.write_file(".jsmsgrc.json", r#"{ "externs": ["externs/goog.js"] }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_invalid_config_is_a_command_error() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "")?;
    test.write_file(".jsmsgrc.json", "{ not json")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error:"));

    Ok(())
}

#[test]
fn test_source_root_argument() -> Result<()> {
    let test = CliTest::with_file(
        "web/src/app.js",
        "/** @desc A */ var MSG_A = goog.getMsg('a');\n",
    )?;
    test.write_file("other/app.js", "var MSG_B = 'legacy';\n")?;

    let output = run(test.check_command().args(["--source-root", "web"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));

    Ok(())
}
