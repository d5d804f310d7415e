use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["domain", "bugReport", "lastTranslator", "team", "headers", "destFile"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["destFile"], "translations.pot");
    assert_eq!(parsed["headers"], true);

    // 2-space indentation
    assert!(content.contains("\n  \""), "Config should be pretty-printed");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\u{2713} Created .wppotrc.json\n");
    assert!(test.root().join(".wppotrc.json").exists());

    let content = test.read_file(".wppotrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".wppotrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("error: .wppotrc.json already exists"));
    assert_eq!(test.read_file(".wppotrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("plugin.php", r#"<?php _e( "Name", "test" ); ?>"#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr_of(&output)
    );
    assert!(test.read_file("translations.pot")?.contains("msgid \"Name\"\n"));

    Ok(())
}
