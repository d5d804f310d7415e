use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr_of, stdout_of};

const PLUGIN: &str = r#"<?php
/*
 * Plugin Name: Test
 */
_e( "Name", "test" );
echo esc_html_x( 'Post', 'verb', 'test' );
printf( _n( '%s star', '%s stars', $count, 'test' ), $count );
_e( "Other", "other-domain" );
"#;

#[test]
fn test_extract_writes_pot_file() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;

    let output = test.extract_command().args(["--domain", "test"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("\u{2713} Extracted 3 strings from 1 file to "));

    let pot = test.read_file("translations.pot")?;
    assert!(pot.starts_with(
        "# Copyright (C) 2023 test\n\
         # This file is distributed under the same license as the test package.\n\
         msgid \"\"\n\
         msgstr \"\"\n\
         \"Project-Id-Version: test\\n\"\n"
    ));
    assert!(pot.contains("\"POT-Creation-Date: 2023-11-14 22:13+0000\\n\"\n"));
    assert!(pot.contains("\n#: plugin.php:5\nmsgid \"Name\"\nmsgstr \"\"\n"));
    assert!(pot.contains("\n#: plugin.php:6\nmsgctxt \"verb\"\nmsgid \"Post\"\nmsgstr \"\"\n"));
    assert!(pot.contains(
        "\n#: plugin.php:7\n\
         msgid \"%s star\"\n\
         msgid_plural \"%s stars\"\n\
         msgstr[0] \"\"\n\
         msgstr[1] \"\"\n"
    ));
    assert!(!pot.contains("Other"));

    Ok(())
}

#[test]
fn test_extract_to_stdout() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;

    let output = test.extract_command().arg("--stdout").output()?;

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("# Copyright (C) 2023 unnamed project\n"));
    assert!(stdout.contains("msgid \"Other\"\n"));
    assert!(stderr_of(&output).contains("Extracted 4 strings from 1 file to stdout"));
    assert!(!test.root().join("translations.pot").exists());

    Ok(())
}

#[test]
fn test_extract_is_deterministic() -> Result<()> {
    let test = CliTest::new()?;
    for (path, content) in [
        ("zeta.php", "<?php _e( 'Zeta', 'test' ); _e( 'Shared', 'test' );"),
        ("inc/alpha.php", "<?php _e( 'Shared', 'test' ); _e( 'Alpha', 'test' );"),
        ("inc/admin/page.php", "<?php _x( 'Shared', 'menu', 'test' );"),
    ] {
        test.write_file(path, content)?;
    }

    let first = stdout_of(&test.extract_command().arg("--stdout").output()?);
    let second = stdout_of(&test.extract_command().arg("--stdout").output()?);
    assert_eq!(first, second);

    let entries: Vec<&str> = first
        .lines()
        .filter(|line| line.starts_with("#: "))
        .collect();
    assert_eq!(
        entries,
        vec![
            "#: inc/admin/page.php:1",
            "#: inc/alpha.php:1 zeta.php:1",
            "#: inc/alpha.php:1",
            "#: zeta.php:1",
        ]
    );

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;
    test.write_file(
        ".wppotrc.json",
        r#"{
  "domain": "other-domain",
  "package": "Other Plugin",
  "headers": { "Hello-World": "This is a test" },
  "destFile": "languages/other.pot"
}"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let pot = test.read_file("languages/other.pot")?;
    assert!(pot.contains("\"Project-Id-Version: Other Plugin\\n\"\n"));
    assert!(pot.contains("\"Hello-World: This is a test\\n\"\n"));
    assert!(pot.contains("msgid \"Other\"\n"));
    assert!(!pot.contains("msgid \"Name\"\n"));

    Ok(())
}

#[test]
fn test_cli_flags_override_config_file() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;
    test.write_file(".wppotrc.json", r#"{ "domain": "other-domain" }"#)?;

    let output = test
        .extract_command()
        .args(["--domain", "test", "--no-headers", "-o", "out/test.pot"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let pot = test.read_file("out/test.pot")?;
    assert!(pot.contains("msgid \"Name\"\n"));
    assert!(!pot.contains("X-Poedit-KeywordsList"));

    Ok(())
}

#[test]
fn test_extract_custom_header_flag() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;

    let output = test
        .extract_command()
        .args(["--stdout", "--header", "Hello-World=This is a test"])
        .output()?;

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("\"X-Poedit-SourceCharset: UTF-8\\n\"\n"));
    assert!(stdout.contains("\"Hello-World: This is a test\\n\"\n"));

    Ok(())
}

#[test]
fn test_extract_ignores_vendor() -> Result<()> {
    let test = CliTest::with_file("plugin.php", r#"<?php _e( "Mine", "test" );"#)?;
    test.write_file("vendor/lib/lib.php", r#"<?php _e( "Theirs", "test" );"#)?;
    test.write_file("assets/app.js", r#"__( "Script", "test" );"#)?;

    let output = test.extract_command().arg("--stdout").output()?;

    let stdout = stdout_of(&output);
    assert!(stdout.contains("msgid \"Mine\"\n"));
    assert!(!stdout.contains("Theirs"));
    assert!(!stdout.contains("Script"));

    Ok(())
}

#[test]
fn test_extract_with_source_root() -> Result<()> {
    let test = CliTest::with_file("theme/functions.php", "<?php\n\n_e( 'Theme', 'test' );")?;

    let output = test
        .extract_command()
        .args(["--source-root", "theme", "--stdout"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("#: functions.php:3\nmsgid \"Theme\"\n"));

    Ok(())
}

#[test]
fn test_extract_nothing_found() -> Result<()> {
    let test = CliTest::with_file("plugin.php", "<?php echo 'no translations';")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("\u{2718} No translatable strings found in 1 file"));
    // The header-only template is still written.
    assert!(test.read_file("translations.pot")?.contains("msgid \"\"\n"));

    Ok(())
}

#[test]
fn test_extract_reports_skipped_calls() -> Result<()> {
    let test = CliTest::with_file(
        "plugin.php",
        "<?php _e( 'Static', 'test' );\n_e( $dynamic, 'test' );",
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("warning: 1 call(s) could not be extracted statically"));

    let output = test.extract_command().arg("-v").output()?;
    assert!(
        stdout_of(&output)
            .contains("note: skipped _e() at plugin.php:2: text argument is not a string literal")
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;
    test.write_file(".wppotrc.json", r#"["domain"]"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Require a argument of type object."));
    assert!(!test.root().join("translations.pot").exists());

    Ok(())
}

#[test]
fn test_invalid_source_date_epoch_is_fatal() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;

    let output = test
        .extract_command()
        .env("SOURCE_DATE_EPOCH", "yesterday")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Invalid SOURCE_DATE_EPOCH"));

    Ok(())
}

#[test]
fn test_reserved_header_flag_is_fatal() -> Result<()> {
    let test = CliTest::with_file("plugin.php", PLUGIN)?;

    let output = test
        .extract_command()
        .args(["--header", "Content-Type=text/html"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Header \"Content-Type\" is written by wp-pot"));
    assert!(!test.root().join("translations.pot").exists());

    Ok(())
}
