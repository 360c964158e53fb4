use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .doclocrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".doclocrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localizeRoot"], "./l10n");
    assert_eq!(parsed["globalFunctionsFile"], "globalFunctions");
    assert_eq!(parsed["sourceRoot"], "src");
    assert_eq!(parsed["resolution"], "sequential");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".doclocrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .doclocrc.json already exists
    ");
    assert_eq!(test.read_file(".doclocrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_picked_up_by_apply() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("model.json", r#"{ "name": "empty", "kind": 0 }"#)?;

    assert_cmd_snapshot!(test.apply_command().arg("model.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localized 0 comment fields on 0 reflections (0 of 1 localization file found)
      --> model.json

    ----- stderr -----
    ");

    Ok(())
}
