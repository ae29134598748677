//! Integration tests for the Babbleon CLI
//!
//! These tests run the actual CLI binary and verify output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REFERENCE_YAML: &str = r#"
tabs:
  index: Correction
  favorites: History
  settings:
    title: Settings
    description: Configure your preferences
buttons:
  save: Save
  cancel: Cancel
"#;

const DOCS_MD: &str = r#"# Navigation

The main navigation contains several tabs:
- `tabs.index`: Main correction tab
- `tabs.favorites`: History view
- `tabs.settings.title`: Settings page
- `tabs.unknown`: This is an invalid reference
- `buttons.save`: Save button

## Other Elements
- `buttons.cancel`: Cancel button
- `buttons.unknown`: Another invalid reference
- `unknown.path`: Invalid path
"#;

/// Get the binary to test, running inside `dir`
fn babbleon_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("babbleon").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

/// Project with a `.babbleon/` reference + docs pair and no config file
fn project(docs: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let babbleon_dir = temp_dir.path().join(".babbleon");
    fs::create_dir(&babbleon_dir).unwrap();
    fs::write(babbleon_dir.join("reference.yaml"), REFERENCE_YAML).unwrap();
    fs::write(babbleon_dir.join("docs.md"), docs).unwrap();
    temp_dir
}

#[test]
fn test_help_flag() {
    let temp_dir = TempDir::new().unwrap();
    babbleon_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_check_help() {
    let temp_dir = TempDir::new().unwrap();
    babbleon_cmd(&temp_dir)
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--reference"))
        .stdout(predicate::str::contains("--format"));
}

// ============================================================================
// init
// ============================================================================

#[test]
fn test_init_creates_project() {
    let temp_dir = TempDir::new().unwrap();

    babbleon_cmd(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created babbleon.json"));

    assert!(temp_dir.path().join("babbleon.json").exists());
    assert!(temp_dir.path().join(".babbleon/reference.yaml").exists());
    assert!(temp_dir.path().join(".babbleon/docs.md").exists());
}

#[test]
fn test_init_then_check_is_clean() {
    let temp_dir = TempDir::new().unwrap();

    babbleon_cmd(&temp_dir).arg("init").assert().success();
    babbleon_cmd(&temp_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 valid, 0 invalid"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("babbleon.json"), "{}").unwrap();

    babbleon_cmd(&temp_dir)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BAB-021"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("babbleon.json")).unwrap(),
        "{}"
    );
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("babbleon.json"), "{}").unwrap();

    babbleon_cmd(&temp_dir)
        .args(["init", "--force"])
        .assert()
        .success();

    let config = fs::read_to_string(temp_dir.path().join("babbleon.json")).unwrap();
    assert!(config.contains("reference_file"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_reports_invalid_references() {
    let temp_dir = project(DOCS_MD);

    babbleon_cmd(&temp_dir)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("tabs.unknown"))
        .stdout(predicate::str::contains("buttons.unknown"))
        .stdout(predicate::str::contains("unknown.path"))
        .stdout(predicate::str::contains("docs.md:7"))
        .stdout(predicate::str::contains("5 valid, 3 invalid"));
}

#[test]
fn test_check_clean_docs_succeeds() {
    let temp_dir = project("Use `tabs.index` and `buttons.save`.\n");

    babbleon_cmd(&temp_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 valid, 0 invalid"));
}

#[test]
fn test_check_json_format() {
    let temp_dir = project(DOCS_MD);

    let output = babbleon_cmd(&temp_dir)
        .args(["check", "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let documents = parsed.as_array().unwrap();
    assert_eq!(documents.len(), 1);

    let doc = &documents[0];
    assert!(doc["document"].as_str().unwrap().ends_with("docs.md"));
    assert_eq!(doc["valid"].as_array().unwrap().len(), 5);
    assert_eq!(doc["invalid"].as_array().unwrap().len(), 3);
    assert!(doc["invalid"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["value"].is_null() && r["value_type"].is_null()));
}

#[test]
fn test_check_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("i18n")).unwrap();
    fs::create_dir(temp_dir.path().join("docs")).unwrap();
    fs::write(
        temp_dir.path().join("i18n/en.json"),
        r#"{"menu": {"open": "Open"}}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("docs/a.md"), "`menu.open`\n").unwrap();
    fs::write(temp_dir.path().join("docs/b.md"), "`menu.close`\n").unwrap();
    fs::write(
        temp_dir.path().join("babbleon.json"),
        r#"{"reference_file": "i18n/en.json", "docs": ["docs/*.md"]}"#,
    )
    .unwrap();

    babbleon_cmd(&temp_dir)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("menu.close"))
        .stdout(predicate::str::contains("2 document(s): 1 valid, 1 invalid"));
}

#[test]
fn test_check_overrides() {
    let temp_dir = project(DOCS_MD);
    fs::write(
        temp_dir.path().join("ref.toml"),
        "[buttons]\nsave = \"Save\"\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("other.md"), "`buttons.save`").unwrap();

    babbleon_cmd(&temp_dir)
        .args(["check", "--reference", "ref.toml", "--docs", "other.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 valid, 0 invalid"));
}

#[test]
fn test_check_missing_reference_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("docs.md"), "`a.b`").unwrap();

    babbleon_cmd(&temp_dir)
        .args(["check", "--docs", "docs.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_check_non_mapping_reference() {
    let temp_dir = project(DOCS_MD);
    fs::write(temp_dir.path().join("list.yaml"), "- tabs\n- buttons\n").unwrap();

    babbleon_cmd(&temp_dir)
        .args(["check", "--reference", "list.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BAB-001"));
}

#[test]
fn test_check_without_docs() {
    let temp_dir = project(DOCS_MD);

    babbleon_cmd(&temp_dir)
        .args(["check", "--docs", "nothing/*.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BAB-031"));
}
