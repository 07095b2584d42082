//! CLI flag contract tests
//!
//! Verifies the argument surface: format validation, --no-results,
//! --config overrides, and that doctor's local checks pass with the
//! network probe skipped.

use assert_cmd::Command;
use predicates::prelude::*;

const MINI_CORPUS: &str = r#"[
  {"concept": "osmosis",
   "student_level": "middle school student (13-14 years old)",
   "explanation": "Water moves through a membrane. Think of a crowded room emptying into a hall."}
]"#;

fn cmd() -> Command {
    Command::cargo_bin("lexiscope").expect("binary exists")
}

#[test]
fn test_doctor_local_checks_pass_without_network() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["doctor", "--skip-api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat API check skipped"))
        .stdout(predicate::str::contains("All local checks passed"));
}

#[test]
fn test_invalid_format_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("responses.json"), MINI_CORPUS).unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["analyze", "responses.json", "--format", "sarif"])
        .assert()
        .failure();
}

#[test]
fn test_no_results_skips_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("responses.json"), MINI_CORPUS).unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["analyze", "responses.json", "--no-results"])
        .assert()
        .success();
    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_config_override_changes_keywords() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("responses.json"), MINI_CORPUS).unwrap();
    // A config whose analogy list does not include "think of"
    std::fs::write(
        dir.path().join("custom.toml"),
        r#"
            [analysis]
            analogy_keywords = ["analogous"]
        "#,
    )
    .unwrap();

    let default_run = cmd()
        .current_dir(dir.path())
        .args(["analyze", "responses.json", "-f", "json", "--no-results"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&default_run.get_output().stdout).to_string();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["rows"][0]["analogy_count"], 1); // "think of"

    let custom_run = cmd()
        .current_dir(dir.path())
        .args([
            "analyze",
            "responses.json",
            "-f",
            "json",
            "--no-results",
            "--config",
            "custom.toml",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&custom_run.get_output().stdout).to_string();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["rows"][0]["analogy_count"], 0);
}

#[test]
fn test_bad_config_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("responses.json"), MINI_CORPUS).unwrap();
    cmd()
        .current_dir(dir.path())
        .args([
            "analyze",
            "responses.json",
            "--config",
            "missing.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
