//! Integration tests for the pinguard binary
//!
//! Each test runs the compiled binary with `XDG_CONFIG_HOME` pointed at a
//! fresh temp directory, so no user rule file leaks in and `init` writes
//! somewhere disposable.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a pinguard command with an isolated config dir
fn pinguard(config_home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("pinguard"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_accepts_strong_pin() {
    let temp = TempDir::new().unwrap();

    pinguard(&temp)
        .args(["check", "849163"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Must be 6 to 12 characters long"))
        .stdout(predicate::str::contains("PIN accepted"));
}

#[test]
fn test_check_rejects_repeated_pin_from_stdin_as_json() {
    let temp = TempDir::new().unwrap();

    pinguard(&temp)
        .args(["check", "--format", "json"])
        .write_stdin("111111\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""acceptable": false"#))
        .stdout(predicate::str::contains("NoRepetitionOfTheSameNumbersValidation"))
        // The PIN never shows up in the report or the logs
        .stdout(predicate::str::contains("111111").not())
        .stderr(predicate::str::contains("111111").not());
}

#[test]
fn test_check_reports_rejection_in_text() {
    let temp = TempDir::new().unwrap();

    pinguard(&temp)
        .arg("check")
        .write_stdin("4821\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ Must be 6 to 12 characters long"))
        .stdout(predicate::str::contains("PIN rejected"));
}

#[test]
fn test_check_with_inverted_bounds_fails() {
    let temp = TempDir::new().unwrap();
    let rules = temp.path().join("bad.toml");
    fs::write(&rules, "min_length = 8\nmax_length = 4\n").unwrap();

    pinguard(&temp)
        .arg("--rules")
        .arg(&rules)
        .args(["check", "849163"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "min_length 8 is greater than max_length 4",
        ));
}

#[test]
fn test_check_with_missing_rules_file_fails() {
    let temp = TempDir::new().unwrap();

    pinguard(&temp)
        .arg("--rules")
        .arg(temp.path().join("missing.toml"))
        .args(["check", "849163"])
        .assert()
        .code(2);
}

#[test]
fn test_check_uses_explicit_rules_file() {
    let temp = TempDir::new().unwrap();
    let rules = temp.path().join("short.json");
    fs::write(&rules, r#"{ "min_length": 4, "max_length": 4 }"#).unwrap();

    pinguard(&temp)
        .arg("--rules")
        .arg(&rules)
        .arg("check")
        .write_stdin("1111\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Must be 4 to 4 characters long"));
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();

    pinguard(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default PIN rules"));

    let path = temp.path().join("pinguard").join("rules.toml");
    assert!(path.exists());

    pinguard(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    pinguard(&temp).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_then_check_reads_written_rules() {
    let temp = TempDir::new().unwrap();
    pinguard(&temp).arg("init").assert().success();

    // Tighten the written file; check must pick it up from the config dir
    let path = temp.path().join("pinguard").join("rules.toml");
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("max_length = 12"));
    fs::write(&path, written.replace("max_length = 12", "max_length = 6")).unwrap();

    pinguard(&temp)
        .args(["check", "8491637"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ Must be 6 to 6 characters long"));
}

// =============================================================================
// RULES
// =============================================================================

#[test]
fn test_rules_prints_defaults_as_json() {
    let temp = TempDir::new().unwrap();

    pinguard(&temp)
        .args(["rules", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""min_length": 6"#))
        .stdout(predicate::str::contains(r#""max_length": 12"#));
}
