//! Integration tests for the deadstrip CLI
//!
//! These tests run the compiled binary end-to-end against temporary
//! files and verify the rewrite, the summary output, and the exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const SAMPLE: &str = "\
#[allow(dead_code)]
fn unused() {
    let x = 1;
}
fn used() {
    let y = 2;
}
";

const CLEANED: &str = "\
fn used() {
    let y = 2;
}
";

fn deadstrip() -> Command {
    Command::cargo_bin("deadstrip").expect("binary should build")
}

fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("main.rs");
    fs::write(&path, SAMPLE).expect("failed to write fixture");
    path
}

// ============================================================================
// Rewrite behavior
// ============================================================================

#[test]
fn test_rewrites_target_and_prints_summary() {
    let dir = tempdir().unwrap();
    let target = write_sample(dir.path());

    deadstrip()
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dead code removal complete!"))
        .stdout(predicate::str::contains("Original lines:"))
        .stdout(predicate::str::contains("Clean lines:"))
        .stdout(predicate::str::contains("Lines removed:"));

    assert_eq!(fs::read_to_string(&target).unwrap(), CLEANED);
}

#[test]
fn test_clean_file_is_untouched() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("clean.rs");
    fs::write(&target, CLEANED).unwrap();

    deadstrip()
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines removed: 0"));

    assert_eq!(fs::read_to_string(&target).unwrap(), CLEANED);
}

#[test]
fn test_dry_run_leaves_target_untouched() {
    let dir = tempdir().unwrap();
    let target = write_sample(dir.path());

    deadstrip()
        .arg(&target)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Lines removed: 4"));

    assert_eq!(fs::read_to_string(&target).unwrap(), SAMPLE);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();

    deadstrip()
        .arg(dir.path().join("nope.rs"))
        .assert()
        .failure();
}

#[test]
fn test_missing_path_argument_fails() {
    deadstrip().assert().failure();
}

// ============================================================================
// Marker configuration
// ============================================================================

#[test]
fn test_marker_override() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("main.rs");
    fs::write(
        &target,
        "// DEAD\nfn unused() {\n    let x = 1;\n}\nfn used() {}\n",
    )
    .unwrap();

    deadstrip()
        .arg(&target)
        .args(["--marker", "// DEAD"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "fn used() {}\n");
}

#[test]
fn test_config_file_beside_target_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".deadstrip.toml"), "marker = \"// DEAD\"").unwrap();
    let target = dir.path().join("main.rs");
    fs::write(&target, "// DEAD\nfn unused() {\n}\nfn used() {}\n").unwrap();

    deadstrip().arg(&target).assert().success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "fn used() {}\n");
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "marker = [not toml").unwrap();
    let target = write_sample(dir.path());

    deadstrip()
        .arg(&target)
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure();

    // Config errors must not touch the target.
    assert_eq!(fs::read_to_string(&target).unwrap(), SAMPLE);
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_json_summary_on_stdout() {
    let dir = tempdir().unwrap();
    let target = write_sample(dir.path());

    let output = deadstrip()
        .arg(&target)
        .args(["--format", "json", "--quiet"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(value["original_lines"], 8);
    assert_eq!(value["clean_lines"], 4);
    assert_eq!(value["removed_lines"], 4);
    assert_eq!(value["dry_run"], false);
}

#[test]
fn test_json_summary_to_output_file() {
    let dir = tempdir().unwrap();
    let target = write_sample(dir.path());
    let out = dir.path().join("summary.json");

    deadstrip()
        .arg(&target)
        .args(["--format", "json"])
        .args(["--output", out.to_str().unwrap()])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["removed_lines"], 4);
}
