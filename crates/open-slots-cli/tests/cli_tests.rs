//! Integration tests for the `openslots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the compute and
//! demo subcommands through the actual binary, including stdin/stdout piping,
//! file I/O and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the calendars.json fixture.
fn calendars_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/calendars.json")
}

fn expected_example_slots() -> serde_json::Value {
    serde_json::json!([
        { "startTime": "2021-03-10T00:00:00+00:00", "endTime": "2021-03-10T08:15:39+00:00" },
        { "startTime": "2021-03-10T10:55:39+00:00", "endTime": "2021-03-10T11:15:39+00:00" },
        { "startTime": "2021-03-10T12:55:39+00:00", "endTime": "2021-03-10T23:59:59+00:00" }
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Compute subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compute_file_to_stdout() {
    let output = Command::cargo_bin("openslots")
        .unwrap()
        .args(["compute", "-i", calendars_json_path()])
        .output()
        .expect("compute should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value, expected_example_slots());
}

#[test]
fn compute_stdin_empty_array_is_vacant() {
    Command::cargo_bin("openslots")
        .unwrap()
        .arg("compute")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("all of the day is vacant."));
}

#[test]
fn compute_stdin_wrong_shape_reports_message() {
    Command::cargo_bin("openslots")
        .unwrap()
        .arg("compute")
        .write_stdin(r#"{"not": "an array"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data must be an array of calendars"));
}

#[test]
fn compute_stdin_full_day_is_zero_vacancy() {
    let input = r#"[{"meetings":[{"startTime":"2021-03-10T00:00:00+00:00","endTime":"2021-03-10T23:59:59+00:00"}]}]"#;
    Command::cargo_bin("openslots")
        .unwrap()
        .arg("compute")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Zero vacancy for this day."));
}

#[test]
fn compute_file_to_file_pretty() {
    let output_path = std::env::temp_dir().join("openslots-test-compute-output.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("openslots")
        .unwrap()
        .args(["compute", "-i", calendars_json_path(), "--pretty", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains('\n'), "pretty output spans lines");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value, expected_example_slots());

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn compute_invalid_json_fails() {
    Command::cargo_bin("openslots")
        .unwrap()
        .arg("compute")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compute open slots"));
}

#[test]
fn compute_missing_file_fails() {
    Command::cargo_bin("openslots")
        .unwrap()
        .args(["compute", "-i", "/nonexistent/calendars.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Demo subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn demo_prints_example_slots() {
    let output = Command::cargo_bin("openslots")
        .unwrap()
        .arg("demo")
        .output()
        .expect("demo should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, expected_example_slots());
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_logs_go_to_stderr_only() {
    let output = Command::cargo_bin("openslots")
        .unwrap()
        .args(["-vv", "compute", "-i", calendars_json_path()])
        .output()
        .expect("compute should run");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("derived day boundary"), "stderr: {}", stderr);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, expected_example_slots());
}

#[test]
fn no_subcommand_shows_usage_error() {
    Command::cargo_bin("openslots")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
