use crate::cli::support::isolated;
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["--verbose", "locations"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_campus"))
        .stdout(predicate::str::contains("load_campus").not());
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["--log-level", "warn", "locations"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_campus").not());
}

#[test]
fn test_log_json() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["--log-json", "-v", "locations"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_json_output_stays_parseable_with_verbose_logging() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["-v", "--format", "json", "route", "Main Gate", "Library"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let _: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
}
