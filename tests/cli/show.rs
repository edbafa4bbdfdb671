use crate::cli::support::{isolated, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_location_with_connections() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["show", "main gate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Gate"))
        .stdout(predicate::str::contains("Category: entrance"))
        .stdout(predicate::str::contains("Admin Office (150 m, 1.8 min walk)"))
        .stdout(predicate::str::contains("Security Office (50 m"));
}

#[test]
fn test_show_json() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "show", "Sports Complex"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["name"], "Sports Complex");
    assert_eq!(json["category"], "sports");
    assert_eq!(json["connections"].as_array().unwrap().len(), 5);
}

#[test]
fn test_show_unknown_location_exit_code_3() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["show", "Atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found"));
}

#[test]
fn test_show_accepts_alias() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["show", "gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gymnasium"))
        .stdout(predicate::str::contains("Category: sports"));
}
