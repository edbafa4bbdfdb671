use crate::cli::support::{campath_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Custom path command tests
// ============================================================================

#[test]
fn test_paths_save_list_show_delete() {
    let dir = tempdir().unwrap();

    campath_in(dir.path())
        .args([
            "paths",
            "save",
            "Morning Loop",
            "-p",
            "13.2215,77.7545",
            "-p",
            "13.2220, 77.7554",
            "-d",
            "around the quad",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved path 'Morning Loop' (id 1)"));

    assert!(dir.path().join("paths.json").exists());

    campath_in(dir.path())
        .args(["paths", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning Loop  (2 points) - around the quad"));

    campath_in(dir.path())
        .args(["paths", "show", "Morning Loop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 13.2215, 77.7545"))
        .stdout(predicate::str::contains("2. 13.2220, 77.7554"));

    campath_in(dir.path())
        .args(["paths", "delete", "Morning Loop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted path 'Morning Loop'"));

    campath_in(dir.path())
        .args(["paths", "show", "Morning Loop"])
        .assert()
        .code(3);
}

#[test]
fn test_paths_save_json_and_negative_coordinates() {
    let dir = tempdir().unwrap();
    let output = campath_in(dir.path())
        .args([
            "--format",
            "json",
            "paths",
            "save",
            "Harbour Walk",
            "--point",
            "-33.8568,151.2153",
            "--point",
            "-33.8523,151.2108",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["id"], 1);
    assert_eq!(json["coordinate_count"], 2);
    assert_eq!(json["coordinates"][0]["latitude"], -33.8568);
    assert!(json.get("updated_at").is_none());
}

#[test]
fn test_paths_update() {
    let dir = tempdir().unwrap();
    campath_in(dir.path())
        .args(["paths", "save", "Loop", "-p", "1.0,2.0"])
        .assert()
        .success();

    let output = campath_in(dir.path())
        .args([
            "--format",
            "json",
            "paths",
            "update",
            "Loop",
            "-p",
            "1.0,2.0",
            "-p",
            "1.5,2.5",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["coordinate_count"], 2);
    assert!(json["updated_at"].is_string());
    assert_eq!(json["description"], "");

    // Nothing to change
    campath_in(dir.path())
        .args(["paths", "update", "Loop"])
        .assert()
        .code(2);
}

#[test]
fn test_paths_invalid_coordinates_exit_code_2() {
    let dir = tempdir().unwrap();
    campath_in(dir.path())
        .args(["paths", "save", "Bad", "-p", "91.0,10.0"])
        .assert()
        .code(2);
    campath_in(dir.path())
        .args(["paths", "save", "Bad", "-p", "north"])
        .assert()
        .code(2);
}

#[test]
fn test_paths_file_flag() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("nested").join("mine.json");

    campath_in(dir.path())
        .arg("--paths-file")
        .arg(&file)
        .args(["paths", "save", "Loop", "-p", "1.0,2.0"])
        .assert()
        .success();

    assert!(file.exists());
    assert!(!dir.path().join("paths.json").exists());
}

#[test]
fn test_paths_list_empty() {
    let dir = tempdir().unwrap();
    campath_in(dir.path())
        .args(["paths", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved paths"));

    let output = campath_in(dir.path())
        .args(["--format", "json", "paths", "list"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output), serde_json::json!([]));
}
