use crate::cli::support::{campath_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let dir = tempdir().unwrap();
    campath_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("walking_speed_kmh = 5.0"))
        .stdout(predicate::str::contains("default_algorithm = \"A*\""));
}

#[test]
fn test_config_init_then_refuse_overwrite() {
    let dir = tempdir().unwrap();

    campath_in(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    assert!(dir.path().join("config.toml").exists());

    campath_in(dir.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    campath_in(dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_json() {
    let dir = tempdir().unwrap();
    campath_in(dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    let output = campath_in(dir.path())
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["exists"], true);
    assert_eq!(json["config"]["routing"]["default_origin"], "Main Gate");
    assert_eq!(json["config"]["routing"]["duplicate_edges"], "min");
}

#[test]
fn test_configured_default_algorithm() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[routing]\ndefault_algorithm = \"bfs\"\n",
    )
    .unwrap();

    let output = campath_in(dir.path())
        .args(["--format", "json", "route", "Main Gate", "Library"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["algorithm"], "BFS");
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[routing]\nwalking_speed_kmh = 3.0\n").unwrap();

    let output = campath_in(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "route", "Main Gate", "Library"])
        .output()
        .unwrap();
    // 250 m at 3 km/h
    assert_eq!(stdout_json(&output)["route"]["walking_time_minutes"], 5.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[routing]\nwalking_speed_kmh = 0.0\n",
    )
    .unwrap();

    campath_in(dir.path())
        .args(["route", "Main Gate", "Library"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("walking_speed_kmh"));
}
