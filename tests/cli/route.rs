use crate::cli::support::{isolated, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Route command tests
// ============================================================================

#[test]
fn test_route_default_algorithm_is_astar() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["route", "Main Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Gate -> Library (A*)"))
        .stdout(predicate::str::contains(
            "1. Main Gate -> Admin Office (150 m, total 150 m)",
        ))
        .stdout(predicate::str::contains(
            "2. Admin Office -> Library (100 m, total 250 m)",
        ))
        .stdout(predicate::str::contains("Total: 250 m, 1 stop(s)"));
}

#[test]
fn test_route_names_are_case_insensitive() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["route", "main gate", "  LIBRARY "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 250 m"));
}

#[test]
fn test_route_bfs_json() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "route", "Main Gate", "Library", "-a", "bfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "BFS");
    assert_eq!(
        json["path"],
        serde_json::json!(["Main Gate", "Admin Office", "Library"])
    );
    assert_eq!(json["is_optimal"], false);
    assert_eq!(json["route"]["total_distance_m"], 250.0);
    assert_eq!(json["route"]["num_stops"], 1);
    assert_eq!(json["route"]["steps"].as_array().unwrap().len(), 2);
}

#[test]
fn test_route_ucs_matches_astar_distance() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "route", "Main Gate", "Library", "-a", "dijkstra"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "UCS");
    assert_eq!(json["distance"], 250.0);
    assert_eq!(json["is_optimal"], true);
}

#[test]
fn test_route_all_algorithms_json() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "route", "Main Gate", "Library", "-a", "all"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let results = json["results"].as_array().unwrap();
    let algorithms: Vec<&str> = results
        .iter()
        .map(|r| r["algorithm"].as_str().unwrap())
        .collect();
    assert_eq!(algorithms, ["BFS", "DFS", "UCS", "A*"]);
}

#[test]
fn test_route_unreachable_is_not_an_error() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["route", "Main Gate", "Gymnasium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found"));
}

#[test]
fn test_route_unreachable_json_has_null_path() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "route", "Main Gate", "Gymnasium"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert!(json["path"].is_null());
    assert!(json["distance"].is_null());
    assert!(json["route"].is_null());
}

#[test]
fn test_route_unknown_location_exit_code_3() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["route", "Main Gate", "Hogwarts"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found: Hogwarts"));
}

#[test]
fn test_route_unknown_algorithm_exit_code_2() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["route", "Main Gate", "Library", "--algorithm", "greedy"])
        .assert()
        .code(2);
}

#[test]
fn test_route_trace_prints_exploration_order() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["route", "Main Gate", "Library", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exploration order: Main Gate,"));
}

#[test]
fn test_route_same_start_and_end() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "route", "Library", "Library"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["path"], serde_json::json!(["Library"]));
    assert_eq!(json["distance"], 0.0);
    assert_eq!(json["nodes_explored"], 1);
}

#[test]
fn test_route_records_format() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["--format", "records", "route", "Main Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H campath=1 records=1 mode=route from=\"Main Gate\" to=\"Library\"",
        ))
        .stdout(predicate::str::contains("R A* found=true distance=250.0"))
        .stdout(predicate::str::contains(
            "S 2 distance=100.0 cumulative=250.0 \"Admin Office\" \"Library\"",
        ));
}
