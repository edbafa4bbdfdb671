use crate::cli::support::{isolated, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Compare command tests
// ============================================================================

#[test]
fn test_compare_human_ranks_astar_before_ucs() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["compare", "Main Gate", "Library"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let astar = stdout.find(" A* ").unwrap();
    let ucs = stdout.find(" UCS ").unwrap();
    assert!(astar < ucs, "A* should rank ahead of UCS:\n{}", stdout);
    assert!(stdout.contains("Most efficient:"));
}

#[test]
fn test_compare_json_has_four_entries() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "compare", "Main Gate", "Library"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["start"], "Main Gate");
    assert_eq!(json["end"], "Library");

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);

    let ucs = entries.iter().find(|e| e["algorithm"] == "UCS").unwrap();
    let astar = entries.iter().find(|e| e["algorithm"] == "A*").unwrap();
    assert_eq!(ucs["distance"], astar["distance"]);
    assert!(astar["nodes_explored"].as_u64() <= ucs["nodes_explored"].as_u64());
    assert_eq!(json["ranking"].as_array().unwrap().len(), 4);
    assert!(json["most_efficient"].is_string());
}

#[test]
fn test_compare_unknown_location_records_errors() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "compare", "Narnia", "Library"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    for entry in entries {
        assert!(entry["error"]
            .as_str()
            .unwrap()
            .contains("location not found"));
    }
    assert!(json["most_efficient"].is_null());
}

#[test]
fn test_compare_records_format() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["--format", "records", "compare", "Main Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H campath=1 records=1 mode=compare",
        ))
        .stdout(predicate::str::contains("R BFS "))
        .stdout(predicate::str::contains("R DFS "))
        .stdout(predicate::str::contains("R UCS "))
        .stdout(predicate::str::contains("R A* "));
}

#[test]
fn test_compare_unreachable_has_no_most_efficient() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["compare", "Main Gate", "Gymnasium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No algorithm found a path"))
        .stdout(predicate::str::contains("Most efficient").not());

    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "compare", "Main Gate", "Gymnasium"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert!(json["most_efficient"].is_null());
    assert_eq!(json["ranking"], serde_json::json!([]));
    assert_eq!(json["entries"].as_array().unwrap().len(), 4);
}
