use crate::cli::support::{isolated, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Ask command tests
// ============================================================================

#[test]
fn test_ask_from_to_route() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["ask", "how do I get from Main Gate to Library?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Main Gate to Library: 250 m",
        ))
        .stdout(predicate::str::contains("Main Gate -> Admin Office -> Library"));
}

#[test]
fn test_ask_joins_words() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "ask", "where", "is", "the", "food", "court"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["kind"], "information");
    assert!(json["text"].as_str().unwrap().starts_with("Food Court"));
}

#[test]
fn test_ask_route_json_includes_route() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "ask", "directions to library"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["kind"], "route");
    assert_eq!(json["route"]["algorithm"], "A*");
    assert_eq!(json["route"]["path"][0], "Main Gate");
}

#[test]
fn test_ask_unreachable() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["ask", "from main gate to tennis court"])
        .assert()
        .success()
        .stdout(predicate::str::contains("couldn't find a path"));
}

#[test]
fn test_ask_configured_origin() {
    let (dir, mut cmd) = isolated();
    std::fs::write(
        dir.path().join("config.toml"),
        "[routing]\ndefault_origin = \"Library\"\n",
    )
    .unwrap();

    let output = cmd
        .args(["--format", "json", "ask", "route to admin office"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(
        json["route"]["path"],
        serde_json::json!(["Library", "Admin Office"])
    );
}

#[test]
fn test_ask_greeting_and_help() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["ask", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello!"));

    let (_dir, mut cmd) = isolated();
    cmd.args(["ask", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I can find routes"));
}

#[test]
fn test_ask_blank_message_is_usage_error() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["ask", "   "]).assert().code(2);
}
