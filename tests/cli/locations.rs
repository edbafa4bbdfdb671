use crate::cli::support::{campath_in, isolated, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Locations command tests
// ============================================================================

#[test]
fn test_locations_lists_bundled_campus() {
    let (_dir, mut cmd) = isolated();
    cmd.arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Gate"))
        .stdout(predicate::str::contains("Guest House"))
        .stdout(predicate::str::contains("28 location(s)"));
}

#[test]
fn test_locations_category_filter_json() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["--format", "json", "locations", "--category", "Sports"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let locations = json.as_array().unwrap();
    assert_eq!(locations.len(), 8);
    assert!(locations.iter().all(|l| l["category"] == "sports"));
}

#[test]
fn test_locations_unknown_category_lists_categories() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["locations", "-c", "volcano"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No locations found"))
        .stdout(predicate::str::contains("Categories: academic"));
}

#[test]
fn test_locations_records_format() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["--format", "records", "locations", "-c", "entrance"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H campath=1 records=1 mode=locations count=1 category=entrance",
        ))
        .stdout(predicate::str::contains(
            "L 13.221500 77.754500 category=entrance \"Main Gate\"",
        ));
}

#[test]
fn test_locations_from_custom_campus_file() {
    let (dir, mut cmd) = isolated();
    let campus = dir.path().join("tiny.toml");
    std::fs::write(
        &campus,
        r#"
[[locations]]
name = "North"
latitude = 10.0
longitude = 20.0

[[locations]]
name = "South"
latitude = 9.999
longitude = 20.0

[[connections]]
from = "North"
to = "South"
distance_meters = 120.0
"#,
    )
    .unwrap();

    cmd.arg("--campus")
        .arg(&campus)
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("North"))
        .stdout(predicate::str::contains("2 location(s)"));
}

#[test]
fn test_locations_set_moves_bundled_location() {
    let (dir, mut cmd) = isolated();
    cmd.args(["locations", "set", "library", "--lat", "13.2231", "--lng", "77.7561"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated location 'Library'"));

    let campus = dir.path().join("campus.toml");
    assert!(campus.exists());
    let config = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(config.contains("campus.toml"));

    let output = campath_in(dir.path())
        .args(["--format", "json", "show", "Library"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["latitude"], 13.2231);
    assert_eq!(json["category"], "academic");

    campath_in(dir.path())
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("28 location(s)"));
}

#[test]
fn test_locations_set_adds_location_json() {
    let (dir, mut cmd) = isolated();
    let output = cmd
        .args([
            "--format",
            "json",
            "locations",
            "set",
            "Observatory",
            "--lat",
            "13.2201",
            "--lng",
            "77.7530",
            "--category",
            "science",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["created"], true);
    assert_eq!(json["location"]["name"], "Observatory");
    assert_eq!(json["location"]["category"], "science");

    campath_in(dir.path())
        .args(["locations", "-c", "science"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Observatory"))
        .stdout(predicate::str::contains("1 location(s)"));
}

#[test]
fn test_locations_set_writes_explicit_json_campus() {
    let (dir, mut cmd) = isolated();
    let campus = dir.path().join("tiny.json");
    std::fs::write(
        &campus,
        r#"{"locations": [{"name": "North", "latitude": 10.0, "longitude": 20.0}]}"#,
    )
    .unwrap();

    cmd.arg("--campus")
        .arg(&campus)
        .args(["locations", "set", "North", "--lat", "-10.5", "--lng", "20.0"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&campus).unwrap()).unwrap();
    assert_eq!(written["locations"][0]["latitude"], -10.5);
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_locations_set_rejects_out_of_range_latitude() {
    let (dir, mut cmd) = isolated();
    cmd.args(["locations", "set", "Library", "--lat", "91", "--lng", "77.7"])
        .assert()
        .code(2);
    assert!(!dir.path().join("campus.toml").exists());
}
