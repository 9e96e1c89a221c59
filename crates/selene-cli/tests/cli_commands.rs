use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SURVEY: &str = r#"{
    "waypoints": [
        {"name": "Landing Site", "lat": 0.0, "lon": 0.0},
        {"name": "A", "lat": 0.0, "lon": 1.0},
        {"name": "B", "lat": 1.0, "lon": 1.0},
        {"name": "C", "lat": 1.0, "lon": 2.0},
        {"name": "D", "lat": 2.0, "lon": 2.0},
        {"name": "Outpost", "lat": 5.0, "lon": 5.0}
    ],
    "edges": [
        {"from": "Landing Site", "to": "A", "extra_km": 2.0},
        {"from": "Landing Site", "to": "B", "extra_km": 3.0},
        {"from": "A", "to": "C", "extra_km": 2.0},
        {"from": "B", "to": "C", "extra_km": 1.0},
        {"from": "C", "to": "D", "extra_km": 4.0}
    ]
}"#;

fn cli() -> Command {
    cargo_bin_cmd!("selene-cli")
}

fn prepare_command() -> (Command, tempfile::TempDir, PathBuf) {
    let temp_dir = tempdir().expect("create temp dir");
    let survey_path = temp_dir.path().join("landing.json");
    fs::write(&survey_path, SURVEY).expect("write survey fixture");

    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--network")
        .arg(&survey_path);
    (cmd, temp_dir, survey_path)
}

#[test]
fn route_prints_a_traverse_summary() {
    let (mut cmd, _temp, _path) = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Landing Site")
        .arg("--to")
        .arg("D");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Traverse: Landing Site -> D"))
        .stdout(predicate::str::contains("3 hops"));
}

#[test]
fn route_json_emits_a_machine_readable_summary() {
    let (mut cmd, _temp, _path) = prepare_command();
    cmd.arg("--json")
        .arg("route")
        .arg("--from")
        .arg("Landing Site")
        .arg("--to")
        .arg("D");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"hops\": 3"))
        .stdout(predicate::str::contains("\"name\": \"Landing Site\""));
}

#[test]
fn survey_prints_distance_and_path_lines() {
    let (mut cmd, _temp, _path) = prepare_command();
    cmd.arg("survey").arg("--source").arg("Landing Site");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Node Landing Site is at a distance of 0",
        ))
        .stdout(predicate::str::contains("Shortest path to node D: Landing Site"))
        .stdout(predicate::str::contains("Node Outpost is unreachable"))
        .stdout(predicate::str::contains("No path to node Outpost"));
}

#[test]
fn unknown_waypoint_error_is_friendly() {
    let (mut cmd, _temp, _path) = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("landing site")
        .arg("--to")
        .arg("D");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown waypoint: landing site"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn unreachable_goal_reports_no_traverse() {
    let (mut cmd, _temp, _path) = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("D")
        .arg("--to")
        .arg("Landing Site");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "no traverse found between D and Landing Site",
        ));
}

#[test]
fn missing_survey_file_fails_with_context() {
    let temp_dir = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.arg("--network")
        .arg(temp_dir.path().join("absent.json"))
        .arg("survey")
        .arg("--source")
        .arg("Landing Site");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load survey network"));
}
