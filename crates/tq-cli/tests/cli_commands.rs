//! Integration tests for the textquest CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp scenarios root with one small scenario.
fn test_scenarios() -> TempDir {
    let root = TempDir::new().unwrap();
    let forest = root.path().join("forest");
    fs::create_dir(&forest).unwrap();
    fs::write(
        forest.join("main.txt"),
        "You stand at a crossroads.\n1. Go left\n2. Go right\n",
    )
    .unwrap();
    fs::write(
        forest.join("1.txt"),
        "A river blocks the path.\n\nThe water is cold.\n1. Swim\nend. Give up\n",
    )
    .unwrap();
    fs::write(forest.join("1_1.txt"), "You reach the far bank.\n").unwrap();
    root
}

fn textquest() -> Command {
    Command::cargo_bin("textquest").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_walks_branches_and_exits() {
    let root = test_scenarios();
    textquest()
        .args(["play", "-r", root.path().to_str().unwrap()])
        .write_stdin("1\n1\n1\nend\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. forest")
                .and(predicate::str::contains("0. Exit"))
                .and(predicate::str::contains("You stand at a crossroads."))
                .and(predicate::str::contains("A river blocks the path.\n\nThe water is cold."))
                .and(predicate::str::contains("end. Give up"))
                .and(predicate::str::contains("You reach the far bank."))
                .and(predicate::str::contains("Exiting...")),
        );
}

#[test]
fn play_reprompts_on_invalid_input() {
    let root = test_scenarios();
    textquest()
        .args(["play", "-r", root.path().to_str().unwrap()])
        .write_stdin("abc\n5\n1\n9\nend\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid choice. Please enter a number.")
                .and(predicate::str::contains("Invalid scenario choice."))
                .and(predicate::str::contains("Invalid choice. Try again.")),
        );
}

#[test]
fn play_reports_missing_branch_without_exiting() {
    let root = test_scenarios();
    textquest()
        .args(["play", "-r", root.path().to_str().unwrap()])
        .write_stdin("1\n2\nend\n0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("scenario file not found"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn play_with_empty_root() {
    let root = TempDir::new().unwrap();
    textquest()
        .args(["play", "-r", root.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios available."));
}

#[test]
fn play_with_missing_root_warns() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nowhere");
    textquest()
        .args(["play", "-r", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios available."))
        .stderr(predicate::str::contains("failed to discover scenarios"));
}

#[test]
fn play_survives_invalid_utf8_input() {
    let root = test_scenarios();
    textquest()
        .args(["play", "-r", root.path().to_str().unwrap()])
        .write_stdin(&b"1\n\xff\xfe\n1\nend\n0\n"[..])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid choice. Try again.")
                .and(predicate::str::contains("A river blocks the path."))
                .and(predicate::str::contains("Exiting...")),
        );
}

#[test]
fn play_end_command_wins_over_end_choice() {
    let root = test_scenarios();
    textquest()
        .args(["play", "-r", root.path().to_str().unwrap()])
        .write_stdin("1\n1\nend\n0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("scenario file not found").not())
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn list_missing_root_warns() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nowhere");
    textquest()
        .args(["list", "-r", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios available."))
        .stderr(predicate::str::contains("warning: failed to discover scenarios"));
}

#[test]
fn play_stops_at_end_of_input() {
    let root = test_scenarios();
    textquest()
        .args(["play", "-r", root.path().to_str().unwrap()])
        .write_stdin("1\n")
        .assert()
        .success();
}

#[test]
fn play_named_scenario() {
    let root = test_scenarios();
    textquest()
        .args([
            "play",
            "-r",
            root.path().to_str().unwrap(),
            "--scenario",
            "forest",
        ])
        .write_stdin("end\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("You stand at a crossroads."));
}

#[test]
fn default_command_reads_scenarios_dir() {
    let cwd = TempDir::new().unwrap();
    fs::create_dir(cwd.path().join("scenarios")).unwrap();
    textquest()
        .current_dir(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios available."));

    let root = test_scenarios();
    fs::rename(root.path().join("forest"), cwd.path().join("scenarios/forest")).unwrap();
    textquest()
        .current_dir(cwd.path())
        .write_stdin("1\nend\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You stand at a crossroads."));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_scenarios() {
    let root = test_scenarios();
    fs::create_dir(root.path().join("castle")).unwrap();
    textquest()
        .args(["list", "-r", root.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("forest")
                .and(predicate::str::contains("castle"))
                .and(predicate::str::contains("missing"))
                .and(predicate::str::contains("2 scenarios")),
        );
}

#[test]
fn list_empty_root() {
    let root = TempDir::new().unwrap();
    textquest()
        .args(["list", "-r", root.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios available."));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_entry_branch() {
    let root = test_scenarios();
    textquest()
        .args(["show", "forest", "-r", root.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You stand at a crossroads.")
                .and(predicate::str::contains("1. Go left"))
                .and(predicate::str::contains("2. Go right")),
        );
}

#[test]
fn show_nested_ending() {
    let root = test_scenarios();
    textquest()
        .args(["show", "forest", "-b", "1_1", "-r", root.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You reach the far bank.")
                .and(predicate::str::contains("ending")),
        );
}

#[test]
fn show_rejects_path_traversal() {
    let root = test_scenarios();
    textquest()
        .args(["show", "forest", "-b", "../secret", "-r", root.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid choice token"));

    textquest()
        .args(["show", "..", "-r", root.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scenario name"));
}

#[test]
fn show_missing_branch_fails() {
    let root = test_scenarios();
    textquest()
        .args(["show", "forest", "-b", "2", "-r", root.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario file not found"));
}
