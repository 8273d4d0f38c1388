//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const DEMO_INPUT: &str = "2\n10\n8\n5\n10\n4\n6\n8\n12";

fn pizzaduel() -> Command {
    Command::cargo_bin("pizzaduel").expect("binary not found")
}

#[test]
fn help_flag() {
    pizzaduel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pizza"));
}

#[test]
fn version_flag() {
    pizzaduel()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pizzaduel"));
}

#[test]
fn demo_input_summary() {
    pizzaduel()
        .write_stdin(DEMO_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("=>"))
        .stdout(predicate::str::contains("Overall: Trapizza!"));
}

#[test]
fn quiet_mode_prints_only_overall() {
    pizzaduel()
        .arg("-q")
        .write_stdin(DEMO_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::diff("Trapizza!\n"));
}

#[test]
fn verbose_mode_includes_totals() {
    pizzaduel()
        .arg("-v")
        .write_stdin(DEMO_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total circular area:"))
        .stdout(predicate::str::contains("Total trapezoid area:"));
}

#[test]
fn json_mode() {
    pizzaduel()
        .arg("--json")
        .write_stdin(DEMO_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall\""))
        .stdout(predicate::str::contains("\"TrapezoidWins\""));
}

#[test]
fn empty_order_list() {
    pizzaduel()
        .write_stdin("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall: They are the same"));
}

#[test]
fn input_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("orders.txt");
    std::fs::write(&path, DEMO_INPUT).expect("write input");

    pizzaduel()
        .args(["-i", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall: Trapizza!"));
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("summary.txt");

    pizzaduel()
        .args(["-o", path.to_str().unwrap()])
        .write_stdin(DEMO_INPUT)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).expect("read summary");
    assert!(written.contains("Overall: Trapizza!"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn invalid_dimension_exit_code() {
    pizzaduel()
        .write_stdin("1\n0\n5\n5\n5")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn format_error_exit_code() {
    pizzaduel()
        .write_stdin("2\n10\n8\n5\n10")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("format"));
}

#[test]
fn missing_input_file_exit_code() {
    pizzaduel()
        .args(["-i", "no-such-file.txt"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("no-such-file.txt"));
}

#[test]
fn completion_bash() {
    pizzaduel()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pizzaduel"));
}
