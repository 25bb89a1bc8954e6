//! CLI surface tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{defendant_line, write_court_file};

#[test]
fn help_exits_0_and_shows_usage() {
    Command::cargo_bin("docketcsv")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert fixed-width court docket reports"))
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn version_flag_reports_version() {
    Command::cargo_bin("docketcsv")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("docketcsv"));
}

#[test]
fn dir_flag_resolves_the_fixed_list_elsewhere() {
    let cwd = TempDir::new().unwrap();
    let reports = TempDir::new().unwrap();
    write_court_file(
        reports.path(),
        "Court1.txt",
        &defendant_line("1", "24CR000001", "DOE, JOHN", "STATE"),
    );

    Command::cargo_bin("docketcsv")
        .unwrap()
        .current_dir(cwd.path())
        .args(["--dir", reports.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Court1.txt"))
        .stdout(predicate::str::contains(
            "Data successfully written to Court_Case_Data.csv",
        ));

    assert!(cwd.path().join("Court_Case_Data.csv").exists());
}

#[test]
fn run_with_no_inputs_still_writes_the_header() {
    let cwd = TempDir::new().unwrap();

    Command::cargo_bin("docketcsv")
        .unwrap()
        .current_dir(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found"));

    let output = std::fs::read_to_string(cwd.path().join("Court_Case_Data.csv")).unwrap();
    assert!(output.starts_with("RunDate,Date,Time,Room,LineNo"));
}
