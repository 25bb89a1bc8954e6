//! Shared helpers for integration tests: synthetic report fixtures and a
//! wrapper for running the built binary.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Terminates report and page header blocks.
pub const TERMINATOR: &str = "********************";

/// Builds a report header block: run date at columns [12,30), court date at
/// [22,38), time at [44,60), room from 78.
pub fn report_header(run_date: &str, date: &str, time: &str, room: &str) -> String {
    format!(
        "{:<12}{:<26}\n{:<22}{:<16}{:<6}{:<16}{:<18}{}\n{}\n",
        "RUN DATE:", run_date, "      COURT DATE:", date, "TIME:", time, "         ROOM:", room,
        TERMINATOR
    )
}

/// Builds a page header block (leading '1' carriage-control character).
pub fn page_header(page: u32) -> String {
    format!(
        "1SOMETOWN DISTRICT COURT                 PAGE {:>4}\nDOCKET CONTINUED\n{}\n",
        page, TERMINATOR
    )
}

/// Builds a defendant line with each column padded to its span width.
pub fn defendant_line(line_no: &str, file_num: &str, name: &str, complainant: &str) -> String {
    format!("{:<6}  {:<12}{:<22}{}\n", line_no, file_num, name, complainant)
}

/// Builds a BOND continuation line (value at column 25).
pub fn bond_line(value: &str) -> String {
    format!("{:<25}{}\n", "                   BOND:", value)
}

/// Builds a FINGERPRINTED continuation line.
pub fn fingerprint_line() -> String {
    "                   FINGERPRINTED\n".to_string()
}

/// Builds an AKA continuation line (value at column 19).
pub fn aka_line(names: &str) -> String {
    format!("{:<19}{}\n", "       AKA:", names)
}

/// Writes `content` as `name` under `dir`.
pub fn write_court_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("failed to write fixture");
}

/// Runs the docketcsv binary in `dir` and captures its output.
pub fn run_docketcsv(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_docketcsv"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute docketcsv");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Reads the output CSV back as (header, data rows).
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("failed to open output CSV");
    let header = reader
        .headers()
        .expect("failed to read CSV header")
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = reader
        .records()
        .map(|r| r.expect("bad CSV row").iter().map(|s| s.to_string()).collect())
        .collect();
    (header, rows)
}

/// Index of a column in the output header.
pub fn column(header: &[String], name: &str) -> usize {
    header
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("missing column {name}"))
}
