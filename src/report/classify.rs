//! Line classification for docket report text.
//!
//! Classification is pure and positional: no look-ahead, no state. The
//! orchestrator decides what to do with each category (skip, extract a
//! header block, open a record, enrich the open record).

use super::defendant::LINE_NO;
use super::fields::extract;

/// Marker substring of a report header block's first line.
const RUN_DATE_TAG: &str = "RUN DATE:";

/// The category a report line falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only; skipped.
    Blank,
    /// Starts a new defendant record (numeric line-number prefix).
    Defendant,
    /// Starts a report header block (court session context).
    ReportHeader,
    /// Starts a page header block (page-break boilerplate, discarded).
    PageHeader,
    /// Adds a field to the currently open defendant record.
    Continuation(ContinuationKind),
    /// Matches nothing; silently ignored.
    Other,
}

/// Which field a continuation line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationKind {
    Bond,
    Fingerprinted,
    Aka,
}

/// Classifies one line of report text. First match wins.
///
/// A numeric line-number prefix always wins: any line whose first six
/// characters trim to a base-10 integer is a defendant line regardless of
/// content elsewhere. Header detection only applies after that test fails,
/// so a defendant numbered in column 0 is never mistaken for the '1'
/// carriage-control character that opens a page header.
pub fn classify(line: &str) -> LineClass {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    if is_defendant_line(line) {
        return LineClass::Defendant;
    }
    let has_run_date = line.contains(RUN_DATE_TAG);
    if has_run_date && !line.starts_with('1') {
        return LineClass::ReportHeader;
    }
    if line.starts_with('1') && !has_run_date {
        return LineClass::PageHeader;
    }
    if line.contains("BOND:") {
        return LineClass::Continuation(ContinuationKind::Bond);
    }
    if line.contains("FINGERPRINTED") {
        return LineClass::Continuation(ContinuationKind::Fingerprinted);
    }
    if line.contains("AKA:") {
        return LineClass::Continuation(ContinuationKind::Aka);
    }
    LineClass::Other
}

/// A line is a defendant line iff its first six characters, trimmed, parse
/// as a base-10 integer.
fn is_defendant_line(line: &str) -> bool {
    extract(line, LINE_NO).parse::<i64>().is_ok()
}
