//! Report header extraction and page header skipping.
//!
//! Both block kinds share one terminator convention: a line containing 20
//! consecutive asterisks ends the block. A truncated file that never
//! reaches the terminator is treated as if the terminator followed the
//! last line; header scanning must never read past end of stream.

use std::io;

use super::fields::{extract, Span};

/// Terminates a report header or page header block.
pub const HEADER_TERMINATOR: &str = "********************";

/// Column spans of the report header block.
const RUN_DATE: Span = Span::new(12, 30);
const COURT_DATE: Span = Span::new(22, 38);
const COURT_TIME: Span = Span::new(44, 60);
const COURT_ROOM: Span = Span::open(78);

/// Court session context parsed from a report header block.
///
/// Stays in effect for every defendant record that follows, until the next
/// report header block replaces it. Each input file starts from an empty
/// context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportContext {
    pub run_date: String,
    pub date: String,
    pub time: String,
    pub room: String,
}

/// Reads a report header block, starting from the line that triggered the
/// classification, and returns the session context it carries.
///
/// Lines matching neither the `RUN DATE` nor the `COURT DATE:` pattern are
/// ignored; missing fields stay empty. The terminator may appear on the
/// triggering line itself.
pub fn read_report_header<I>(trigger: &str, lines: &mut I) -> io::Result<ReportContext>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut context = ReportContext::default();
    let mut line = trigger.to_string();

    loop {
        if line.contains(HEADER_TERMINATOR) {
            break;
        }
        if line.contains("RUN DATE") {
            context.run_date = extract(&line, RUN_DATE).to_string();
        } else if line.contains("COURT DATE:") {
            context.date = extract(&line, COURT_DATE).to_string();
            context.time = extract(&line, COURT_TIME).to_string();
            context.room = extract(&line, COURT_ROOM).to_string();
        }
        match lines.next() {
            Some(next) => line = next?,
            None => break,
        }
    }

    tracing::debug!(
        run_date = %context.run_date,
        date = %context.date,
        "report header parsed"
    );
    Ok(context)
}

/// Discards a page header block, starting from the line that triggered the
/// classification.
///
/// Page headers carry only page-break boilerplate; skipping them keeps
/// their content from being misclassified as records.
pub fn skip_page_header<I>(trigger: &str, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut line = trigger.to_string();
    while !line.contains(HEADER_TERMINATOR) {
        match lines.next() {
            Some(next) => line = next?,
            None => break,
        }
    }
    Ok(())
}
