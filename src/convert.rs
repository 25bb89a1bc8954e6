//! Run orchestration: drives the line state machine over each input file.
//!
//! Processing is strictly sequential. The output writer lives for the
//! whole run; each input file's reader is scoped to its own processing
//! call. Failures are isolated per file: a missing or malformed file is
//! reported on standard output and the run moves on, keeping whatever rows
//! that file already produced.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::FileError;
use crate::output::RowWriter;
use crate::report::{
    classify, read_report_header, skip_page_header, DefendantRecord, LineClass, ReportContext,
};

/// The fixed list of court report files processed by default.
pub const DEFAULT_COURT_FILES: [&str; 8] = [
    "Court1.txt",
    "Court2.txt",
    "Court3.txt",
    "Court4.txt",
    "Court5.txt",
    "Court6.txt",
    "Court7.txt",
    "Court8.txt",
];

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "Court_Case_Data.csv";

/// Resolved inputs and output for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub files: Vec<PathBuf>,
    pub output: PathBuf,
}

impl RunOptions {
    /// Resolves the input list: explicit files win, otherwise the fixed
    /// court file list under `dir`.
    pub fn new(dir: &Path, files: Vec<PathBuf>, output: PathBuf) -> Self {
        let files = if files.is_empty() {
            DEFAULT_COURT_FILES.iter().map(|name| dir.join(name)).collect()
        } else {
            files
        };
        Self { files, output }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: u64,
    pub files_processed: usize,
    pub files_failed: usize,
}

/// Processes every input file into one CSV output file.
///
/// Per-file errors are reported and skipped; only failure to create or
/// flush the output itself aborts the run.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let output = File::create(&options.output)
        .with_context(|| format!("failed to create output file {}", options.output.display()))?;
    let mut rows = RowWriter::new(output).context("failed to write CSV header")?;
    let mut summary = RunSummary::default();

    for path in &options.files {
        println!("Processing file: {}", path.display());
        match process_file(path, &mut rows) {
            Ok(count) => {
                tracing::debug!(file = %path.display(), rows = count, "file processed");
                summary.rows_written += count;
                summary.files_processed += 1;
            }
            Err(FileError::NotFound { path }) => {
                println!("File not found: {}", path.display());
                summary.files_failed += 1;
            }
            Err(err) => {
                println!("Error processing {}: {}", path.display(), err);
                summary.files_failed += 1;
            }
        }
    }

    rows.flush().context("failed to flush output file")?;
    println!("Data successfully written to {}", options.output.display());
    Ok(summary)
}

/// Processes one court report file, appending its rows to `rows`.
///
/// Returns the number of rows written for this file.
pub fn process_file<W: Write>(path: &Path, rows: &mut RowWriter<W>) -> Result<u64, FileError> {
    let file = File::open(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            FileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            FileError::Read(err)
        }
    })?;
    process_reader(BufReader::new(file), rows)
}

/// Runs the line state machine over one report stream.
///
/// At most one defendant record is open at any time. Only a new defendant
/// line or end of stream closes the open record (emitting its row); a
/// report header does not. A record still open when a new header arrives
/// is therefore emitted under the replaced context current at flush time.
pub fn process_reader<R: BufRead, W: Write>(
    reader: R,
    rows: &mut RowWriter<W>,
) -> Result<u64, FileError> {
    let mut lines = reader.lines();
    let mut context = ReportContext::default();
    let mut open: Option<DefendantRecord> = None;
    let mut count = 0u64;

    while let Some(line) = lines.next() {
        let line = line?;
        match classify(&line) {
            LineClass::Blank => {}
            LineClass::Defendant => {
                if let Some(record) = open.take() {
                    rows.emit(&context, record)?;
                    count += 1;
                }
                open = Some(DefendantRecord::parse(&line));
            }
            LineClass::ReportHeader => {
                context = read_report_header(&line, &mut lines)?;
            }
            LineClass::PageHeader => {
                skip_page_header(&line, &mut lines)?;
            }
            LineClass::Continuation(kind) => {
                // A continuation with no open record is stray boilerplate.
                if let Some(record) = open.as_mut() {
                    record.apply_continuation(kind, &line);
                }
            }
            LineClass::Other => {
                tracing::trace!(line = %line, "unclassified line ignored");
            }
        }
    }

    if let Some(record) = open.take() {
        rows.emit(&context, record)?;
        count += 1;
    }

    Ok(count)
}
