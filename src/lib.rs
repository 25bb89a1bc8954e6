//! docketcsv - converts fixed-width court docket report exports into a
//! normalized CSV dataset.
//!
//! Legacy docket printing systems emit page-oriented plain-text reports with
//! fixed column layouts. This crate walks those reports line by line,
//! classifies each line (report header, page header, defendant record,
//! continuation field), accumulates fields into per-defendant records, and
//! writes one CSV row per defendant across all input files.
//!
//! # Module Structure
//!
//! - [`report`] - line classification, header extraction, defendant record
//!   building, and alias normalization
//! - [`output`] - CSV row emission
//! - [`convert`] - per-file orchestration and the run loop
//! - [`error`] - per-file error kinds

pub mod convert;
pub mod error;
pub mod output;
pub mod report;

pub use convert::{run, RunOptions, RunSummary};
pub use error::FileError;
pub use output::{OutputRow, RowWriter};
pub use report::{DefendantRecord, ReportContext};
