//! Parsing of fixed-width, page-oriented docket report text.
//!
//! The report format interleaves three kinds of content: report header
//! blocks (court session context), page header blocks (page-break
//! boilerplate), and defendant blocks (one fixed-width line per defendant,
//! optionally followed by continuation lines carrying bond, fingerprint,
//! and alias fields). Header blocks of both kinds end with a line of 20
//! asterisks.
//!
//! Column positions are fixed properties of the upstream printing system
//! and are kept as named [`fields::Span`] descriptors so every offset lives
//! in one place.

mod aka;
mod classify;
mod defendant;
pub mod fields;
mod header;

pub use aka::normalize_aka;
pub use classify::{classify, ContinuationKind, LineClass};
pub use defendant::DefendantRecord;
pub use header::{read_report_header, skip_page_header, ReportContext, HEADER_TERMINATOR};
