//! CSV row emission.
//!
//! The writer stays open for the whole run: rows from every input file land
//! in one output stream, in file-then-line encounter order. The header row
//! is written up front so an empty run still produces a well-formed CSV.

use std::io::Write;

use serde::Serialize;

use crate::report::{normalize_aka, DefendantRecord, ReportContext};

/// Output column names, in emission order.
pub const FIELD_NAMES: [&str; 13] = [
    "RunDate",
    "Date",
    "Time",
    "Room",
    "LineNo",
    "FileNum",
    "Defendant",
    "Complainant",
    "Attorney",
    "Cont",
    "Bond",
    "Fingerprint",
    "AKA",
];

/// One emitted CSV row: the session context overlaid with one defendant
/// record. Field order matches [`FIELD_NAMES`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputRow {
    #[serde(rename = "RunDate")]
    pub run_date: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "LineNo")]
    pub line_no: String,
    #[serde(rename = "FileNum")]
    pub file_num: String,
    #[serde(rename = "Defendant")]
    pub defendant: String,
    #[serde(rename = "Complainant")]
    pub complainant: String,
    #[serde(rename = "Attorney")]
    pub attorney: String,
    #[serde(rename = "Cont")]
    pub cont: String,
    #[serde(rename = "Bond")]
    pub bond: String,
    #[serde(rename = "Fingerprint")]
    pub fingerprint: bool,
    #[serde(rename = "AKA")]
    pub aka: String,
}

impl OutputRow {
    /// Merges the current session context with a finalized defendant
    /// record. The record's accumulated AKA value is normalized here; this
    /// is the only place normalization runs.
    pub fn merge(context: &ReportContext, record: DefendantRecord) -> Self {
        Self {
            run_date: context.run_date.clone(),
            date: context.date.clone(),
            time: context.time.clone(),
            room: context.room.clone(),
            line_no: record.line_no,
            file_num: record.file_num,
            defendant: record.defendant,
            complainant: record.complainant,
            attorney: record.attorney,
            cont: record.cont,
            bond: record.bond,
            fingerprint: record.fingerprint,
            aka: normalize_aka(&record.aka),
        }
    }
}

/// Appends output rows to an underlying CSV stream.
pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RowWriter<W> {
    /// Wraps `writer` and immediately writes the header row.
    pub fn new(writer: W) -> Result<Self, csv::Error> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        inner.write_record(FIELD_NAMES)?;
        Ok(Self { inner })
    }

    /// Emits one row for a record closed under `context`.
    pub fn emit(
        &mut self,
        context: &ReportContext,
        record: DefendantRecord,
    ) -> Result<(), csv::Error> {
        self.inner.serialize(OutputRow::merge(context, record))
    }

    /// Flushes the underlying stream.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> Result<W, csv::IntoInnerError<csv::Writer<W>>> {
        self.inner.into_inner()
    }
}
