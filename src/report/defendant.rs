//! Defendant record building from fixed-width defendant lines and their
//! continuation lines.

use super::classify::ContinuationKind;
use super::fields::{extract, Span};

/// Column spans of a defendant line.
pub const LINE_NO: Span = Span::new(0, 6);
pub const FILE_NUM: Span = Span::new(8, 20);
pub const DEFENDANT: Span = Span::new(20, 42);
pub const COMPLAINANT: Span = Span::new(42, 57);
pub const COMPLAINANT_SHORT: Span = Span::open(42);
pub const ATTORNEY: Span = Span::new(57, 84);
pub const ATTORNEY_SHORT: Span = Span::open(57);
pub const CONT: Span = Span::open(84);

/// Value columns of continuation lines.
pub const BOND_VALUE: Span = Span::open(25);
pub const AKA_VALUE: Span = Span::open(19);

/// Minimum line length carrying a continuance column.
const FULL_WIDTH: usize = 85;
/// Minimum line length carrying an attorney column.
const ATTORNEY_WIDTH: usize = 58;

/// One defendant's accumulated fields.
///
/// Opened when a defendant line is recognized, enriched by continuation
/// lines until the next defendant line or end of file, then emitted. The
/// accumulated `aka` value is raw; [`super::normalize_aka`] runs at
/// emission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefendantRecord {
    pub line_no: String,
    pub file_num: String,
    pub defendant: String,
    pub complainant: String,
    pub attorney: String,
    pub cont: String,
    pub bond: String,
    pub fingerprint: bool,
    pub aka: String,
}

impl DefendantRecord {
    /// Parses a classified defendant line.
    ///
    /// Trailing columns are optional in the source reports: short lines
    /// simply stop after the complainant (or mid-complainant), so the
    /// extraction tier is chosen by line length.
    pub fn parse(line: &str) -> Self {
        let mut record = Self {
            line_no: extract(line, LINE_NO).to_string(),
            file_num: extract(line, FILE_NUM).to_string(),
            defendant: extract(line, DEFENDANT).to_string(),
            ..Self::default()
        };

        let len = line.chars().count();
        if len >= FULL_WIDTH {
            record.complainant = extract(line, COMPLAINANT).to_string();
            record.attorney = extract(line, ATTORNEY).to_string();
            record.cont = extract(line, CONT).to_string();
        } else if len >= ATTORNEY_WIDTH {
            record.complainant = extract(line, COMPLAINANT).to_string();
            record.attorney = extract(line, ATTORNEY_SHORT).to_string();
        } else {
            record.complainant = extract(line, COMPLAINANT_SHORT).to_string();
        }

        record
    }

    /// Applies one continuation line to this open record.
    pub fn apply_continuation(&mut self, kind: ContinuationKind, line: &str) {
        match kind {
            ContinuationKind::Bond => {
                self.bond = extract(line, BOND_VALUE).to_string();
            }
            ContinuationKind::Fingerprinted => {
                self.fingerprint = true;
            }
            ContinuationKind::Aka => {
                let chunk = extract(line, AKA_VALUE);
                if self.aka.is_empty() {
                    self.aka = chunk.to_string();
                } else {
                    self.aka.push_str(", ");
                    self.aka.push_str(chunk);
                }
            }
        }
    }
}
