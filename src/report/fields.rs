//! Fixed-width column descriptors.
//!
//! All column positions are character offsets into a report line. Lines
//! shorter than a span simply yield a truncated or empty field; extraction
//! never fails.

/// A half-open character column range within a report line.
///
/// `end == None` means "to end of line".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: Option<usize>,
}

impl Span {
    /// Columns `[start, end)`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Columns `[start, end-of-line)`.
    pub const fn open(start: usize) -> Self {
        Self { start, end: None }
    }
}

/// Extracts the characters of `line` covered by `span`, trimmed of
/// surrounding whitespace.
///
/// Offsets are clamped to the line's actual length, so short or malformed
/// lines produce truncated/empty fields rather than a panic. Offsets count
/// characters, not bytes, matching how the upstream reports are laid out.
pub fn extract(line: &str, span: Span) -> &str {
    let begin = byte_offset(line, span.start);
    let rest = &line[begin..];
    let slice = match span.end {
        Some(end) => &rest[..byte_offset(rest, end.saturating_sub(span.start))],
        None => rest,
    };
    slice.trim()
}

/// Byte offset of the `n`-th character, clamped to the string's length.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or_else(|| s.len())
}
