//! Per-file processing errors.

use std::path::PathBuf;

/// Errors that can occur while processing one input file.
///
/// All variants are caught at the run loop so that a single bad file never
/// aborts the run; rows already written for that file are retained.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read report line: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to write output row: {0}")]
    Write(#[from] csv::Error),
}
