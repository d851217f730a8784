//! Error types for the cardload conversion pipeline.
//!
//! - [`CsvError`] - the input text could not be read as CSV
//! - [`RowError`] - a single data row was rejected (recoverable)
//! - [`DocumentError`] - JSON document rendering or checking failed
//! - [`PipelineError`] - top-level file conversion errors
//!
//! Row rejections never abort a run: they are collected as diagnostics by
//! [`crate::transform::executor`]. Everything else propagates with `?`.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Column;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading delimited text.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The CSV reader gave up on a record.
    #[error("Invalid CSV format{}: {message}", at_line(.line))]
    ParseError { line: Option<u64>, message: String },
}

fn at_line(line: &Option<u64>) -> String {
    match line {
        Some(l) => format!(" at line {}", l),
        None => String::new(),
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        CsvError::ParseError {
            line,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Row Rejections
// =============================================================================

/// Why a data row could not become a [`crate::models::Card`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The line was shorter than the header, or the header lacks the column.
    #[error("missing field '{0}'")]
    MissingField(Column),

    /// The trimmed `ID` is not an integer.
    #[error("invalid ID '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

// =============================================================================
// Document Errors
// =============================================================================

/// Errors while rendering or re-reading the JSON document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parses but re-rendering it changes its bytes.
    #[error("Document is not in canonical form (re-rendering changes it)")]
    NotCanonical,
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level conversion errors returned by
/// [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input file could not be read.
    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("Cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Document rendering error.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
