//! # Cardload - CSV card decks to JSON
//!
//! Cardload reads a deck of cards stored as CSV (`ID`, `Category`, `Content`,
//! `Penalty`, `Difficulty`), validates and trims every row, and writes the
//! accepted cards as an indented JSON array.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Executor   │────▶│  JSON deck  │
//! │ (UTF-8/BOM) │     │  (RawRow)   │     │ (validate)  │     │ (2-indent)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Malformed rows are rejected with a diagnostic and never stop a run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cardload::{render_document, transcode};
//!
//! let result = transcode("ID,Category,Content,Penalty,Difficulty\n1,Logic,Q,None,Easy")?;
//! println!("{}", render_document(&result.records)?);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - `Column` and `Card`
//! - [`parser`] - BOM handling and header-driven CSV parsing
//! - [`transform`] - Row validation and the conversion pipeline
//! - [`document`] - JSON rendering and checking
//! - [`report`] - Diagnostics for the command line
//! - [`config`] - Input/output paths

pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod transform;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ConvertOptions;
pub use document::{check_document, render_document, verify_document};
pub use error::{CsvError, DocumentError, PipelineError, RowError};
pub use models::{Card, Column};
pub use parser::{parse_rows, strip_bom, ParsedCsv, RawRow};
pub use report::{LogEntry, LogLevel, Reporter, REPORTER};
pub use transform::{
    convert_file, execute, transcode, validate_row, ConvertSummary, RejectedRow, RowOutcome,
    TranscodeStats, Transcoded,
};
