//! High-level conversion API.
//!
//! [`transcode`] is the in-memory core: text in, cards and diagnostics out.
//! [`convert_file`] wraps it with the file read and write collaborators.
//!
//! # Example
//!
//! ```rust,ignore
//! use cardload::{convert_file, ConvertOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = convert_file(&ConvertOptions::default())?;
//!     println!("Converted {} cards", summary.transcoded.records.len());
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConvertOptions;
use crate::document::render_document;
use crate::error::{CsvResult, PipelineError, PipelineResult};
use crate::parser::parse_rows;

use super::executor::{execute, Transcoded};

/// Result of a file conversion.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub transcoded: Transcoded,
}

impl ConvertSummary {
    /// The user-facing confirmation line.
    pub fn message(&self) -> String {
        format!(
            "Converted {} cards from {} to {}",
            self.transcoded.records.len(),
            self.input.display(),
            self.output.display()
        )
    }
}

/// Validate and normalize every row of a CSV document.
///
/// Malformed rows end up in [`Transcoded::rejected`]; they never make this
/// function fail.
pub fn transcode(text: &str) -> CsvResult<Transcoded> {
    let parsed = parse_rows(text)?;
    Ok(execute(parsed.rows))
}

/// Read a whole input file as UTF-8 text.
pub fn read_input(path: &Path) -> PipelineResult<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the rendered document.
pub fn write_output(path: &Path, content: &str) -> PipelineResult<()> {
    fs::write(path, content).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert `options.input` to `options.output`.
///
/// The output file is only touched once the whole document has been rendered.
pub fn convert_file(options: &ConvertOptions) -> PipelineResult<ConvertSummary> {
    let text = read_input(&options.input)?;
    let transcoded = transcode(&text)?;
    let document = render_document(&transcoded.records)?;
    write_output(&options.output, &document)?;

    Ok(ConvertSummary {
        input: options.input.clone(),
        output: options.output.clone(),
        transcoded,
    })
}
