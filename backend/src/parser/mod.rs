//! Header-driven CSV parsing into raw rows.
//!
//! The first record is the header. Every following record is paired with it
//! positionally and reduced to the closed set of [`Column`]s. A column the
//! line is too short to reach is *absent*, which is not the same thing as an
//! empty value.

use serde_json::{Map, Value};
use std::fmt;

use crate::error::CsvResult;
use crate::models::Column;

/// The UTF-8 byte-order mark as a decoded character.
pub const BOM: char = '\u{feff}';

/// Strip exactly one leading byte-order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

// =============================================================================
// Raw Row
// =============================================================================

/// One data record, keyed by column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    line: u64,
    values: [Option<String>; 5],
}

impl RawRow {
    /// An empty row (every column absent) starting at `line`.
    pub fn new(line: u64) -> Self {
        Self {
            line,
            values: Default::default(),
        }
    }

    /// Set a column value.
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.values[column.index()] = Some(value.into());
        self
    }

    /// Raw (untrimmed) value of a column, `None` when absent.
    pub fn get(&self, column: Column) -> Option<&str> {
        self.values[column.index()].as_deref()
    }

    /// 1-based line where the record starts.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Present columns as a JSON object (header name to raw value).
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        for column in Column::ALL {
            if let Some(value) = self.get(column) {
                obj.insert(column.header().to_string(), Value::String(value.to_string()));
            }
        }
        Value::Object(obj)
    }
}

impl fmt::Display for RawRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, column) in Column::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.get(*column) {
                Some(value) => write!(f, "{}: {:?}", column, value)?,
                None => write!(f, "{}: <missing>", column)?,
            }
        }
        f.write_str("}")
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Result of parsing a whole document.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// Header line, verbatim.
    pub headers: Vec<String>,
    /// Data rows in input order.
    pub rows: Vec<RawRow>,
}

/// Parse CSV text into raw rows.
///
/// Strips a leading BOM. Lines longer than the header have their extra values
/// ignored. If a required header appears twice, the later column wins.
/// Empty input yields no headers and no rows.
///
/// # Example
/// ```ignore
/// use cardload::parser::parse_rows;
/// use cardload::models::Column;
///
/// let parsed = parse_rows("ID,Category\n1,Logic").unwrap();
/// assert_eq!(parsed.rows[0].get(Column::Category), Some("Logic"));
/// assert_eq!(parsed.rows[0].get(Column::Content), None);
/// ```
pub fn parse_rows(text: &str) -> CsvResult<ParsedCsv> {
    let text = strip_bom(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    // The csv reader drops a leading BOM of its own; a second one belongs to
    // the first header name.
    if text.starts_with(BOM) {
        if let Some(first) = headers.first_mut() {
            if !first.starts_with(BOM) {
                first.insert(0, BOM);
            }
        }
    }

    let mut positions: [Option<usize>; 5] = [None; 5];
    for (i, header) in headers.iter().enumerate() {
        if let Some(column) = Column::from_header(header) {
            positions[column.index()] = Some(i);
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let values = positions.map(|pos| pos.and_then(|i| record.get(i)).map(str::to_string));
        rows.push(RawRow { line, values });
    }

    Ok(ParsedCsv { headers, rows })
}
