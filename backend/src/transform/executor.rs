//! Row validation.
//!
//! Turns each [`RawRow`] into exactly one [`RowOutcome`] and collects the
//! outcomes of a whole document into a [`Transcoded`].

use crate::error::RowError;
use crate::models::{Card, Column};
use crate::parser::RawRow;

/// What happened to a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row became a card.
    Accepted(Card),
    /// Blank `ID` or a repeated header line. Silent.
    SkippedBlank,
    /// The row passed the blank filter but could not be validated.
    Rejected(RowError),
}

/// A row that was rejected, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub row: RawRow,
    pub error: RowError,
}

impl RejectedRow {
    /// Human-readable diagnostic line.
    pub fn diagnostic(&self) -> String {
        format!(
            "Skipping invalid row (line {}): {} - Error: {}",
            self.row.line(),
            self.row,
            self.error
        )
    }
}

/// Output of validating every row of a document.
#[derive(Debug, Clone, Default)]
pub struct Transcoded {
    /// Accepted cards, in input order.
    pub records: Vec<Card>,
    /// Rejected rows, in input order.
    pub rejected: Vec<RejectedRow>,
    /// Number of rows dropped by the blank/duplicate-header rule.
    pub skipped: usize,
    /// Number of data rows read.
    pub rows: usize,
}

/// Counts only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeStats {
    pub rows: usize,
    pub converted: usize,
    pub rejected: usize,
    pub skipped: usize,
}

impl Transcoded {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome.
    pub fn push(&mut self, row: RawRow, outcome: RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Accepted(card) => self.records.push(card),
            RowOutcome::SkippedBlank => self.skipped += 1,
            RowOutcome::Rejected(error) => self.rejected.push(RejectedRow { row, error }),
        }
    }

    /// True when no row was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn stats(&self) -> TranscodeStats {
        TranscodeStats {
            rows: self.rows,
            converted: self.records.len(),
            rejected: self.rejected.len(),
            skipped: self.skipped,
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        format!(
            "Converted: {} cards, {} rejected, {} skipped",
            self.records.len(),
            self.rejected.len(),
            self.skipped
        )
    }
}

/// True for rows that carry no card at all: `ID` absent, blank, or a
/// repeated header (`ID`, `IDX`, ` ID `, ...).
pub fn is_blank_or_header(row: &RawRow) -> bool {
    match row.get(Column::Id).map(str::trim) {
        None => true,
        Some(id) => id.is_empty() || id.starts_with("ID"),
    }
}

/// Validate one row.
///
/// Fields are checked in output order; the first failure wins.
pub fn validate_row(row: &RawRow) -> RowOutcome {
    if is_blank_or_header(row) {
        return RowOutcome::SkippedBlank;
    }

    match build_card(row) {
        Ok(card) => RowOutcome::Accepted(card),
        Err(error) => RowOutcome::Rejected(error),
    }
}

fn build_card(row: &RawRow) -> Result<Card, RowError> {
    let id_text = field(row, Column::Id)?;
    let id = id_text.parse::<i64>().map_err(|source| RowError::InvalidId {
        value: id_text.to_string(),
        source,
    })?;

    Ok(Card {
        id,
        category: field(row, Column::Category)?.to_string(),
        content: field(row, Column::Content)?.to_string(),
        penalty: field(row, Column::Penalty)?.to_string(),
        difficulty: field(row, Column::Difficulty)?.to_string(),
    })
}

fn field(row: &RawRow, column: Column) -> Result<&str, RowError> {
    row.get(column)
        .map(str::trim)
        .ok_or(RowError::MissingField(column))
}

/// Validate every row, preserving order.
pub fn execute(rows: Vec<RawRow>) -> Transcoded {
    let mut result = Transcoded::new();

    for row in rows {
        let outcome = validate_row(&row);
        result.push(row, outcome);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(id: &str) -> RawRow {
        RawRow::new(2)
            .with(Column::Id, id)
            .with(Column::Category, " Logic ")
            .with(Column::Content, "  What is 2+2?\t")
            .with(Column::Penalty, "None")
            .with(Column::Difficulty, "Easy ")
    }

    #[test]
    fn test_accepts_and_trims() {
        let outcome = validate_row(&full_row(" 42 "));
        assert_eq!(
            outcome,
            RowOutcome::Accepted(Card {
                id: 42,
                category: "Logic".into(),
                content: "What is 2+2?".into(),
                penalty: "None".into(),
                difficulty: "Easy".into(),
            })
        );
    }

    #[test]
    fn test_signed_ids() {
        match validate_row(&full_row("-3")) {
            RowOutcome::Accepted(card) => assert_eq!(card.id, -3),
            other => panic!("unexpected outcome: {:?}", other),
        }
        match validate_row(&full_row("+8")) {
            RowOutcome::Accepted(card) => assert_eq!(card.id, 8),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_blank_id_is_skipped() {
        assert_eq!(validate_row(&full_row("")), RowOutcome::SkippedBlank);
        assert_eq!(validate_row(&full_row("   ")), RowOutcome::SkippedBlank);
        assert_eq!(validate_row(&RawRow::new(2)), RowOutcome::SkippedBlank);
    }

    #[test]
    fn test_header_like_id_is_skipped() {
        assert_eq!(validate_row(&full_row("ID")), RowOutcome::SkippedBlank);
        assert_eq!(validate_row(&full_row("IDX")), RowOutcome::SkippedBlank);
    }

    #[test]
    fn test_prefix_check_is_on_trimmed_value() {
        assert_eq!(validate_row(&full_row(" ID ")), RowOutcome::SkippedBlank);
        // Case-sensitive: "id" is just a bad integer.
        assert!(matches!(
            validate_row(&full_row("id")),
            RowOutcome::Rejected(RowError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_out_of_range_id_is_rejected() {
        match validate_row(&full_row("9223372036854775808")) {
            RowOutcome::Rejected(RowError::InvalidId { source, .. }) => {
                assert!(source.to_string().contains("too large"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(matches!(
            validate_row(&full_row("9223372036854775807")),
            RowOutcome::Accepted(_)
        ));
    }

    #[test]
    fn test_non_integer_id_is_rejected() {
        for bad in ["abc", "1.5", "12a", "99999999999999999999"] {
            match validate_row(&full_row(bad)) {
                RowOutcome::Rejected(RowError::InvalidId { value, .. }) => assert_eq!(value, bad),
                other => panic!("unexpected outcome for {:?}: {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let row = RawRow::new(3)
            .with(Column::Id, "3")
            .with(Column::Content, "Q")
            .with(Column::Penalty, "None")
            .with(Column::Difficulty, "Easy");
        assert_eq!(
            validate_row(&row),
            RowOutcome::Rejected(RowError::MissingField(Column::Category))
        );
    }

    #[test]
    fn test_empty_field_is_not_missing() {
        let row = full_row("4").with(Column::Penalty, "   ");
        match validate_row(&row) {
            RowOutcome::Accepted(card) => assert_eq!(card.penalty, ""),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_id_checked_before_other_fields() {
        let row = RawRow::new(2).with(Column::Id, "abc");
        assert!(matches!(
            validate_row(&row),
            RowOutcome::Rejected(RowError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_execute_preserves_order_and_counts() {
        let rows = vec![
            full_row("1"),
            full_row(""),
            full_row("2"),
            full_row("abc"),
            full_row("ID"),
            full_row("3"),
        ];
        let result = execute(rows);

        let ids: Vec<i64> = result.records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.rows, 6);
        assert_eq!(
            result.records.len() + result.rejected.len() + result.skipped,
            result.rows
        );
        assert!(!result.is_clean());
    }

    #[test]
    fn test_diagnostic_names_row_and_reason() {
        let result = execute(vec![full_row("abc")]);
        let msg = result.rejected[0].diagnostic();

        assert!(msg.contains("line 2"));
        assert!(msg.contains(r#"ID: "abc""#));
        assert!(msg.contains("invalid ID 'abc'"));
    }

    #[test]
    fn test_summary() {
        let result = execute(vec![full_row("1"), full_row("x"), full_row("")]);
        assert_eq!(result.summary(), "Converted: 1 cards, 1 rejected, 1 skipped");
        assert_eq!(
            result.stats(),
            TranscodeStats {
                rows: 3,
                converted: 1,
                rejected: 1,
                skipped: 1
            }
        );
    }
}
