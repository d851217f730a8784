//! Domain models for the cardload conversion pipeline.
//!
//! - [`Column`] - The closed set of CSV columns a card is built from
//! - [`Card`] - A validated, normalized card as written to the JSON document

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Columns
// =============================================================================

/// A required CSV column.
///
/// Header matching is exact: `"id"` or `" ID"` in the header line are not
/// the `ID` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Category,
    Content,
    Penalty,
    Difficulty,
}

impl Column {
    /// All columns, in output key order.
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Category,
        Column::Content,
        Column::Penalty,
        Column::Difficulty,
    ];

    /// Header text as it appears in the CSV.
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Category => "Category",
            Column::Content => "Content",
            Column::Penalty => "Penalty",
            Column::Difficulty => "Difficulty",
        }
    }

    /// Look up a column by its exact header text.
    pub fn from_header(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == name)
    }

    /// Position in [`Column::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// =============================================================================
// Card
// =============================================================================

/// A validated card.
///
/// Field order here is the key order of the JSON document.
/// `penalty` and `difficulty` stay free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    /// Limited to the `i64` range; larger IDs are rejected at validation.
    pub id: i64,
    pub category: String,
    pub content: String,
    pub penalty: String,
    pub difficulty: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_lookup_is_exact() {
        assert_eq!(Column::from_header("ID"), Some(Column::Id));
        assert_eq!(Column::from_header("Difficulty"), Some(Column::Difficulty));
        assert_eq!(Column::from_header("id"), None);
        assert_eq!(Column::from_header(" ID"), None);
        assert_eq!(Column::from_header("Notes"), None);
    }

    #[test]
    fn test_column_index_matches_all() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_card_key_order() {
        let card = Card {
            id: 7,
            category: "Logic".into(),
            content: "Q".into(),
            penalty: "None".into(),
            difficulty: "Easy".into(),
        };
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"category":"Logic","content":"Q","penalty":"None","difficulty":"Easy"}"#
        );
    }

    #[test]
    fn test_card_rejects_unknown_keys() {
        let value = json!({
            "id": 1,
            "category": "a",
            "content": "b",
            "penalty": "c",
            "difficulty": "d",
            "extra": true
        });
        assert!(serde_json::from_value::<Card>(value).is_err());
    }
}
