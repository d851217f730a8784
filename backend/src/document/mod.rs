//! JSON document rendering and checking.
//!
//! The document is a JSON array of cards, indented with two spaces, with
//! non-ASCII text written as-is and no trailing newline. That is exactly what
//! `serde_json::to_string_pretty` produces.

use crate::error::{DocumentError, DocumentResult};
use crate::models::Card;

/// Render cards as the output document.
pub fn render_document(cards: &[Card]) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

/// Parse a document back into cards.
///
/// Unknown keys or wrongly typed values are errors.
pub fn check_document(text: &str) -> DocumentResult<Vec<Card>> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a document and require that re-rendering it reproduces it byte for
/// byte. A trailing newline is tolerated.
pub fn verify_document(text: &str) -> DocumentResult<Vec<Card>> {
    let cards = check_document(text)?;
    let rendered = render_document(&cards)?;
    let body = text.strip_suffix('\n').unwrap_or(text);
    if rendered != body {
        return Err(DocumentError::NotCanonical);
    }
    Ok(cards)
}
