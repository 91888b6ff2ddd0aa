//! Plain text format: only the text survives

use crate::model::Document;

/// Text content of the document; spans and background are dropped
pub fn serialize(document: &Document) -> String {
    document.text()
}

/// Replace the text and drop all spans
///
/// The background is not part of plain files, so whatever the document had
/// before is kept.
pub fn deserialize_into(document: &mut Document, content: &str) {
    document.load_text(content);
}
