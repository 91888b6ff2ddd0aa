//! `.gtxt` color-annotated text format
//!
//! ```json
//! {
//!   "text": "hello world",
//!   "background": "#fbf4e6",
//!   "colors": [{ "start": "1.0", "end": "1.5", "color": "#ff0000" }]
//! }
//! ```
//!
//! Positions are `line.column` with 1-based lines and 0-based columns.
//! Color entries are written in the order they were added, which is also
//! the order in which they shadow each other.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FormatError;
use crate::color::Color;
use crate::model::{Document, TextPos, TextRange};

/// One entry of the `colors` array, exactly as it appears in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub start: String,
    pub end: String,
    pub color: String,
}

impl ColorEntry {
    /// Parse positions and color; `None` if any of them is malformed
    fn parse(&self) -> Option<(TextRange, Color)> {
        let start = TextPos::parse(&self.start).ok()?;
        let end = TextPos::parse(&self.end).ok()?;
        let color = Color::from_hex(&self.color).ok()?;
        Some((TextRange::new(start, end), color))
    }
}

#[derive(Serialize)]
struct GtxtFile {
    text: String,
    background: String,
    colors: Vec<ColorEntry>,
}

/// A parsed `.gtxt` file, not yet applied to a document
#[derive(Debug, Clone, PartialEq)]
pub struct GtxtContent {
    pub text: String,
    /// `None` when missing, null or unparseable
    pub background: Option<Color>,
    /// Well-formed color entries in file order
    pub colors: Vec<(TextRange, Color)>,
}

impl GtxtContent {
    /// Replace the document's text, background and spans with this content
    ///
    /// Entries whose positions fall outside the text, or that are empty,
    /// are skipped. Undo history is cleared and the document is unmodified
    /// afterwards.
    pub fn apply_to(self, document: &mut Document, default_background: Color) {
        document.load_text(&self.text);
        document.background = self.background.unwrap_or(default_background);

        let total = self.colors.len();
        let mut skipped = 0;
        for (range, color) in self.colors {
            if !document.apply_color(range, color) {
                tracing::debug!("Skipping color span {} {}: out of range or empty", range, color);
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::warn!("Skipped {} of {} color spans while loading", skipped, total);
        }

        document.is_modified = false;
    }
}

/// Serialize a document to pretty-printed `.gtxt` JSON
pub fn serialize(document: &Document) -> Result<String, FormatError> {
    let file = GtxtFile {
        text: document.text(),
        background: document.background.to_hex(),
        colors: document
            .spans()
            .into_iter()
            .map(|(range, color)| ColorEntry {
                start: range.start.to_string(),
                end: range.end.to_string(),
                color: color.to_hex(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Parse `.gtxt` JSON
///
/// Fails on malformed JSON, a non-object root, a missing `text` field or a
/// `text` that is neither a string nor null. Individual color entries that
/// are incomplete or malformed are skipped.
pub fn deserialize(input: &str) -> Result<GtxtContent, FormatError> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Object(root) = value else {
        return Err(FormatError::NotAnObject);
    };

    let text = match root.get("text") {
        None => return Err(FormatError::MissingText),
        Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => return Err(FormatError::InvalidText(json_type_name(other))),
    };

    let background = match root.get("background") {
        Some(Value::String(hex)) => match Color::from_hex(hex) {
            Ok(color) => Some(color),
            Err(e) => {
                tracing::warn!("Ignoring background: {}", e);
                None
            }
        },
        _ => None,
    };

    let colors = root
        .get("colors")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse_entry).collect())
        .unwrap_or_default();

    Ok(GtxtContent {
        text,
        background,
        colors,
    })
}

fn parse_entry(value: &Value) -> Option<(TextRange, Color)> {
    let entry: ColorEntry = match serde_json::from_value(value.clone()) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::debug!("Skipping incomplete color entry {}: {}", value, e);
            return None;
        }
    };
    let parsed = entry.parse();
    if parsed.is_none() {
        tracing::debug!("Skipping malformed color entry {:?}", entry);
    }
    parsed
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_FOREGROUND;

    const RED: Color = Color::rgb(0xff, 0, 0);
    const PAPER: Color = Color::rgb(0xfb, 0xf4, 0xe6);

    fn range(a: (usize, usize), b: (usize, usize)) -> TextRange {
        TextRange::new(TextPos::new(a.0, a.1), TextPos::new(b.0, b.1))
    }

    #[test]
    fn test_serialize_layout() {
        let mut doc = Document::with_text("hello world");
        doc.background = PAPER;
        doc.apply_color(range((1, 0), (1, 5)), RED);

        let json = serialize(&doc).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "hello world");
        assert_eq!(value["background"], "#fbf4e6");
        assert_eq!(value["colors"][0]["start"], "1.0");
        assert_eq!(value["colors"][0]["end"], "1.5");
        assert_eq!(value["colors"][0]["color"], "#ff0000");
    }

    #[test]
    fn test_deserialize_full_document() {
        let content = deserialize(
            r##"{"text": "a\nbc", "background": "#000000",
                "colors": [{"start": "2.0", "end": "2.2", "color": "#FF0000"}]}"##,
        )
        .unwrap();
        assert_eq!(content.text, "a\nbc");
        assert_eq!(content.background, Some(Color::BLACK));
        assert_eq!(content.colors, vec![(range((2, 0), (2, 2)), RED)]);
    }

    #[test]
    fn test_deserialize_rejects_structural_errors() {
        assert!(matches!(deserialize("[1, 2]"), Err(FormatError::NotAnObject)));
        assert!(matches!(
            deserialize(r#"{"colors": []}"#),
            Err(FormatError::MissingText)
        ));
        assert!(matches!(
            deserialize(r#"{"text": 5}"#),
            Err(FormatError::InvalidText("a number"))
        ));
        assert!(matches!(
            deserialize("{\"text\": "),
            Err(FormatError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_deserialize_null_text_is_empty() {
        let content = deserialize(r#"{"text": null}"#).unwrap();
        assert_eq!(content.text, "");
        assert!(content.colors.is_empty());
        assert_eq!(content.background, None);
    }

    #[test]
    fn test_deserialize_skips_bad_entries_individually() {
        let content = deserialize(
            r##"{"text": "abcdef", "colors": [
                {"start": "1.0", "color": "#ff0000"},
                {"start": "1.0", "end": "1.2", "color": "crimson"},
                {"start": "x", "end": "1.2", "color": "#ff0000"},
                "not an object",
                {"start": "1.1", "end": "1.3", "color": "#ff0000"}
            ]}"##,
        )
        .unwrap();
        assert_eq!(content.colors, vec![(range((1, 1), (1, 3)), RED)]);
    }

    #[test]
    fn test_invalid_background_falls_back() {
        let content = deserialize(r#"{"text": "x", "background": "beige"}"#).unwrap();
        assert_eq!(content.background, None);

        let mut doc = Document::new();
        content.apply_to(&mut doc, PAPER);
        assert_eq!(doc.background, PAPER);
    }

    #[test]
    fn test_apply_skips_out_of_range_spans() {
        let content = deserialize(
            r##"{"text": "short", "colors": [
                {"start": "1.0", "end": "1.99", "color": "#ff0000"},
                {"start": "1.1", "end": "1.2", "color": "#ff0000"}
            ]}"##,
        )
        .unwrap();
        let mut doc = Document::new();
        content.apply_to(&mut doc, PAPER);
        assert_eq!(doc.span_count(), 1);
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_roundtrip_preserves_shadowing() {
        let mut doc = Document::with_text("overlapping");
        doc.apply_color(range((1, 0), (1, 8)), RED);
        doc.apply_color(range((1, 4), (1, 11)), Color::rgb(0, 0, 255));

        let json = serialize(&doc).unwrap();
        let mut loaded = Document::new();
        deserialize(&json).unwrap().apply_to(&mut loaded, PAPER);

        for column in 0..11 {
            let pos = TextPos::new(1, column);
            assert_eq!(loaded.effective_color_at(pos), doc.effective_color_at(pos));
        }
        assert_eq!(loaded.effective_color_at(TextPos::new(1, 11)), DEFAULT_FOREGROUND);
    }
}
