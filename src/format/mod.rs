//! On-disk document formats
//!
//! `.gtxt` files carry text, background and color spans as JSON. Every other
//! extension is treated as plain UTF-8 text with no color information.

pub mod gtxt;
pub mod plain;

use std::path::Path;

use thiserror::Error;

use crate::color::Color;
use crate::model::Document;

pub use gtxt::{ColorEntry, GtxtContent};

/// Errors raised while decoding a document
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object at the top level")]
    NotAnObject,
    #[error("missing \"text\" field")]
    MissingText,
    #[error("\"text\" must be a string, found {0}")]
    InvalidText(&'static str),
}

/// File format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Color-annotated JSON document
    Gtxt,
    /// Raw text, colors are discarded
    Plain,
}

impl FileFormat {
    /// `.gtxt` (any case) is the colored format, anything else is plain
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gtxt") => FileFormat::Gtxt,
            _ => FileFormat::Plain,
        }
    }

    /// Whether colors survive a save in this format
    pub fn keeps_colors(self) -> bool {
        matches!(self, FileFormat::Gtxt)
    }
}

/// Encode a document for writing in `format`
pub fn encode(document: &Document, format: FileFormat) -> Result<String, FormatError> {
    match format {
        FileFormat::Gtxt => gtxt::serialize(document),
        FileFormat::Plain => Ok(plain::serialize(document)),
    }
}

/// Decode file content into `document`
///
/// The content is fully parsed before the document is touched, so a decode
/// error leaves the document exactly as it was. `default_background` is
/// used when a `.gtxt` file has no usable background.
pub fn decode_into(
    document: &mut Document,
    content: &str,
    format: FileFormat,
    default_background: Color,
) -> Result<(), FormatError> {
    match format {
        FileFormat::Gtxt => {
            let parsed = gtxt::deserialize(content)?;
            parsed.apply_to(document, default_background);
        }
        FileFormat::Plain => plain::deserialize_into(document, content),
    }
    Ok(())
}
