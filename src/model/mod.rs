//! Application model - the complete state of the editor
//!
//! All user actions are applied to this state through `update::update`.

pub mod document;
pub mod position;
pub mod span;
pub mod ui;

pub use document::{
    Document, EditOperation, SpanSnapshot, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND,
};
pub use position::{PositionParseError, Selection, TextPos, TextRange};
pub use span::{ColorSpan, SpanList, StyledRun};
pub use ui::{FindReplaceState, FontSettings, UiState};

use std::ops::Range;

use crate::config::EditorConfig;

/// Application name used in the window title
pub const APP_NAME: &str = "Tintpad";

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The open document
    pub document: Document,
    /// Current selection (collapsed selection == cursor)
    pub selection: Selection,
    /// UI state
    pub ui: UiState,
    /// Editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with an empty document
    pub fn new(config: EditorConfig) -> Self {
        let document = Self::blank_document(&config);
        let ui = UiState::new(
            FontSettings {
                family: config.font_family.clone(),
                size: config.font_size,
            },
            config.word_wrap,
        );
        Self {
            document,
            selection: Selection::default(),
            ui,
            config,
        }
    }

    /// Create a model holding `text`, with defaults otherwise
    pub fn with_text(text: &str, config: EditorConfig) -> Self {
        let mut model = Self::new(config);
        model.document.buffer = ropey::Rope::from_str(text);
        model
    }

    /// A fresh document using the configured colors
    pub fn blank_document(config: &EditorConfig) -> Document {
        let mut document = Document::new();
        document.background = config.default_background;
        document.default_foreground = config.default_foreground;
        document
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Window title, e.g. "*notes.gtxt - Tintpad"
    pub fn title(&self) -> String {
        let marker = if self.document.is_modified { "*" } else { "" };
        format!("{}{} - {}", marker, self.document.display_name(), APP_NAME)
    }

    /// Cursor position (selection head)
    pub fn cursor(&self) -> TextPos {
        self.selection.head
    }

    /// Collapse the selection to a single position
    pub fn set_cursor(&mut self, pos: TextPos) {
        self.selection = Selection::new(self.document.clamp_pos(pos));
    }

    /// Move the cursor to a character offset
    pub fn set_cursor_offset(&mut self, offset: usize) {
        self.selection = Selection::new(self.document.offset_to_pos(offset));
    }

    /// Select a character offset range (head at the end)
    pub fn select_offsets(&mut self, range: Range<usize>) {
        self.selection = Selection::from_anchor_head(
            self.document.offset_to_pos(range.start),
            self.document.offset_to_pos(range.end),
        );
    }

    /// Selection as character offsets, normalized and clamped
    pub fn selection_offsets(&self) -> Range<usize> {
        let doc = &self.document;
        let start = doc
            .pos_to_offset(doc.clamp_pos(self.selection.start()))
            .unwrap_or(0);
        let end = doc
            .pos_to_offset(doc.clamp_pos(self.selection.end()))
            .unwrap_or(start);
        start..end.max(start)
    }

    /// Currently selected text (empty when the selection is collapsed)
    pub fn selected_text(&self) -> String {
        self.document.slice_to_string(self.selection_offsets())
    }

    /// Status line text: cursor position and span count
    pub fn status_line(&self) -> String {
        let cursor = self.cursor();
        format!(
            "Ln {}, Col {} | {} color span(s)",
            cursor.line,
            cursor.column + 1,
            self.document.span_count()
        )
    }
}
