//! Document model - the text buffer, its color spans and file state

use std::ops::Range;
use std::path::PathBuf;

use ropey::Rope;

use super::position::{Selection, TextPos, TextRange};
use super::span::{ColorSpan, SpanList, StyledRun};
use crate::color::Color;

/// Paper color used when a document does not specify one
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0xfb, 0xf4, 0xe6);

/// Text color used where no span applies
pub const DEFAULT_FOREGROUND: Color = Color::BLACK;

/// Represents an edit operation for undo/redo functionality
///
/// Positions are character offsets at the time the edit was applied.
#[derive(Debug, Clone)]
pub enum EditOperation {
    Insert {
        position: usize,
        text: String,
        selection_before: Selection,
        selection_after: Selection,
    },
    Delete {
        position: usize,
        text: String,
        /// Set when the deleted text was colored
        spans: Option<SpanSnapshot>,
        selection_before: Selection,
        selection_after: Selection,
    },
    /// Replace operation - used when typing over a selection to make undo atomic
    Replace {
        position: usize,
        deleted_text: String,
        inserted_text: String,
        spans: Option<SpanSnapshot>,
        selection_before: Selection,
        selection_after: Selection,
    },
    /// Batch operation - groups several edits (replace all) into one undo step
    Batch {
        /// Individual operations (applied in order for redo, reverse order for undo)
        operations: Vec<EditOperation>,
        selection_before: Selection,
        selection_after: Selection,
    },
}

/// Span lists on both sides of an edit that removed colored text
///
/// Shifting cannot bring back spans a deletion collapsed, so undo and redo
/// swap these in instead, as long as nothing recolored the text meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanSnapshot {
    pub before: SpanList,
    pub after: SpanList,
}

/// Document state - the text buffer, color annotations and file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Uniform background color
    pub background: Color,
    /// Color for characters not covered by any span (not persisted)
    pub default_foreground: Color,
    /// Foreground color spans in shadowing order
    spans: SpanList,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the document has unsaved changes
    pub is_modified: bool,
    /// Undo stack
    pub undo_stack: Vec<EditOperation>,
    /// Redo stack
    pub redo_stack: Vec<EditOperation>,
    /// Document revision counter (incremented on each change)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            background: DEFAULT_BACKGROUND,
            default_foreground: DEFAULT_FOREGROUND,
            spans: SpanList::new(),
            file_path: None,
            is_modified: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            revision: 0,
        }
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Full buffer content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of characters in the buffer
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get a line by 1-based number, without its line terminator
    pub fn get_line(&self, line: usize) -> Option<String> {
        let idx = line.checked_sub(1)?;
        if idx >= self.buffer.len_lines() {
            return None;
        }
        let text = self.buffer.line(idx).to_string();
        Some(text.strip_suffix('\n').unwrap_or(&text).to_string())
    }

    /// Length of a 1-based line in characters (excluding newline)
    ///
    /// Lines end at `\n` only; a `\r` before it counts as a column.
    pub fn line_length(&self, line: usize) -> usize {
        let Some(idx) = line.checked_sub(1) else {
            return 0;
        };
        if idx >= self.buffer.len_lines() {
            return 0;
        }
        let slice = self.buffer.line(idx);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    // ========================================================================
    // Position conversion
    // ========================================================================

    /// Check whether a position addresses a location inside the text
    pub fn is_valid_pos(&self, pos: TextPos) -> bool {
        pos.line >= 1 && pos.line <= self.line_count() && pos.column <= self.line_length(pos.line)
    }

    /// Convert a position to a character offset, if it is valid
    pub fn pos_to_offset(&self, pos: TextPos) -> Option<usize> {
        if !self.is_valid_pos(pos) {
            return None;
        }
        Some(self.buffer.line_to_char(pos.line - 1) + pos.column)
    }

    /// Convert a character offset to a position (offset is clamped)
    pub fn offset_to_pos(&self, offset: usize) -> TextPos {
        let clamped = offset.min(self.buffer.len_chars());
        let line_idx = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line_idx);
        TextPos::new(line_idx + 1, clamped - line_start)
    }

    /// Snap a position to the nearest valid one
    pub fn clamp_pos(&self, pos: TextPos) -> TextPos {
        let line = pos.line.clamp(1, self.line_count());
        TextPos::new(line, pos.column.min(self.line_length(line)))
    }

    /// Convert a range to offsets; `None` if either end is out of bounds
    pub fn range_to_offsets(&self, range: TextRange) -> Option<Range<usize>> {
        let start = self.pos_to_offset(range.start)?;
        let end = self.pos_to_offset(range.end)?;
        Some(start..end)
    }

    /// Range covering the whole document
    pub fn full_range(&self) -> TextRange {
        TextRange::new(TextPos::START, self.offset_to_pos(self.len_chars()))
    }

    // ========================================================================
    // Color spans
    // ========================================================================

    /// Color `range` with `color`, on top of any existing spans
    ///
    /// Returns `false` (and changes nothing) for empty or out-of-bounds ranges.
    pub fn apply_color(&mut self, range: TextRange, color: Color) -> bool {
        let Some(offsets) = self.range_to_offsets(range) else {
            return false;
        };
        if offsets.start >= offsets.end {
            return false;
        }
        self.spans
            .push(ColorSpan::new(offsets.start, offsets.end, color));
        self.mark_modified();
        true
    }

    /// Remove all coloring inside `range`
    ///
    /// Returns `false` (and changes nothing) for empty or out-of-bounds ranges.
    pub fn clear_color(&mut self, range: TextRange) -> bool {
        let Some(offsets) = self.range_to_offsets(range) else {
            return false;
        };
        if offsets.start >= offsets.end {
            return false;
        }
        self.spans.clear_range(offsets);
        self.mark_modified();
        true
    }

    /// Replace the background color
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.mark_modified();
    }

    /// Color of the top-most span containing `pos`, if any
    pub fn span_color_at(&self, pos: TextPos) -> Option<Color> {
        let offset = self.pos_to_offset(pos)?;
        self.spans.color_at(offset)
    }

    /// Color a renderer should use for the character at `pos`
    pub fn effective_color_at(&self, pos: TextPos) -> Color {
        self.span_color_at(pos).unwrap_or(self.default_foreground)
    }

    /// Spans in addition order, with their current positions
    pub fn spans(&self) -> Vec<(TextRange, Color)> {
        self.spans
            .iter()
            .filter(|span| !span.is_empty())
            .map(|span| {
                let range =
                    TextRange::new(self.offset_to_pos(span.start), self.offset_to_pos(span.end));
                (range, span.color)
            })
            .collect()
    }

    /// Raw offset-based spans
    pub fn span_list(&self) -> &SpanList {
        &self.spans
    }

    /// Number of spans currently stored
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Resolve spans into runs of equal color over the whole text
    pub fn styled_runs(&self) -> Vec<StyledRun> {
        self.spans.styled_runs(self.len_chars())
    }

    // ========================================================================
    // Text mutation
    // ========================================================================

    /// Insert text at a character offset, shifting spans
    ///
    /// Does not record history; callers push an `EditOperation`.
    pub fn insert_at(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.len_chars());
        self.buffer.insert(offset, text);
        self.spans.shift_for_insert(offset, text.chars().count());
    }

    /// Remove a character range, shifting spans, and return the removed text
    ///
    /// Does not record history; callers push an `EditOperation`.
    pub fn remove_range(&mut self, range: Range<usize>) -> String {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        if start == end {
            return String::new();
        }
        let removed = self.buffer.slice(start..end).to_string();
        self.buffer.remove(start..end);
        self.spans.shift_for_delete(start..end);
        removed
    }

    /// Replace a character range with `text`, shifting spans
    ///
    /// Returns the removed text, and the span lists around the edit when it
    /// removed colored characters. Does not record history.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        text: &str,
    ) -> (String, Option<SpanSnapshot>) {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        let before = self
            .spans
            .intersects(&(start..end))
            .then(|| self.spans.clone());
        let removed = self.remove_range(start..end);
        self.insert_at(start, text);
        let snapshot = before.map(|before| SpanSnapshot {
            before,
            after: self.spans.clone(),
        });
        (removed, snapshot)
    }

    /// Swap the whole span list
    pub fn set_span_list(&mut self, spans: SpanList) {
        self.spans = spans;
    }

    /// Text inside a character range
    pub fn slice_to_string(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        self.buffer.slice(start..end).to_string()
    }

    /// Replace all text, dropping spans and history
    ///
    /// The background is left as is.
    pub fn load_text(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
        self.spans.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.is_modified = false;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Push an edit operation onto the undo stack and clear redo stack
    pub fn push_edit(&mut self, op: EditOperation) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
        self.mark_modified();
    }

    /// Flag unsaved changes and bump the revision
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Find all occurrences with case sensitivity option
    /// Returns Vec of (start_char_offset, end_char_offset) in character indices
    pub fn find_all_occurrences(&self, needle: &str, case_sensitive: bool) -> Vec<(usize, usize)> {
        if needle.is_empty() {
            return Vec::new();
        }

        let haystack: Vec<char> = self.buffer.chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        if needle.len() > haystack.len() {
            return Vec::new();
        }

        let eq = |a: char, b: char| {
            if case_sensitive {
                a == b
            } else {
                a == b || a.to_lowercase().eq(b.to_lowercase())
            }
        };

        (0..=haystack.len() - needle.len())
            .filter(|&start| {
                haystack[start..start + needle.len()]
                    .iter()
                    .zip(&needle)
                    .all(|(&a, &b)| eq(a, b))
            })
            .map(|start| (start, start + needle.len()))
            .collect()
    }

    /// Find next occurrence starting at or after `from` (wraps back to start)
    pub fn find_next_occurrence(
        &self,
        needle: &str,
        from: usize,
        case_sensitive: bool,
    ) -> Option<(usize, usize)> {
        let occurrences = self.find_all_occurrences(needle, case_sensitive);

        occurrences
            .iter()
            .find(|(start, _)| *start >= from)
            .or_else(|| occurrences.first())
            .copied()
    }

    /// Find previous occurrence ending before `before` (wraps to end)
    pub fn find_prev_occurrence(
        &self,
        needle: &str,
        before: usize,
        case_sensitive: bool,
    ) -> Option<(usize, usize)> {
        let occurrences = self.find_all_occurrences(needle, case_sensitive);

        occurrences
            .iter()
            .rev()
            .find(|(start, _)| *start < before)
            .or_else(|| occurrences.last())
            .copied()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
