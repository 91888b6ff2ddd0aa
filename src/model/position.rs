//! Text positions, ranges and selections
//!
//! Positions use the `line.column` convention of the `.gtxt` format:
//! lines are 1-based, columns are 0-based character counts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a `"line.column"` string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionParseError {
    #[error("expected \"line.column\", got {0:?}")]
    MissingSeparator(String),
    #[error("invalid line number in {0:?}")]
    InvalidLine(String),
    #[error("invalid column number in {0:?}")]
    InvalidColumn(String),
}

/// A position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextPos {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
}

impl TextPos {
    /// Start of the document
    pub const START: TextPos = TextPos { line: 1, column: 0 };

    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Parse a `"line.column"` string
    pub fn parse(s: &str) -> Result<Self, PositionParseError> {
        let (line, column) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| PositionParseError::MissingSeparator(s.to_string()))?;

        let line: usize = line
            .parse()
            .map_err(|_| PositionParseError::InvalidLine(s.to_string()))?;
        if line == 0 {
            return Err(PositionParseError::InvalidLine(s.to_string()));
        }
        let column: usize = column
            .parse()
            .map_err(|_| PositionParseError::InvalidColumn(s.to_string()))?;

        Ok(Self { line, column })
    }
}

impl Default for TextPos {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for TextPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

impl FromStr for TextPos {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextPos::parse(s)
    }
}

/// A half-open range of positions (`end` is exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: TextPos,
    pub end: TextPos,
}

impl TextRange {
    pub const fn new(start: TextPos, end: TextPos) -> Self {
        Self { start, end }
    }

    /// A range covers no characters when it does not move forward
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if a position is inside the range
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A text selection with anchor (start) and head (cursor end)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: TextPos,
    /// Where the cursor is (moving point)
    pub head: TextPos,
}

impl Selection {
    /// Create a new empty selection at a position
    pub fn new(pos: TextPos) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Create a selection from anchor to head
    pub fn from_anchor_head(anchor: TextPos, head: TextPos) -> Self {
        Self { anchor, head }
    }

    /// Check if selection is empty (cursor without selection)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start of the selection (smaller position)
    pub fn start(&self) -> TextPos {
        self.anchor.min(self.head)
    }

    /// Get the end of the selection (larger position)
    pub fn end(&self) -> TextPos {
        self.anchor.max(self.head)
    }

    /// Normalized range covered by the selection
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start(), self.end())
    }
}
