//! Foreground color spans
//!
//! Spans are kept as character-offset ranges in the order they were added.
//! Later spans shadow earlier ones where they overlap. Offsets shift with
//! text edits so a span stays attached to the characters it colors.

use std::ops::Range;

use crate::color::Color;

/// A contiguous range of characters with one foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpan {
    /// First character offset (inclusive)
    pub start: usize,
    /// Last character offset (exclusive)
    pub end: usize,
    pub color: Color,
}

impl ColorSpan {
    pub fn new(start: usize, end: usize, color: Color) -> Self {
        Self { start, end, color }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A maximal run of characters that render with the same color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRun {
    pub start: usize,
    pub end: usize,
    /// `None` means the default foreground
    pub color: Option<Color>,
}

/// Ordered list of spans (addition order == shadowing order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanList {
    spans: Vec<ColorSpan>,
}

impl SpanList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSpan> {
        self.spans.iter()
    }

    pub fn as_slice(&self) -> &[ColorSpan] {
        &self.spans
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Whether any non-empty span covers part of `range`
    pub fn intersects(&self, range: &Range<usize>) -> bool {
        self.spans
            .iter()
            .any(|span| !span.is_empty() && span.start < range.end && span.end > range.start)
    }

    /// Append a span on top of all existing spans
    pub fn push(&mut self, span: ColorSpan) {
        self.spans.push(span);
    }

    /// Color of the top-most span covering `offset`
    pub fn color_at(&self, offset: usize) -> Option<Color> {
        self.spans
            .iter()
            .rev()
            .find(|span| span.contains(offset))
            .map(|span| span.color)
    }

    /// Remove coloring from `range`
    ///
    /// Spans inside the range are dropped, spans crossing one edge are
    /// truncated, and a span covering the whole range is split in two.
    /// Surviving pieces keep their original place in the shadowing order.
    pub fn clear_range(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }

        let mut kept = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if span.end <= range.start || span.start >= range.end {
                kept.push(span);
                continue;
            }
            if span.start < range.start {
                kept.push(ColorSpan::new(span.start, range.start, span.color));
            }
            if span.end > range.end {
                kept.push(ColorSpan::new(range.end, span.end, span.color));
            }
        }
        self.spans = kept;
    }

    /// Adjust offsets after `len` characters were inserted at `at`
    ///
    /// Text inserted strictly inside a span takes that span's color; text
    /// inserted at a span's start or end stays outside it.
    pub fn shift_for_insert(&mut self, at: usize, len: usize) {
        if len == 0 {
            return;
        }
        for span in &mut self.spans {
            if at <= span.start {
                span.start += len;
                span.end += len;
            } else if at < span.end {
                span.end += len;
            }
        }
    }

    /// Adjust offsets after the characters in `range` were deleted
    pub fn shift_for_delete(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let removed = range.end - range.start;
        let map = |offset: usize| {
            if offset <= range.start {
                offset
            } else if offset >= range.end {
                offset - removed
            } else {
                range.start
            }
        };
        for span in &mut self.spans {
            span.start = map(span.start);
            span.end = map(span.end);
        }
        self.spans.retain(|span| !span.is_empty());
    }

    /// Resolve overlapping spans into runs covering `0..text_len`
    pub fn styled_runs(&self, text_len: usize) -> Vec<StyledRun> {
        if text_len == 0 {
            return Vec::new();
        }

        // Paint spans in addition order so later spans overwrite earlier ones
        let mut painted: Vec<Option<Color>> = vec![None; text_len];
        for span in &self.spans {
            let end = span.end.min(text_len);
            if span.start < end {
                painted[span.start..end].fill(Some(span.color));
            }
        }

        let mut runs = Vec::new();
        let mut run_start = 0;
        for offset in 1..=text_len {
            if offset == text_len || painted[offset] != painted[run_start] {
                runs.push(StyledRun {
                    start: run_start,
                    end: offset,
                    color: painted[run_start],
                });
                run_start = offset;
            }
        }
        runs
    }
}

impl<'a> IntoIterator for &'a SpanList {
    type Item = &'a ColorSpan;
    type IntoIter = std::slice::Iter<'a, ColorSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}
