//! Tooltip contents and placement

use crate::color::Color;

/// Gap kept between the tooltip and the screen edge
const EDGE_MARGIN: i32 = 4;
/// Distance from the cursor when the tooltip flips to the other side
const FLIP_GAP: i32 = 8;

/// Approximate text metrics used to size the tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipMetrics {
    pub char_width: i32,
    pub line_height: i32,
    pub padding: i32,
}

impl Default for TooltipMetrics {
    /// Bold 12pt monospace with 6px padding
    fn default() -> Self {
        Self {
            char_width: 10,
            line_height: 20,
            padding: 6,
        }
    }
}

impl TooltipMetrics {
    /// Size of a single-line label, padding included
    pub fn measure(&self, label: &str) -> (i32, i32) {
        let chars = label.chars().count() as i32;
        (
            chars * self.char_width + 2 * self.padding,
            self.line_height + 2 * self.padding,
        )
    }
}

/// Everything needed to draw one frame of the tooltip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub color: Color,
    pub label: String,
    /// Label foreground, chosen for contrast with `color`
    pub text_color: Color,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Tooltip {
    /// Build the tooltip for `color` sampled at the cursor position
    pub fn new(
        color: Color,
        cursor: (i32, i32),
        offset: (i32, i32),
        screen: (i32, i32),
        metrics: &TooltipMetrics,
    ) -> Self {
        let label = label_for(color);
        let (width, height) = metrics.measure(&label);
        let (x, y) = place_near(cursor, (width, height), offset, screen);
        Self {
            color,
            label,
            text_color: color.contrasting_text(),
            x,
            y,
            width,
            height,
        }
    }
}

/// Label text, e.g. `"#1e90ff  (30, 144, 255)"`
pub fn label_for(color: Color) -> String {
    format!("{}  ({}, {}, {})", color.to_hex(), color.r, color.g, color.b)
}

/// Top-left corner for a tooltip of `size` near the cursor
///
/// Each axis flips to the other side of the cursor when the tooltip would
/// come within a few pixels of the screen edge.
pub fn place_near(
    cursor: (i32, i32),
    size: (i32, i32),
    offset: (i32, i32),
    screen: (i32, i32),
) -> (i32, i32) {
    let (x, y) = cursor;
    let (w, h) = size;
    let (sw, sh) = screen;

    let mut nx = x + offset.0;
    let mut ny = y + offset.1;
    if nx + w > sw - EDGE_MARGIN {
        nx = x - w - FLIP_GAP;
    }
    if ny + h > sh - EDGE_MARGIN {
        ny = y - h - FLIP_GAP;
    }
    (nx, ny)
}
