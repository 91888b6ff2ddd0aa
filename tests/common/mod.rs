//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tintpad::color::Color;
use tintpad::config::EditorConfig;
use tintpad::model::{AppModel, Selection, TextPos, TextRange};
use tintpad::providers::{ColorChooser, FileDialog, MemoryClipboard, NoDialogs};
use tintpad::runtime::Runtime;

pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);

/// Create a test model with given text and cursor position (line is 1-indexed)
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::with_text(text, EditorConfig::default());
    model.selection = Selection::new(TextPos::new(line, column));
    model
}

/// Create a test model with given text and a selection (anchor to head)
pub fn test_model_with_selection(
    text: &str,
    anchor_line: usize,
    anchor_col: usize,
    head_line: usize,
    head_col: usize,
) -> AppModel {
    let mut model = AppModel::with_text(text, EditorConfig::default());
    model.selection = Selection::from_anchor_head(
        TextPos::new(anchor_line, anchor_col),
        TextPos::new(head_line, head_col),
    );
    model
}

/// Get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document().text()
}

pub fn pos(line: usize, column: usize) -> TextPos {
    TextPos::new(line, column)
}

pub fn range(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> TextRange {
    TextRange::new(pos(start_line, start_col), pos(end_line, end_col))
}

/// Dialogs that answer with fixed values
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    pub open: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub color: Option<Color>,
}

impl FileDialog for ScriptedDialogs {
    fn open(&mut self) -> Option<PathBuf> {
        self.open.clone()
    }

    fn save(&mut self, _suggested: Option<&Path>) -> Option<PathBuf> {
        self.save.clone()
    }
}

impl ColorChooser for ScriptedDialogs {
    fn choose(&mut self, _initial: Option<Color>) -> Option<Color> {
        self.color
    }
}

/// Runtime over `text` with an in-memory clipboard and cancelled dialogs
pub fn test_runtime(text: &str) -> Runtime {
    Runtime::new(
        AppModel::with_text(text, EditorConfig::default()),
        Box::new(MemoryClipboard::new()),
        Box::new(NoDialogs),
        Box::new(NoDialogs),
    )
}

/// Runtime over `text` whose dialogs answer from `dialogs`
pub fn scripted_runtime(text: &str, dialogs: ScriptedDialogs) -> Runtime {
    Runtime::new(
        AppModel::with_text(text, EditorConfig::default()),
        Box::new(MemoryClipboard::new()),
        Box::new(dialogs.clone()),
        Box::new(dialogs),
    )
}
