//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::color::Color;
use crate::model::{Selection, TextRange};

/// Document-specific messages (text editing, selection, undo/redo)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert text at the cursor, replacing any selection
    InsertText(String),
    /// Delete selection, or the character before the cursor (Backspace)
    DeleteBackward,
    /// Delete selection, or the character after the cursor (Delete)
    DeleteForward,
    /// Set the selection (mouse drag, shift+arrows)
    SetSelection(Selection),
    /// Select all text (Ctrl+A)
    SelectAll,
    /// Undo last edit (Ctrl+Z)
    Undo,
    /// Redo last undone edit (Ctrl+Y)
    Redo,
    /// Copy selection to the clipboard (Ctrl+C)
    Copy,
    /// Copy selection to the clipboard and delete it (Ctrl+X)
    Cut,
    /// Ask the runtime for clipboard content (Ctrl+V)
    RequestPaste,
    /// Insert clipboard content delivered by the runtime
    Paste(String),
}

/// Which color a color chooser result is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    /// Foreground color for the current selection
    Text,
    /// Document background
    Background,
}

/// Color and view formatting messages
#[derive(Debug, Clone)]
pub enum FormatMsg {
    /// Color the current selection
    ApplyColor(Color),
    /// Color an explicit range
    ApplyColorToRange { range: TextRange, color: Color },
    /// Remove color from the current selection
    ClearColor,
    /// Remove color from an explicit range
    ClearColorInRange(TextRange),
    /// Replace the background color
    SetBackground(Color),
    /// Open the color chooser for the selection's text color
    ChooseTextColor,
    /// Open the color chooser for the background
    ChooseBackground,
    /// Result of the color chooser (`None` if cancelled)
    ColorChosen {
        target: ColorTarget,
        color: Option<Color>,
    },
    /// Toggle word wrap
    ToggleWordWrap,
    /// Change the editor font
    SetFont { family: String, size: u16 },
}

/// File messages (new/open/save and their results)
#[derive(Debug, Clone)]
pub enum FileMsg {
    /// Start a new empty document
    New,
    /// Show the open dialog
    Open,
    /// Open a specific path
    OpenPath(PathBuf),
    /// Save to the current path (falls back to Save As)
    Save,
    /// Show the save dialog
    SaveAs,
    /// Save to a specific path
    SaveAsPath(PathBuf),
    /// A file dialog was dismissed without choosing a path
    DialogCancelled,
    /// File content was read (or failed to be read)
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// A save finished (or failed)
    SaveCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
}

/// Find/replace messages
#[derive(Debug, Clone)]
pub enum FindMsg {
    /// Set the search query
    SetQuery(String),
    /// Set the replacement text
    SetReplacement(String),
    /// Toggle case sensitivity
    ToggleCaseSensitive,
    /// Select the next match after the cursor (wraps)
    FindNext,
    /// Select the previous match before the cursor (wraps)
    FindPrevious,
    /// Replace the selected match and move to the next one
    ReplaceNext,
    /// Replace every match in the document
    ReplaceAll,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Text editing messages
    Document(DocumentMsg),
    /// Color and view formatting messages
    Format(FormatMsg),
    /// File messages
    File(FileMsg),
    /// Find/replace messages
    Find(FindMsg),
    /// Exit the application
    Quit,
}
