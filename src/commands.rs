//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds any results back as messages.

use std::path::PathBuf;

use crate::color::Color;
use crate::messages::ColorTarget;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// State changed, the view should re-render
    Redraw,
    /// Save file content to disk
    /// Sends `FileMsg::SaveCompleted` when done
    SaveFile { path: PathBuf, content: String },
    /// Load file content from disk
    /// Sends `FileMsg::FileLoaded` when done
    LoadFile { path: PathBuf },
    /// Show native open file dialog
    ShowOpenFileDialog,
    /// Show native save file dialog
    ShowSaveFileDialog {
        /// Suggested file path (for pre-filling name/directory)
        suggested_path: Option<PathBuf>,
    },
    /// Show a color chooser
    /// Sends `FormatMsg::ColorChosen` when done
    ShowColorChooser {
        target: ColorTarget,
        initial: Option<Color>,
    },
    /// Put text on the system clipboard
    SetClipboard(String),
    /// Read the system clipboard
    /// Sends `DocumentMsg::Paste` when text is available
    ReadClipboard,
    /// Show an error dialog
    ShowError { title: String, message: String },
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Whether this command (or any command in a batch) ends the application
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_quit()),
            _ => false,
        }
    }
}
