//! Platform providers for side effects the update functions request
//!
//! The runtime and the picker talk to dialogs and the clipboard through
//! these traits, so headless runs and tests can swap in their own.

use std::path::{Path, PathBuf};

use crate::color::Color;

/// Text clipboard access
pub trait Clipboard {
    /// Current clipboard text, if any
    fn get_text(&mut self) -> Option<String>;
    /// Replace the clipboard contents
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// Modal open/save file dialogs
pub trait FileDialog {
    /// Ask for a file to open; `None` when cancelled
    fn open(&mut self) -> Option<PathBuf>;
    /// Ask for a save destination; `None` when cancelled
    fn save(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;
}

/// Modal color chooser
pub trait ColorChooser {
    /// Ask for a color, starting from `initial`; `None` when cancelled
    fn choose(&mut self, initial: Option<Color>) -> Option<Color>;
}

/// System clipboard backed by `arboard`
///
/// A clipboard handle is opened per call; failures are logged and treated
/// as an empty clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                return None;
            }
        };
        clipboard.get_text().ok()
    }

    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}

/// In-process clipboard, used when no system clipboard is wanted
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Dialog provider for non-interactive runs: every dialog is cancelled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDialogs;

impl FileDialog for NoDialogs {
    fn open(&mut self) -> Option<PathBuf> {
        tracing::debug!("Open dialog requested in headless mode");
        None
    }

    fn save(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
        tracing::debug!(?suggested, "Save dialog requested in headless mode");
        None
    }
}

impl ColorChooser for NoDialogs {
    fn choose(&mut self, initial: Option<Color>) -> Option<Color> {
        tracing::debug!(?initial, "Color chooser requested in headless mode");
        None
    }
}
