//! UI state - status line, errors, find/replace and view options

/// State for the find/replace bar
#[derive(Debug, Clone, Default)]
pub struct FindReplaceState {
    /// Search query
    pub query: String,
    /// Replacement text
    pub replacement: String,
    /// Case-sensitive search
    pub case_sensitive: bool,
}

/// Font selection (rendering is left to the host toolkit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSettings {
    pub family: String,
    pub size: u16,
}

/// UI state that is not part of the document
#[derive(Debug, Clone)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    /// Last error surfaced to the user (file open/save failures)
    pub last_error: Option<String>,
    /// Find/replace bar state
    pub find: FindReplaceState,
    /// Whether long lines wrap at the window edge
    pub word_wrap: bool,
    /// Current editor font
    pub font: FontSettings,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
}

impl UiState {
    pub fn new(font: FontSettings, word_wrap: bool) -> Self {
        Self {
            status_message: String::new(),
            last_error: None,
            find: FindReplaceState::default(),
            word_wrap,
            font,
            is_loading: false,
            is_saving: false,
        }
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Record an error and mirror it in the status bar
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status_message = format!("Error: {}", message);
        self.last_error = Some(message);
    }
}
