//! Tintpad - a notepad for colored text
//!
//! Documents are plain text plus an ordered list of color spans, stored as
//! `.gtxt` JSON. State changes follow the Elm Architecture: messages go
//! through `update::update`, which returns commands for the runtime to run.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod format;
pub mod messages;
pub mod model;
pub mod picker;
pub mod providers;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use color::Color;
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::{AppModel, Document, TextPos, TextRange};
pub use runtime::Runtime;
