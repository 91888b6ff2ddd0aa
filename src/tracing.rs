//! Tracing setup and debug diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! document and span state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,document=debug` - scoped filtering
//! - `RUST_LOG=tintpad::format=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tintpad/logs/tintpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::color::Color;
use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
/// Console logs go to stderr so CLI output on stdout stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tintpad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of document state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub len_chars: usize,
    pub span_count: usize,
    pub background: Color,
    pub is_modified: bool,
    pub selection: (String, String),
}

impl DocumentSnapshot {
    pub fn capture(model: &AppModel) -> Self {
        let doc = model.document();
        Self {
            len_chars: doc.len_chars(),
            span_count: doc.span_count(),
            background: doc.background,
            is_modified: doc.is_modified,
            selection: (
                model.selection.anchor.to_string(),
                model.selection.head.to_string(),
            ),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DocumentSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.len_chars != other.len_chars {
            changes.push(format!("chars: {} → {}", self.len_chars, other.len_chars));
        }
        if self.span_count != other.span_count {
            changes.push(format!("spans: {} → {}", self.span_count, other.span_count));
        }
        if self.background != other.background {
            changes.push(format!(
                "background: {} → {}",
                self.background, other.background
            ));
        }
        if self.is_modified != other.is_modified {
            let status = if other.is_modified { "dirty" } else { "clean" };
            changes.push(format!("document {}", status));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {}..{} → {}..{}",
                self.selection.0, self.selection.1, other.selection.0, other.selection.1
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
