//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
mod file;
mod find;
mod format;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::DocumentSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::update_document;
pub use file::update_file;
pub use find::update_find;
pub use format::update_format;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Format(m) => format::update_format(model, m),
        Msg::File(m) => file::update_file(model, m),
        Msg::Find(m) => find::update_find(model, m),
        Msg::Quit => Some(Cmd::Quit),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after document state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = DocumentSnapshot::capture(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = DocumentSnapshot::capture(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "document", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Long payloads (pasted text, loaded file content) are shortened.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    let name = match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Format(m) => format!("Format::{:?}", m),
        Msg::File(m) => format!("File::{:?}", m),
        Msg::Find(m) => format!("Find::{:?}", m),
        Msg::Quit => "Quit".to_string(),
    };
    if name.chars().count() > 120 {
        let short: String = name.chars().take(117).collect();
        format!("{}...", short)
    } else {
        name
    }
}
