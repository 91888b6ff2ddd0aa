//! File message handlers (new, open, save and their completions)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::format::{self, FileFormat};
use crate::messages::FileMsg;
use crate::model::{AppModel, Selection};

/// Handle file messages
pub fn update_file(model: &mut AppModel, msg: FileMsg) -> Option<Cmd> {
    match msg {
        FileMsg::New => {
            model.document = AppModel::blank_document(&model.config);
            model.selection = Selection::default();
            model.ui.last_error = None;
            model.ui.set_status("New document");
            Some(Cmd::Redraw)
        }

        FileMsg::Open => Some(Cmd::ShowOpenFileDialog),

        FileMsg::OpenPath(path) => {
            model.ui.is_loading = true;
            model.ui.set_status("Loading...");
            Some(Cmd::LoadFile { path })
        }

        FileMsg::Save => match model.document().file_path.clone() {
            Some(path) => save_to(model, path),
            None => update_file(model, FileMsg::SaveAs),
        },

        FileMsg::SaveAs => Some(Cmd::ShowSaveFileDialog {
            suggested_path: model.document().file_path.clone(),
        }),

        FileMsg::SaveAsPath(path) => save_to(model, path),

        FileMsg::DialogCancelled => {
            model.ui.set_status("Cancelled");
            None
        }

        FileMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            let content = match result {
                Ok(content) => content,
                Err(e) => return Some(report_error(model, "Open failed", &path, e)),
            };

            let format = FileFormat::from_path(&path);
            let default_background = model.config.default_background;
            if let Err(e) =
                format::decode_into(model.document_mut(), &content, format, default_background)
            {
                return Some(report_error(model, "Open failed", &path, e.to_string()));
            }

            let doc = model.document_mut();
            doc.file_path = Some(path.clone());
            doc.is_modified = false;
            model.selection = Selection::default();
            model.ui.last_error = None;
            model.ui.set_status(format!("Loaded: {}", path.display()));
            tracing::info!(
                "Loaded {} ({} chars, {} spans)",
                path.display(),
                model.document().len_chars(),
                model.document().span_count()
            );
            Some(Cmd::Redraw)
        }

        FileMsg::SaveCompleted { path, result } => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    let doc = model.document_mut();
                    doc.file_path = Some(path.clone());
                    doc.is_modified = false;
                    model.ui.last_error = None;
                    model.ui.set_status(format!("Saved: {}", path.display()));
                    tracing::info!("Saved {}", path.display());
                    Some(Cmd::Redraw)
                }
                Err(e) => Some(report_error(model, "Save failed", &path, e)),
            }
        }
    }
}

/// Encode the document for `path` and ask the runtime to write it
///
/// The document's path is only updated once the write succeeds.
fn save_to(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    let format = FileFormat::from_path(&path);
    if !format.keeps_colors() && model.document().span_count() > 0 {
        tracing::info!(
            "Saving {} as plain text, color spans are not written",
            path.display()
        );
    }

    match format::encode(model.document(), format) {
        Ok(content) => {
            model.ui.is_saving = true;
            model.ui.set_status("Saving...");
            Some(Cmd::SaveFile { path, content })
        }
        Err(e) => Some(report_error(model, "Save failed", &path, e.to_string())),
    }
}

fn report_error(model: &mut AppModel, title: &str, path: &std::path::Path, error: String) -> Cmd {
    let message = format!("{}: {}", path.display(), error);
    tracing::warn!("{}: {}", title, message);
    model.ui.set_error(message.clone());
    Cmd::batch(vec![
        Cmd::ShowError {
            title: title.to_string(),
            message,
        },
        Cmd::Redraw,
    ])
}
