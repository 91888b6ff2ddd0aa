//! Runtime - executes commands and feeds their results back as messages
//!
//! Commands run inline on the calling thread. Results are queued on a
//! channel and drained by `dispatch` until the model settles, so one user
//! message may cascade through several updates (e.g. `Open` → dialog →
//! `OpenPath` → `LoadFile` → `FileLoaded`).

use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::messages::{DocumentMsg, FileMsg, FormatMsg, Msg};
use crate::model::AppModel;
use crate::providers::{Clipboard, ColorChooser, FileDialog};
use crate::update::update;
use crate::util::{filename_for_display, read_text_file};

/// An error surfaced to the user through `Cmd::ShowError`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownError {
    pub title: String,
    pub message: String,
}

/// Drives an [`AppModel`] with a set of providers
pub struct Runtime {
    pub model: AppModel,
    clipboard: Box<dyn Clipboard>,
    file_dialog: Box<dyn FileDialog>,
    color_chooser: Box<dyn ColorChooser>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    errors: Vec<ShownError>,
    redraws: usize,
    quit_requested: bool,
}

impl Runtime {
    pub fn new(
        model: AppModel,
        clipboard: Box<dyn Clipboard>,
        file_dialog: Box<dyn FileDialog>,
        color_chooser: Box<dyn ColorChooser>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            clipboard,
            file_dialog,
            color_chooser,
            msg_tx,
            msg_rx,
            errors: Vec::new(),
            redraws: 0,
            quit_requested: false,
        }
    }

    /// Run a message and every message its commands produce
    ///
    /// Returns true if any step asked for a redraw.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let mut needs_redraw = false;
        self.send(msg);
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                    self.redraws += 1;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    /// Errors shown so far, oldest first
    pub fn errors(&self) -> &[ShownError] {
        &self.errors
    }

    /// Remove and return the shown errors
    pub fn take_errors(&mut self) -> Vec<ShownError> {
        std::mem::take(&mut self.errors)
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn clipboard_mut(&mut self) -> &mut dyn Clipboard {
        self.clipboard.as_mut()
    }

    fn send(&self, msg: Msg) {
        // The receiver lives in self, so the channel cannot be closed here
        let _ = self.msg_tx.send(msg);
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::SaveFile { path, content } => {
                let result = std::fs::write(&path, content).map_err(|e| e.to_string());
                self.send(Msg::File(FileMsg::SaveCompleted { path, result }));
            }
            Cmd::LoadFile { path } => {
                let result = read_text_file(&path)
                    .map_err(|e| e.user_message(&filename_for_display(&path)));
                self.send(Msg::File(FileMsg::FileLoaded { path, result }));
            }
            Cmd::ShowOpenFileDialog => {
                let msg = match self.file_dialog.open() {
                    Some(path) => FileMsg::OpenPath(path),
                    None => FileMsg::DialogCancelled,
                };
                self.send(Msg::File(msg));
            }
            Cmd::ShowSaveFileDialog { suggested_path } => {
                let msg = match self.file_dialog.save(suggested_path.as_deref()) {
                    Some(path) => FileMsg::SaveAsPath(path),
                    None => FileMsg::DialogCancelled,
                };
                self.send(Msg::File(msg));
            }
            Cmd::ShowColorChooser { target, initial } => {
                let color = self.color_chooser.choose(initial);
                self.send(Msg::Format(FormatMsg::ColorChosen { target, color }));
            }
            Cmd::SetClipboard(text) => {
                if let Err(e) = self.clipboard.set_text(&text) {
                    tracing::warn!("Failed to set clipboard: {}", e);
                }
            }
            Cmd::ReadClipboard => match self.clipboard.get_text() {
                Some(text) if !text.is_empty() => {
                    self.send(Msg::Document(DocumentMsg::Paste(text)));
                }
                _ => tracing::debug!("Clipboard empty, nothing to paste"),
            },
            Cmd::ShowError { title, message } => {
                tracing::error!("{}: {}", title, message);
                self.errors.push(ShownError { title, message });
            }
            Cmd::Quit => {
                self.quit_requested = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
