//! Command-line interface
//!
//! Each subcommand loads a document through the runtime, dispatches the
//! same messages the editor would, and saves the result when it changed.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::color::Color;
use crate::config::EditorConfig;
use crate::messages::{DocumentMsg, FileMsg, FormatMsg, Msg};
use crate::model::{AppModel, Selection, TextPos, TextRange};
use crate::providers::{Clipboard, MemoryClipboard, NoDialogs, SystemClipboard};
use crate::runtime::Runtime;

/// Notepad with colored text, stored as `.gtxt`
#[derive(Parser, Debug)]
#[command(name = "tintpad", version, about = "Notepad with colored text")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print a document with its colors (24-bit ANSI)
    Show {
        file: PathBuf,
        /// Print text only, without color escapes
        #[arg(long)]
        plain: bool,
    },
    /// Print the background and color spans of a document
    Info { file: PathBuf },
    /// Re-save a document in the format given by the output extension
    Convert { input: PathBuf, output: PathBuf },
    /// Color the text between two "line.column" positions
    Color {
        file: PathBuf,
        start: TextPos,
        end: TextPos,
        color: Color,
        /// Write here instead of overwriting the input
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Remove coloring between two "line.column" positions
    Clear {
        file: PathBuf,
        start: TextPos,
        end: TextPos,
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Copy the text between two "line.column" positions to the system clipboard
    Copy {
        file: PathBuf,
        start: TextPos,
        end: TextPos,
    },
    /// Set the document background
    Background {
        file: PathBuf,
        color: Color,
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Run a parsed command, writing any report to `out`
pub fn run(command: Command, config: EditorConfig, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Show { file, plain } => {
            let rt = open(&file, config)?;
            write_colored(&rt.model, plain, out)?;
        }

        Command::Info { file } => {
            let rt = open(&file, config)?;
            write_info(&rt.model, out)?;
        }

        Command::Convert { input, output } => {
            let mut rt = open(&input, config)?;
            save(&mut rt, &output)?;
        }

        Command::Color {
            file,
            start,
            end,
            color,
            output,
        } => {
            let mut rt = open(&file, config)?;
            let range = checked_range(&rt.model, start, end)?;
            rt.dispatch(Msg::Format(FormatMsg::ApplyColorToRange { range, color }));
            save(&mut rt, output.as_deref().unwrap_or(&file))?;
        }

        Command::Clear {
            file,
            start,
            end,
            output,
        } => {
            let mut rt = open(&file, config)?;
            let range = checked_range(&rt.model, start, end)?;
            rt.dispatch(Msg::Format(FormatMsg::ClearColorInRange(range)));
            save(&mut rt, output.as_deref().unwrap_or(&file))?;
        }

        Command::Copy { file, start, end } => {
            let mut rt = open_with_clipboard(&file, config, Box::new(SystemClipboard))?;
            let text = copy_range(&mut rt, start, end)?;
            writeln!(out, "Copied {} chars", text.chars().count())?;
        }

        Command::Background {
            file,
            color,
            output,
        } => {
            let mut rt = open(&file, config)?;
            rt.dispatch(Msg::Format(FormatMsg::SetBackground(color)));
            save(&mut rt, output.as_deref().unwrap_or(&file))?;
        }
    }
    Ok(())
}

/// A headless runtime with `path` loaded
pub fn open(path: &Path, config: EditorConfig) -> Result<Runtime> {
    open_with_clipboard(path, config, Box::new(MemoryClipboard::new()))
}

/// Like [`open`], with copy and paste going through `clipboard`
pub fn open_with_clipboard(
    path: &Path,
    config: EditorConfig,
    clipboard: Box<dyn Clipboard>,
) -> Result<Runtime> {
    let mut rt = Runtime::new(
        AppModel::new(config),
        clipboard,
        Box::new(NoDialogs),
        Box::new(NoDialogs),
    );
    rt.dispatch(Msg::File(FileMsg::OpenPath(path.to_path_buf())));
    if let Some(error) = rt.take_errors().pop() {
        bail!("{}", error.message);
    }
    Ok(rt)
}

/// Save the runtime's document to `path`
pub fn save(rt: &mut Runtime, path: &Path) -> Result<()> {
    rt.dispatch(Msg::File(FileMsg::SaveAsPath(path.to_path_buf())));
    if let Some(error) = rt.take_errors().pop() {
        bail!("{}", error.message);
    }
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Select `start..end` and copy it, returning the copied text
pub fn copy_range(rt: &mut Runtime, start: TextPos, end: TextPos) -> Result<String> {
    let range = checked_range(&rt.model, start, end)?;
    let selection = Selection::from_anchor_head(range.start, range.end);
    rt.dispatch(Msg::Document(DocumentMsg::SetSelection(selection)));
    rt.dispatch(Msg::Document(DocumentMsg::Copy));

    let text = rt.model.selected_text();
    if rt.clipboard_mut().get_text().as_deref() != Some(text.as_str()) {
        bail!("clipboard is not available");
    }
    Ok(text)
}

fn checked_range(model: &AppModel, start: TextPos, end: TextPos) -> Result<TextRange> {
    let range = TextRange::new(start, end);
    let offsets = model
        .document()
        .range_to_offsets(range)
        .with_context(|| format!("range {} is outside the document", range))?;
    if offsets.is_empty() {
        bail!("range {} is empty", range);
    }
    Ok(range)
}

/// Write the text with an ANSI color change at every styled run
pub fn write_colored(model: &AppModel, plain: bool, out: &mut dyn Write) -> Result<()> {
    let doc = model.document();
    let text = doc.text();
    if plain {
        out.write_all(text.as_bytes())?;
        return Ok(());
    }

    let chars: Vec<char> = text.chars().collect();
    out.write_all(doc.background.ansi_bg().as_bytes())?;
    for run in doc.styled_runs() {
        let color = run.color.unwrap_or(doc.default_foreground);
        let piece: String = chars[run.start..run.end].iter().collect();
        write!(out, "{}{}", color.ansi_fg(), piece)?;
    }
    out.write_all(b"\x1b[0m")?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write a summary: background, size and the span list in shadowing order
pub fn write_info(model: &AppModel, out: &mut dyn Write) -> Result<()> {
    let doc = model.document();
    writeln!(out, "File:       {}", doc.display_name())?;
    writeln!(out, "Background: {}", doc.background)?;
    writeln!(
        out,
        "Text:       {} chars, {} lines",
        doc.len_chars(),
        doc.line_count()
    )?;
    let spans = doc.spans();
    writeln!(out, "Spans:      {}", spans.len())?;
    for (range, color) in spans {
        writeln!(out, "  {}  {}", range, color)?;
    }
    Ok(())
}
