//! File command flows: new, open, save, save as, and their failures

mod common;

use std::fs;

use common::{range, scripted_runtime, test_model, test_runtime, ScriptedDialogs, RED};
use tintpad::commands::Cmd;
use tintpad::messages::{DocumentMsg, FileMsg, FormatMsg, Msg};
use tintpad::update::update;

#[test]
fn test_title_tracks_name_and_modified_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.gtxt");

    let mut rt = test_runtime("");
    assert_eq!(rt.model.title(), "Untitled - Tintpad");

    rt.dispatch(Msg::Document(DocumentMsg::InsertText("hi".into())));
    assert_eq!(rt.model.title(), "*Untitled - Tintpad");

    rt.dispatch(Msg::File(FileMsg::SaveAsPath(path)));
    assert_eq!(rt.model.title(), "notes.gtxt - Tintpad");
}

#[test]
fn test_save_without_path_asks_for_one() {
    let mut model = test_model("hello", 1, 0);
    let cmd = update(&mut model, Msg::File(FileMsg::Save));
    assert_eq!(
        cmd,
        Some(Cmd::ShowSaveFileDialog {
            suggested_path: None
        })
    );
}

#[test]
fn test_save_uses_dialog_path_then_existing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("picked.gtxt");
    let dialogs = ScriptedDialogs {
        save: Some(path.clone()),
        ..Default::default()
    };

    let mut rt = scripted_runtime("first", dialogs);
    rt.dispatch(Msg::File(FileMsg::Save));
    assert_eq!(rt.model.document().file_path.as_deref(), Some(path.as_path()));
    assert!(!rt.model.document().is_modified);

    rt.model.set_cursor_offset(5);
    rt.dispatch(Msg::Document(DocumentMsg::InsertText(" second".into())));
    rt.dispatch(Msg::File(FileMsg::Save));

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("first second"));
    assert!(!rt.model.document().is_modified);
}

#[test]
fn test_save_failure_keeps_path_and_modified() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.gtxt");
    let bad = dir.path().join("missing-dir").join("bad.gtxt");

    let mut rt = test_runtime("text");
    rt.dispatch(Msg::File(FileMsg::SaveAsPath(good.clone())));
    rt.dispatch(Msg::Format(FormatMsg::ApplyColorToRange {
        range: range(1, 0, 1, 2),
        color: RED,
    }));
    assert!(rt.model.document().is_modified);

    rt.dispatch(Msg::File(FileMsg::SaveAsPath(bad)));

    let doc = rt.model.document();
    assert_eq!(doc.file_path.as_deref(), Some(good.as_path()));
    assert!(doc.is_modified);
    assert!(!rt.model.ui.is_saving);
    let errors = rt.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].title, "Save failed");
}

#[test]
fn test_open_through_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.gtxt");
    fs::write(
        &path,
        r##"{"text": "from disk", "background": "#ffffff", "colors": []}"##,
    )
    .unwrap();
    let dialogs = ScriptedDialogs {
        open: Some(path.clone()),
        ..Default::default()
    };

    let mut rt = scripted_runtime("scratch", dialogs);
    rt.dispatch(Msg::Document(DocumentMsg::InsertText("x".into())));
    rt.dispatch(Msg::File(FileMsg::Open));

    let doc = rt.model.document();
    assert_eq!(doc.text(), "from disk");
    assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
    assert!(doc.undo_stack.is_empty());
    assert!(!rt.model.ui.is_loading);
    assert_eq!(rt.model.cursor(), tintpad::model::TextPos::START);
}

#[test]
fn test_open_rejects_directory_and_binary() {
    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("blob.txt");
    fs::write(&binary, b"abc\x00def").unwrap();

    let mut rt = test_runtime("unchanged");
    rt.dispatch(Msg::File(FileMsg::OpenPath(dir.path().to_path_buf())));
    rt.dispatch(Msg::File(FileMsg::OpenPath(binary)));

    assert_eq!(rt.model.document().text(), "unchanged");
    let errors = rt.take_errors();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message.contains("Cannot open directory"));
    assert!(errors[1].message.contains("Cannot open binary file: blob.txt"));
}

#[test]
fn test_new_resets_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.gtxt");

    let mut rt = test_runtime("old text");
    rt.dispatch(Msg::Format(FormatMsg::ApplyColorToRange {
        range: range(1, 0, 1, 3),
        color: RED,
    }));
    rt.dispatch(Msg::File(FileMsg::SaveAsPath(path)));
    rt.dispatch(Msg::File(FileMsg::New));

    let doc = rt.model.document();
    assert_eq!(doc.text(), "");
    assert_eq!(doc.span_count(), 0);
    assert_eq!(doc.file_path, None);
    assert!(!doc.is_modified);
    assert_eq!(doc.background, rt.model.config.default_background);
}
