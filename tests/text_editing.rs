//! Text editing tests - insert, delete, undo/redo, clipboard

mod common;

use common::{buffer_to_string, pos, test_model, test_model_with_selection, test_runtime};
use tintpad::commands::Cmd;
use tintpad::messages::{DocumentMsg, Msg};
use tintpad::update::update;

// ========================================================================
// Insert tests
// ========================================================================

#[test]
fn test_insert_text_at_start() {
    let mut model = test_model("hello", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::InsertText("X".into())));

    assert_eq!(buffer_to_string(&model), "Xhello");
    assert_eq!(model.cursor(), pos(1, 1));
    assert!(model.document().is_modified);
}

#[test]
fn test_insert_multiline_text_moves_cursor_to_last_line() {
    let mut model = test_model("ab", 1, 1);
    update(
        &mut model,
        Msg::Document(DocumentMsg::InsertText("1\n22\n333".into())),
    );

    assert_eq!(buffer_to_string(&model), "a1\n22\n333b");
    assert_eq!(model.cursor(), pos(3, 3));
}

#[test]
fn test_insert_replaces_selection() {
    let mut model = test_model_with_selection("hello world", 1, 6, 1, 11);
    update(&mut model, Msg::Document(DocumentMsg::InsertText("there".into())));

    assert_eq!(buffer_to_string(&model), "hello there");
    assert_eq!(model.cursor(), pos(1, 11));
    assert!(model.selection.is_empty());
}

#[test]
fn test_insert_empty_text_is_noop() {
    let mut model = test_model("hello", 1, 2);
    let cmd = update(&mut model, Msg::Document(DocumentMsg::InsertText(String::new())));

    assert_eq!(cmd, None);
    assert!(!model.document().is_modified);
    assert!(model.document().undo_stack.is_empty());
}

// ========================================================================
// Delete tests
// ========================================================================

#[test]
fn test_delete_backward() {
    let mut model = test_model("hello", 1, 5);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "hell");
    assert_eq!(model.cursor(), pos(1, 4));
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut model = test_model("ab\ncd", 2, 0);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "abcd");
    assert_eq!(model.cursor(), pos(1, 2));
}

#[test]
fn test_delete_backward_at_start_is_noop() {
    let mut model = test_model("hello", 1, 0);
    let cmd = update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(cmd, None);
    assert_eq!(buffer_to_string(&model), "hello");
}

#[test]
fn test_delete_forward() {
    let mut model = test_model("hello", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert_eq!(buffer_to_string(&model), "ello");
    assert_eq!(model.cursor(), pos(1, 0));
}

#[test]
fn test_delete_forward_at_end_is_noop() {
    let mut model = test_model("hello", 1, 5);
    assert_eq!(
        update(&mut model, Msg::Document(DocumentMsg::DeleteForward)),
        None
    );
}

#[test]
fn test_delete_selection_backwards_direction() {
    // Head before anchor
    let mut model = test_model_with_selection("hello world", 1, 11, 1, 5);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "hello");
    assert_eq!(model.cursor(), pos(1, 5));
}

// ========================================================================
// Undo / redo
// ========================================================================

#[test]
fn test_undo_redo_insert() {
    let mut model = test_model("hello", 1, 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertText(" world".into())));

    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(buffer_to_string(&model), "hello");
    assert_eq!(model.cursor(), pos(1, 5));

    update(&mut model, Msg::Document(DocumentMsg::Redo));
    assert_eq!(buffer_to_string(&model), "hello world");
    assert_eq!(model.cursor(), pos(1, 11));
}

#[test]
fn test_undo_replacement_restores_selection() {
    let mut model = test_model_with_selection("hello world", 1, 0, 1, 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertText("howdy".into())));
    assert_eq!(buffer_to_string(&model), "howdy world");

    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(buffer_to_string(&model), "hello world");
    assert_eq!(model.selection.anchor, pos(1, 0));
    assert_eq!(model.selection.head, pos(1, 5));
}

#[test]
fn test_undo_with_empty_history_is_noop() {
    let mut model = test_model("hello", 1, 0);
    assert_eq!(update(&mut model, Msg::Document(DocumentMsg::Undo)), None);
    assert_eq!(update(&mut model, Msg::Document(DocumentMsg::Redo)), None);
    assert_eq!(buffer_to_string(&model), "hello");
    assert!(!model.document().is_modified);
}

#[test]
fn test_new_edit_clears_redo() {
    let mut model = test_model("", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::InsertText("a".into())));
    update(&mut model, Msg::Document(DocumentMsg::Undo));
    update(&mut model, Msg::Document(DocumentMsg::InsertText("b".into())));

    assert_eq!(update(&mut model, Msg::Document(DocumentMsg::Redo)), None);
    assert_eq!(buffer_to_string(&model), "b");
}

// ========================================================================
// Selection and clipboard
// ========================================================================

#[test]
fn test_select_all_then_copy() {
    let mut model = test_model("one\ntwo", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::SelectAll));
    let cmd = update(&mut model, Msg::Document(DocumentMsg::Copy));

    assert_eq!(cmd, Some(Cmd::SetClipboard("one\ntwo".into())));
    assert_eq!(buffer_to_string(&model), "one\ntwo");
}

#[test]
fn test_copy_without_selection_is_noop() {
    let mut model = test_model("hello", 1, 2);
    assert_eq!(update(&mut model, Msg::Document(DocumentMsg::Copy)), None);
}

#[test]
fn test_set_selection_is_clamped() {
    let mut model = test_model("ab\ncd", 1, 0);
    update(
        &mut model,
        Msg::Document(DocumentMsg::SetSelection(
            tintpad::model::Selection::from_anchor_head(pos(1, 1), pos(9, 9)),
        )),
    );

    assert_eq!(model.selection.head, pos(2, 2));
    assert_eq!(model.selected_text(), "b\ncd");
}

#[test]
fn test_cut_and_paste_roundtrip_through_runtime() {
    let mut rt = test_runtime("alpha beta");
    rt.model.select_offsets(0..6);
    rt.dispatch(Msg::Document(DocumentMsg::Cut));
    assert_eq!(rt.model.document().text(), "beta");

    rt.model.set_cursor_offset(4);
    rt.dispatch(Msg::Document(DocumentMsg::InsertText(" ".into())));
    rt.dispatch(Msg::Document(DocumentMsg::RequestPaste));
    assert_eq!(rt.model.document().text(), "beta alpha ");
}

#[test]
fn test_paste_from_empty_clipboard_is_noop() {
    let mut rt = test_runtime("abc");
    rt.dispatch(Msg::Document(DocumentMsg::RequestPaste));
    assert_eq!(rt.model.document().text(), "abc");
    assert!(!rt.model.document().is_modified);
}
