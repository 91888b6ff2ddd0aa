//! Document update functions for text editing and undo/redo

use std::ops::Range;

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{AppModel, Document, EditOperation, Selection, SpanList, SpanSnapshot};

/// Handle document messages (text editing, undo/redo)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertText(text) | DocumentMsg::Paste(text) => {
            if text.is_empty() && model.selection.is_empty() {
                return None;
            }
            let range = model.selection_offsets();
            replace_range(model, range, &text);
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteBackward => {
            let range = model.selection_offsets();
            let range = if range.is_empty() {
                if range.start == 0 {
                    return None;
                }
                range.start - 1..range.start
            } else {
                range
            };
            replace_range(model, range, "");
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteForward => {
            let range = model.selection_offsets();
            let range = if range.is_empty() {
                if range.start >= model.document().len_chars() {
                    return None;
                }
                range.start..range.start + 1
            } else {
                range
            };
            replace_range(model, range, "");
            Some(Cmd::Redraw)
        }

        DocumentMsg::SetSelection(selection) => {
            let doc = model.document();
            model.selection = Selection::from_anchor_head(
                doc.clamp_pos(selection.anchor),
                doc.clamp_pos(selection.head),
            );
            Some(Cmd::Redraw)
        }

        DocumentMsg::SelectAll => {
            let range = model.document().full_range();
            model.selection = Selection::from_anchor_head(range.start, range.end);
            Some(Cmd::Redraw)
        }

        DocumentMsg::Undo => {
            let edit = model.document_mut().undo_stack.pop()?;
            apply_undo_operation(model.document_mut(), &edit);
            model.selection = edit_selection_before(&edit);
            model.document_mut().redo_stack.push(edit);
            model.document_mut().mark_modified();
            Some(Cmd::Redraw)
        }

        DocumentMsg::Redo => {
            let edit = model.document_mut().redo_stack.pop()?;
            apply_redo_operation(model.document_mut(), &edit);
            model.selection = edit_selection_after(&edit);
            model.document_mut().undo_stack.push(edit);
            model.document_mut().mark_modified();
            Some(Cmd::Redraw)
        }

        DocumentMsg::Copy => {
            let text = model.selected_text();
            if text.is_empty() {
                return None;
            }
            Some(Cmd::SetClipboard(text))
        }

        DocumentMsg::Cut => {
            let range = model.selection_offsets();
            if range.is_empty() {
                return None;
            }
            let text = model.document().slice_to_string(range.clone());
            replace_range(model, range, "");
            Some(Cmd::batch(vec![Cmd::SetClipboard(text), Cmd::Redraw]))
        }

        DocumentMsg::RequestPaste => Some(Cmd::ReadClipboard),
    }
}

/// Replace a character range with `text`, recording one undoable edit
///
/// The cursor ends up after the inserted text.
pub(crate) fn replace_range(model: &mut AppModel, range: Range<usize>, text: &str) {
    let selection_before = model.selection;
    let position = range.start;

    let (deleted_text, spans) = model.document_mut().replace_range(range, text);
    model.set_cursor_offset(position + text.chars().count());
    let selection_after = model.selection;

    let op = match (deleted_text.is_empty(), text.is_empty()) {
        (true, _) => EditOperation::Insert {
            position,
            text: text.to_string(),
            selection_before,
            selection_after,
        },
        (false, true) => EditOperation::Delete {
            position,
            text: deleted_text,
            spans,
            selection_before,
            selection_after,
        },
        (false, false) => EditOperation::Replace {
            position,
            deleted_text,
            inserted_text: text.to_string(),
            spans,
            selection_before,
            selection_after,
        },
    };
    model.document_mut().push_edit(op);
}

fn edit_selection_before(edit: &EditOperation) -> Selection {
    match edit {
        EditOperation::Insert {
            selection_before, ..
        }
        | EditOperation::Delete {
            selection_before, ..
        }
        | EditOperation::Replace {
            selection_before, ..
        }
        | EditOperation::Batch {
            selection_before, ..
        } => *selection_before,
    }
}

fn edit_selection_after(edit: &EditOperation) -> Selection {
    match edit {
        EditOperation::Insert {
            selection_after, ..
        }
        | EditOperation::Delete {
            selection_after, ..
        }
        | EditOperation::Replace {
            selection_after, ..
        }
        | EditOperation::Batch {
            selection_after, ..
        } => *selection_after,
    }
}

/// Run a text change, then put back `to` if the spans were `from` before it
fn replay_with_spans(
    doc: &mut Document,
    spans: Option<(&SpanList, &SpanList)>,
    change: impl FnOnce(&mut Document),
) {
    let restore = spans
        .filter(|(from, _)| doc.span_list() == *from)
        .map(|(_, to)| to.clone());
    change(doc);
    if let Some(to) = restore {
        doc.set_span_list(to);
    }
}

fn undo_spans(spans: &Option<SpanSnapshot>) -> Option<(&SpanList, &SpanList)> {
    spans.as_ref().map(|s| (&s.after, &s.before))
}

fn redo_spans(spans: &Option<SpanSnapshot>) -> Option<(&SpanList, &SpanList)> {
    spans.as_ref().map(|s| (&s.before, &s.after))
}

fn apply_undo_operation(doc: &mut Document, edit: &EditOperation) {
    match edit {
        EditOperation::Insert { position, text, .. } => {
            doc.remove_range(*position..*position + text.chars().count());
        }
        EditOperation::Delete {
            position,
            text,
            spans,
            ..
        } => {
            replay_with_spans(doc, undo_spans(spans), |doc| {
                doc.insert_at(*position, text);
            });
        }
        EditOperation::Replace {
            position,
            deleted_text,
            inserted_text,
            spans,
            ..
        } => {
            replay_with_spans(doc, undo_spans(spans), |doc| {
                doc.remove_range(*position..*position + inserted_text.chars().count());
                doc.insert_at(*position, deleted_text);
            });
        }
        EditOperation::Batch { operations, .. } => {
            for op in operations.iter().rev() {
                apply_undo_operation(doc, op);
            }
        }
    }
}

fn apply_redo_operation(doc: &mut Document, edit: &EditOperation) {
    match edit {
        EditOperation::Insert { position, text, .. } => {
            doc.insert_at(*position, text);
        }
        EditOperation::Delete {
            position,
            text,
            spans,
            ..
        } => {
            replay_with_spans(doc, redo_spans(spans), |doc| {
                doc.remove_range(*position..*position + text.chars().count());
            });
        }
        EditOperation::Replace {
            position,
            deleted_text,
            inserted_text,
            spans,
            ..
        } => {
            replay_with_spans(doc, redo_spans(spans), |doc| {
                doc.remove_range(*position..*position + deleted_text.chars().count());
                doc.insert_at(*position, inserted_text);
            });
        }
        EditOperation::Batch { operations, .. } => {
            for op in operations {
                apply_redo_operation(doc, op);
            }
        }
    }
}
