//! Find/replace update functions

use crate::commands::Cmd;
use crate::messages::FindMsg;
use crate::model::{AppModel, EditOperation};

use super::document::replace_range;

/// Handle find/replace messages
pub fn update_find(model: &mut AppModel, msg: FindMsg) -> Option<Cmd> {
    match msg {
        FindMsg::SetQuery(query) => {
            model.ui.find.query = query;
            None
        }

        FindMsg::SetReplacement(replacement) => {
            model.ui.find.replacement = replacement;
            None
        }

        FindMsg::ToggleCaseSensitive => {
            model.ui.find.case_sensitive = !model.ui.find.case_sensitive;
            None
        }

        FindMsg::FindNext => {
            let from = model.selection_offsets().end;
            let found = model.document().find_next_occurrence(
                &model.ui.find.query,
                from,
                model.ui.find.case_sensitive,
            );
            select_match(model, found)
        }

        FindMsg::FindPrevious => {
            let before = model.selection_offsets().start;
            let found = model.document().find_prev_occurrence(
                &model.ui.find.query,
                before,
                model.ui.find.case_sensitive,
            );
            select_match(model, found)
        }

        FindMsg::ReplaceNext => {
            if selection_is_match(model) {
                let range = model.selection_offsets();
                let replacement = model.ui.find.replacement.clone();
                replace_range(model, range, &replacement);
            }
            update_find(model, FindMsg::FindNext)
        }

        FindMsg::ReplaceAll => {
            let find = model.ui.find.clone();
            let matches = model
                .document()
                .find_all_occurrences(&find.query, find.case_sensitive);
            if matches.is_empty() {
                model.ui.set_status(format!("Cannot find \"{}\"", find.query));
                return Some(Cmd::Redraw);
            }

            // Overlapping matches ("aa" in "aaa") would replace shifted text
            let mut ranges: Vec<(usize, usize)> = Vec::with_capacity(matches.len());
            for (start, end) in matches {
                if ranges.last().map_or(true, |&(_, prev_end)| start >= prev_end) {
                    ranges.push((start, end));
                }
            }

            let selection_before = model.selection;
            let mut operations = Vec::with_capacity(ranges.len());
            // Reverse document order keeps earlier offsets valid
            for &(start, end) in ranges.iter().rev() {
                let (deleted_text, spans) = model
                    .document_mut()
                    .replace_range(start..end, &find.replacement);
                operations.push(EditOperation::Replace {
                    position: start,
                    deleted_text,
                    inserted_text: find.replacement.clone(),
                    spans,
                    selection_before,
                    selection_after: selection_before,
                });
            }

            model.set_cursor(selection_before.head);
            let selection_after = model.selection;
            let count = operations.len();
            model.document_mut().push_edit(EditOperation::Batch {
                operations,
                selection_before,
                selection_after,
            });
            model.ui.set_status(format!("Replaced {} occurrence(s)", count));
            Some(Cmd::Redraw)
        }
    }
}

fn select_match(model: &mut AppModel, found: Option<(usize, usize)>) -> Option<Cmd> {
    match found {
        Some((start, end)) => {
            model.select_offsets(start..end);
            model.ui.set_status(String::new());
        }
        None => {
            let query = model.ui.find.query.clone();
            model.ui.set_status(format!("Cannot find \"{}\"", query));
        }
    }
    Some(Cmd::Redraw)
}

fn selection_is_match(model: &AppModel) -> bool {
    let range = model.selection_offsets();
    if range.is_empty() {
        return false;
    }
    model
        .document()
        .find_all_occurrences(&model.ui.find.query, model.ui.find.case_sensitive)
        .contains(&(range.start, range.end))
}
