//! Format update functions: text color, background, font and wrapping

use crate::color::Color;
use crate::commands::Cmd;
use crate::messages::{ColorTarget, FormatMsg};
use crate::model::{AppModel, TextRange};

/// Handle formatting messages
pub fn update_format(model: &mut AppModel, msg: FormatMsg) -> Option<Cmd> {
    match msg {
        FormatMsg::ApplyColor(color) => {
            let range = model.selection.range();
            apply_color(model, range, color)
        }

        FormatMsg::ApplyColorToRange { range, color } => apply_color(model, range, color),

        FormatMsg::ClearColor => {
            let range = model.selection.range();
            clear_color(model, range)
        }

        FormatMsg::ClearColorInRange(range) => clear_color(model, range),

        FormatMsg::SetBackground(color) => {
            model.document_mut().set_background(color);
            tracing::debug!("Background set to {}", color);
            Some(Cmd::Redraw)
        }

        FormatMsg::ChooseTextColor => {
            if model.selection.is_empty() {
                model.ui.set_status("Select some text to color first");
                return Some(Cmd::Redraw);
            }
            let initial = model.document().span_color_at(model.selection.start());
            Some(Cmd::ShowColorChooser {
                target: ColorTarget::Text,
                initial,
            })
        }

        FormatMsg::ChooseBackground => Some(Cmd::ShowColorChooser {
            target: ColorTarget::Background,
            initial: Some(model.document().background),
        }),

        FormatMsg::ColorChosen { target, color } => {
            // Cancelled dialog
            let color = color?;
            match target {
                ColorTarget::Text => update_format(model, FormatMsg::ApplyColor(color)),
                ColorTarget::Background => update_format(model, FormatMsg::SetBackground(color)),
            }
        }

        FormatMsg::ToggleWordWrap => {
            model.ui.word_wrap = !model.ui.word_wrap;
            let state = if model.ui.word_wrap { "on" } else { "off" };
            model.ui.set_status(format!("Word wrap {}", state));
            Some(Cmd::Redraw)
        }

        FormatMsg::SetFont { family, size } => {
            if family.trim().is_empty() || size == 0 {
                tracing::warn!("Ignoring invalid font {:?} size {}", family, size);
                return None;
            }
            model.ui.font.family = family;
            model.ui.font.size = size;
            Some(Cmd::Redraw)
        }
    }
}

fn apply_color(model: &mut AppModel, range: TextRange, color: Color) -> Option<Cmd> {
    if !model.document_mut().apply_color(range, color) {
        tracing::debug!("Ignoring color {} for empty or invalid range {}", color, range);
        return None;
    }
    tracing::debug!("Applied {} to {}", color, range);
    Some(Cmd::Redraw)
}

fn clear_color(model: &mut AppModel, range: TextRange) -> Option<Cmd> {
    if !model.document_mut().clear_color(range) {
        tracing::debug!("Ignoring clear for empty or invalid range {}", range);
        return None;
    }
    tracing::debug!("Cleared colors in {}", range);
    Some(Cmd::Redraw)
}
