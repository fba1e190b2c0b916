//! Keyboard input mechanics for form fields
//!
//! Turns key presses on the focused field into [`FieldEdit`]s for the controller.

use super::values::{FieldEdit, FieldName, FormValues};

fn text_edit(field: FieldName, value: String) -> Option<FieldEdit> {
    match field {
        FieldName::Name => Some(FieldEdit::Name(value)),
        FieldName::Email => Some(FieldEdit::Email(value)),
        _ => None,
    }
}

/// Push a character to a text field
pub fn push_char(values: &FormValues, field: FieldName, c: char) -> Option<FieldEdit> {
    if !field.is_text() {
        return None;
    }
    let mut text = values.text(field).to_string();
    text.push(c);
    text_edit(field, text)
}

/// Remove the last character from a text field
pub fn pop_char(values: &FormValues, field: FieldName) -> Option<FieldEdit> {
    let text = values.text(field);
    if !field.is_text() || text.is_empty() {
        return None;
    }
    let mut text = text.to_string();
    text.pop();
    text_edit(field, text)
}

/// Step a choice or toggle field forward/backward
pub fn cycle(values: &FormValues, field: FieldName, forward: bool) -> Option<FieldEdit> {
    match field {
        FieldName::FavoriteSeries => {
            let series = if forward {
                values.favorite_series.next()
            } else {
                values.favorite_series.prev()
            };
            Some(FieldEdit::FavoriteSeries(series))
        }
        FieldName::WillProceed | FieldName::SimulateError => toggle(values, field),
        FieldName::Name | FieldName::Email => None,
    }
}

/// Flip a boolean field
pub fn toggle(values: &FormValues, field: FieldName) -> Option<FieldEdit> {
    match field {
        FieldName::WillProceed => Some(FieldEdit::WillProceed(!values.will_proceed)),
        FieldName::SimulateError => Some(FieldEdit::SimulateError(!values.simulate_error)),
        _ => None,
    }
}
