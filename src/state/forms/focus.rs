//! Keyboard focus within the assessment form

use super::values::FieldName;

/// Buttons on the actions row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub fn label(self) -> &'static str {
        match self {
            FormButton::Submit => "Submit",
            FormButton::Reset => "Reset",
        }
    }

    pub fn other(self) -> Self {
        match self {
            FormButton::Submit => FormButton::Reset,
            FormButton::Reset => FormButton::Submit,
        }
    }
}

/// Focus position: one of the fields, or the buttons row after the last field
#[derive(Debug, Clone, Default)]
pub struct FormFocus {
    active_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
}

impl FormFocus {
    /// Fields plus the buttons row
    pub fn slot_count(&self) -> usize {
        FieldName::ALL.len() + 1
    }

    pub fn set_active_index(&mut self, index: usize) {
        self.active_index = index.min(self.slot_count() - 1);
    }

    /// The focused field, or None when the buttons row is active
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_index).copied()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_index == FieldName::ALL.len()
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.slot_count();
    }

    pub fn prev(&mut self) {
        if self.active_index == 0 {
            self.active_index = self.slot_count() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// Move to the other button
    pub fn switch_button(&mut self) {
        self.selected_button = self.selected_button.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_field() {
        let focus = FormFocus::default();
        assert_eq!(focus.active_field(), Some(FieldName::Name));
        assert!(!focus.is_buttons_row_active());
        assert_eq!(focus.selected_button, FormButton::Submit);
    }

    #[test]
    fn test_next_reaches_buttons_then_wraps() {
        let mut focus = FormFocus::default();
        for _ in 0..FieldName::ALL.len() {
            focus.next();
        }
        assert!(focus.is_buttons_row_active());
        assert!(focus.active_field().is_none());
        focus.next();
        assert_eq!(focus.active_field(), Some(FieldName::Name));
    }

    #[test]
    fn test_prev_wraps_to_buttons() {
        let mut focus = FormFocus::default();
        focus.prev();
        assert!(focus.is_buttons_row_active());
        focus.prev();
        assert_eq!(focus.active_field(), Some(FieldName::SimulateError));
    }

    #[test]
    fn test_set_active_index_clamps() {
        let mut focus = FormFocus::default();
        focus.set_active_index(100);
        assert!(focus.is_buttons_row_active());
    }

    #[test]
    fn test_switch_button_toggles() {
        let mut focus = FormFocus::default();
        focus.switch_button();
        assert_eq!(focus.selected_button, FormButton::Reset);
        focus.switch_button();
        assert_eq!(focus.selected_button, FormButton::Submit);
    }
}
