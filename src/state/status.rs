//! Status presenter
//!
//! Derives the single status directive shown next to the Submit/Reset buttons
//! from validation errors, submission lifecycle and dirty state. The checks run in
//! a fixed priority order and the first match wins.

use crate::state::forms::{DirtyFields, ValidationErrors};
use crate::submission::SubmissionLifecycle;

/// Icon shown in front of the status text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    None,
    Error,
    Spinner,
    Check,
}

/// What the status region should display and which actions are available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDirective {
    pub icon: StatusIcon,
    pub text: String,
    /// Messages available in the error-detail overlay
    pub detail: Option<Vec<String>>,
    /// Overlay is requested and there is something to show
    pub detail_open: bool,
    pub submit_enabled: bool,
    pub reset_enabled: bool,
}

impl StatusDirective {
    fn new(icon: StatusIcon, text: impl Into<String>, submit_enabled: bool, reset_enabled: bool) -> Self {
        Self {
            icon,
            text: text.into(),
            detail: None,
            detail_open: false,
            submit_enabled,
            reset_enabled,
        }
    }

    fn with_detail(mut self, detail: Vec<String>, is_open: bool) -> Self {
        self.detail = Some(detail);
        self.detail_open = is_open;
        self
    }
}

/// "1 change" / "N changes"
pub fn change_count_text(count: usize) -> String {
    format!("{count} change{}", if count == 1 { "" } else { "s" })
}

pub fn present(
    errors: &ValidationErrors,
    lifecycle: &SubmissionLifecycle,
    dirty: &DirtyFields,
    is_detail_open: bool,
) -> StatusDirective {
    if !errors.is_empty() {
        return StatusDirective::new(StatusIcon::Error, format!("Errors: {}", errors.len()), false, true)
            .with_detail(errors.messages(), is_detail_open);
    }

    match lifecycle {
        SubmissionLifecycle::Pending => {
            return StatusDirective::new(StatusIcon::Spinner, "Submitting...", false, true);
        }
        SubmissionLifecycle::Failed(error) => {
            return StatusDirective::new(StatusIcon::Error, "Error: Failed to save...", false, true)
                .with_detail(vec![error.to_string()], is_detail_open);
        }
        SubmissionLifecycle::Succeeded => {
            return StatusDirective::new(StatusIcon::Check, "Submitted", false, false);
        }
        SubmissionLifecycle::Idle => {}
    }

    if !dirty.is_empty() {
        return StatusDirective::new(StatusIcon::None, change_count_text(dirty.len()), true, true);
    }

    StatusDirective::new(StatusIcon::None, "No changes", false, false)
}
