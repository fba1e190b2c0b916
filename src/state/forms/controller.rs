//! Form controller
//!
//! Owns the live edit state of the assessment form, tracks which fields differ from
//! the committed baseline, runs validation and drives the submission executor.
//! Dirty tracking compares against the baseline on every edit, so a field that is
//! edited back to its committed value is no longer dirty.

use super::store::CommittedStore;
use super::validation::{validate, ValidationErrors};
use super::values::{FieldEdit, FieldName, FormValues};
use crate::state::status::{present, StatusDirective};
use crate::submission::{Completion, SubmissionExecutor, SubmissionLifecycle};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Fields whose live value differs from the baseline
pub type DirtyFields = BTreeSet<FieldName>;

/// Result of a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the executor took the submission
    Started(Uuid),
    /// Validation failed with this many field errors; nothing was sent
    Invalid(usize),
    /// A submission is already in flight
    Busy,
}

pub struct FormController {
    live: FormValues,
    baseline: FormValues,
    dirty: DirtyFields,
    errors: ValidationErrors,
    /// Re-validate on every edit once a submit has been attempted
    submit_attempted: bool,
    error_detail_open: bool,
    store: CommittedStore,
    executor: SubmissionExecutor,
}

impl FormController {
    pub fn new(store: CommittedStore, executor: SubmissionExecutor) -> Self {
        let committed = store.values().clone();
        Self {
            live: committed.clone(),
            baseline: committed,
            dirty: DirtyFields::new(),
            errors: ValidationErrors::default(),
            submit_attempted: false,
            error_detail_open: false,
            store,
            executor,
        }
    }

    /// Make `committed` both the live values and the dirty-tracking baseline
    pub fn initialize(&mut self, committed: FormValues) {
        self.live = committed.clone();
        self.baseline = committed;
        self.dirty.clear();
    }

    pub fn values(&self) -> &FormValues {
        &self.live
    }

    pub fn committed(&self) -> &FormValues {
        self.store.values()
    }

    pub fn store(&self) -> &CommittedStore {
        &self.store
    }

    pub fn dirty_fields(&self) -> &DirtyFields {
        &self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn lifecycle(&self) -> &SubmissionLifecycle {
        self.executor.lifecycle()
    }

    pub fn is_error_detail_open(&self) -> bool {
        self.error_detail_open
    }

    /// Apply a single field change
    pub fn edit(&mut self, edit: FieldEdit) {
        let field = edit.field();
        if !self.live.apply(edit) {
            return;
        }

        if self.live.field_eq(&self.baseline, field) {
            self.dirty.remove(&field);
        } else {
            self.dirty.insert(field);
        }
        tracing::debug!(%field, dirty = self.dirty.len(), "Field edited");

        if self.submit_attempted {
            self.errors = validate(self.live.clone()).err().unwrap_or_default();
        }

        if self.is_dirty() && self.executor.lifecycle().is_terminal() {
            if let Err(e) = self.executor.reset() {
                tracing::warn!("Could not leave finished submission state: {e}");
            }
        }

        if !self.has_error_detail() {
            self.error_detail_open = false;
        }
    }

    /// Validate the live values and hand them to the executor when clean
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.executor.is_pending() {
            tracing::warn!("Submit ignored: a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        self.submit_attempted = true;
        match validate(self.live.clone()) {
            Err(errors) => {
                let count = errors.len();
                tracing::info!(count, "Submit blocked by validation errors");
                self.errors = errors;
                SubmitOutcome::Invalid(count)
            }
            Ok(values) => {
                self.errors = ValidationErrors::default();
                self.error_detail_open = false;
                let simulate_error = values.simulate_error;
                match self.executor.submit(values, simulate_error) {
                    Ok(id) => SubmitOutcome::Started(id),
                    Err(_) => SubmitOutcome::Busy,
                }
            }
        }
    }

    /// Restore the committed values and return the lifecycle to Idle.
    ///
    /// A pending submission keeps running; only the form state is restored.
    pub fn reset(&mut self) {
        let committed = self.committed().clone();
        self.initialize(committed);
        self.errors = ValidationErrors::default();
        self.submit_attempted = false;
        self.error_detail_open = false;
        if let Err(e) = self.executor.reset() {
            tracing::warn!(id = ?self.executor.in_flight_id(), "Form reset while submitting: {e}");
        }
    }

    /// Apply a finished submission, if one has reported back
    pub fn poll_submission(&mut self) -> Option<Completion> {
        let completion = self.executor.poll()?;
        self.apply_completion(&completion);
        Some(completion)
    }

    /// Wait for the in-flight submission to finish and apply it
    pub async fn settle(&mut self) -> Option<Completion> {
        let completion = self.executor.wait().await?;
        self.apply_completion(&completion);
        Some(completion)
    }

    fn apply_completion(&mut self, completion: &Completion) {
        if let Completion::Succeeded(values) = completion {
            if let Err(e) = self.store.commit(values.clone()) {
                tracing::warn!("Committed values were not persisted: {e}");
            }
            self.initialize(values.clone());
            self.errors = ValidationErrors::default();
            self.submit_attempted = false;
            self.error_detail_open = false;
        }
    }

    fn has_error_detail(&self) -> bool {
        !self.errors.is_empty() || matches!(self.lifecycle(), SubmissionLifecycle::Failed(_))
    }

    /// Open the error-detail overlay; a no-op when there is nothing to detail
    pub fn open_error_detail(&mut self) {
        self.error_detail_open = self.has_error_detail();
    }

    pub fn close_error_detail(&mut self) {
        self.error_detail_open = false;
    }

    /// Status directive for the current state
    pub fn status(&self) -> StatusDirective {
        present(
            &self.errors,
            self.executor.lifecycle(),
            &self.dirty,
            self.error_detail_open,
        )
    }
}
