//! Schema validation for the assessment form

use super::values::{FieldName, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const NAME_MAX_CHARS: usize = 50;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_LONG: &str = "Your name is too long! Are you of gnomish ancestry?";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const WILL_PROCEED_REJECTED: &str = "One does not simply walk into Mordor";

/// Field-level messages from a single validation pass, in on-screen field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// All messages, in field order
    pub fn messages(&self) -> Vec<String> {
        self.0.values().cloned().collect()
    }

    fn insert(&mut self, field: FieldName, message: &str) {
        // First failing rule per field wins, matching a per-field schema chain
        self.0.entry(field).or_insert_with(|| message.to_string());
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"(?i-u)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$").ok()
        })
        .as_ref()
}

/// Check email syntax: no leading dot, no consecutive dots, dotted domain with alphabetic TLD
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.')
        && !email.contains("..")
        && email_pattern().is_some_and(|pattern| pattern.is_match(email))
}

/// Validate a full value set, collecting every field error
pub fn validate(values: FormValues) -> Result<FormValues, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if values.name.is_empty() {
        errors.insert(FieldName::Name, NAME_REQUIRED);
    } else if values.name.chars().count() > NAME_MAX_CHARS {
        errors.insert(FieldName::Name, NAME_TOO_LONG);
    }

    if values.email.is_empty() {
        errors.insert(FieldName::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&values.email) {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }

    // favorite_series is a closed enum; membership is guaranteed by the type

    if values.will_proceed {
        errors.insert(FieldName::WillProceed, WILL_PROCEED_REJECTED);
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}
