//! Live field feedback.
//!
//! Presenters wrap the format predicates for per-keystroke use: each returns
//! a [`FieldStatus`] whose display form is the short status string shown next
//! to the field.

use super::input::{is_valid_email, is_valid_last_name, is_valid_name, is_valid_phone};
use std::fmt;
use std::str::FromStr;

/// Whether feedback should be rendered for the next change event.
///
/// A successful create or update clears every field; the caller then passes
/// `Suppress` so the now-empty fields are not flagged as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Show,
    Suppress,
}

impl Feedback {
    pub fn is_suppressed(self) -> bool {
        matches!(self, Feedback::Suppress)
    }
}

/// Outcome of validating one field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Feedback suppressed; renders as an empty string
    Skipped,
    /// Required value missing
    Empty,
    /// Value present but malformed
    Invalid(&'static str),
    Valid,
}

impl FieldStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    /// Short status string for display
    pub fn as_str(self) -> &'static str {
        match self {
            FieldStatus::Skipped => "",
            FieldStatus::Empty => "Required.",
            FieldStatus::Invalid(message) => message,
            FieldStatus::Valid => "OK",
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that carry live validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    FirstName,
    LastName,
    Address,
    Email,
    Phone,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::Address,
        FieldKind::Email,
        FieldKind::Phone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::FirstName => "first_name",
            FieldKind::LastName => "last_name",
            FieldKind::Address => "address",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_name" | "first" | "fname" => Ok(FieldKind::FirstName),
            "last_name" | "last" | "lname" => Ok(FieldKind::LastName),
            "address" | "addr" => Ok(FieldKind::Address),
            "email" => Ok(FieldKind::Email),
            "phone" => Ok(FieldKind::Phone),
            _ => Err(format!(
                "Invalid field: {}. Expected: first_name, last_name, address, email, phone",
                s
            )),
        }
    }
}

fn present(
    value: &str,
    feedback: Feedback,
    is_valid: impl Fn(&str) -> bool,
    invalid: &'static str,
) -> FieldStatus {
    if feedback.is_suppressed() {
        FieldStatus::Skipped
    } else if value.is_empty() {
        FieldStatus::Empty
    } else if is_valid(value) {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid(invalid)
    }
}

pub fn validate_first_name(value: &str, feedback: Feedback) -> FieldStatus {
    present(value, feedback, is_valid_name, "Min 3 letters.")
}

pub fn validate_last_name(value: &str, feedback: Feedback) -> FieldStatus {
    present(value, feedback, is_valid_last_name, "Alphabets only.")
}

/// Address only has to be present.
pub fn validate_address(value: &str, feedback: Feedback) -> FieldStatus {
    present(value, feedback, |_| true, "")
}

pub fn validate_email(value: &str, feedback: Feedback) -> FieldStatus {
    present(value, feedback, is_valid_email, "Invalid.")
}

pub fn validate_phone(value: &str, feedback: Feedback) -> FieldStatus {
    present(value, feedback, is_valid_phone, "10 digits only.")
}

/// Dispatch to the presenter for `kind`
pub fn validate_field(kind: FieldKind, value: &str, feedback: Feedback) -> FieldStatus {
    match kind {
        FieldKind::FirstName => validate_first_name(value, feedback),
        FieldKind::LastName => validate_last_name(value, feedback),
        FieldKind::Address => validate_address(value, feedback),
        FieldKind::Email => validate_email(value, feedback),
        FieldKind::Phone => validate_phone(value, feedback),
    }
}
