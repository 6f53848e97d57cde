//! Rejection kinds for contact book submissions

use std::fmt;

/// Operation a message is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// Why a submission was rejected.
///
/// These are ordinary outcomes reported back to the user, not faults; the
/// user corrects the input and resubmits. Storage failures are reported
/// separately as [`StorageError`](crate::storage::StorageError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("All required fields are needed.")]
    MissingRequired,
    #[error("Invalid first name.")]
    InvalidFirstName,
    #[error("Invalid last name.")]
    InvalidLastName,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Phone must be 10 digits.")]
    InvalidPhone,
    #[error("Email exists.")]
    DuplicateEmail,
    #[error("Phone exists.")]
    DuplicatePhone,
    #[error("ID not found.")]
    NotFound,
}

impl ContactError {
    /// User-facing message for this rejection in the context of `operation`.
    ///
    /// Update and delete word a few rejections differently from create.
    pub fn message_for(self, operation: Operation) -> String {
        let message = match (operation, self) {
            (Operation::Update, ContactError::InvalidEmail) => "Invalid email.",
            (Operation::Update, ContactError::InvalidPhone) => "Invalid phone.",
            (Operation::Update, ContactError::DuplicateEmail) => "Email already exists.",
            (Operation::Delete, ContactError::NotFound) => "Contact ID not found.",
            _ => return self.to_string(),
        };
        message.to_string()
    }
}
