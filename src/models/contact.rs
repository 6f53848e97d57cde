//! Contact model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored contact
pub type ContactId = u64;

/// A persisted contact record
///
/// Serialized with the exact key names of the on-disk collection:
/// `id`, `first_name`, `middle_name`, `last_name`, `address`, `email`, `phone`.
///
/// # Example
///
/// ```rust
/// use contact_book::models::{Contact, ContactFields};
///
/// let fields = ContactFields::new("Ann", "", "Lee", "X", "a@b.c", "1234567890");
/// let contact = Contact::from_fields(1, fields);
/// assert_eq!(contact.to_string(), "1. Ann  Lee | a@b.c | 1234567890 | X");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    /// Optional; older files may omit the key entirely
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Build a record from submitted fields
    pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            last_name: fields.last_name,
            address: fields.address,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// Overwrite every field for which `fields` carries a non-empty value.
    ///
    /// Empty values mean "leave unchanged", so a field can never be cleared
    /// through this path.
    pub fn apply(&mut self, fields: &ContactFields) {
        overwrite_if_present(&mut self.first_name, &fields.first_name);
        overwrite_if_present(&mut self.middle_name, &fields.middle_name);
        overwrite_if_present(&mut self.last_name, &fields.last_name);
        overwrite_if_present(&mut self.address, &fields.address);
        overwrite_if_present(&mut self.email, &fields.email);
        overwrite_if_present(&mut self.phone, &fields.phone);
    }
}

fn overwrite_if_present(target: &mut String, value: &str) {
    if !value.is_empty() {
        *target = value.to_string();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {} | {} | {} | {}",
            self.id,
            self.first_name,
            self.middle_name,
            self.last_name,
            self.email,
            self.phone,
            self.address
        )
    }
}

/// Raw form input for a contact, as typed by the user.
///
/// Submitted to create/update and echoed back unchanged when a submission is
/// rejected. The default value is the cleared form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactFields {
    pub fn new(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// True when every required field (all but the middle name) is filled
    pub fn has_required(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.address,
            &self.email,
            &self.phone,
        ]
        .iter()
        .all(|value| !value.is_empty())
    }

    /// True when no field carries a value
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}
