//! Contact book engine
//!
//! Applies create, update and delete submissions to the persisted
//! collection. Every operation loads the collection, checks the submission
//! and, only when it is accepted, saves the full collection back.
//!
//! Rejections are returned as values ([`SubmitOutcome`], [`DeleteOutcome`])
//! carrying the message to show and the submitted fields to redisplay.
//! Only storage failures come back as `Err`.

pub mod error;

pub use error::{ContactError, Operation};

use crate::models::{Contact, ContactFields, ContactId};
use crate::storage::{StorageBackend, StorageError};
use crate::store::ContactStore;
use crate::validation::Feedback;
use crate::validation::input::{
    is_valid_email, is_valid_last_name, is_valid_name, is_valid_phone,
};
use tracing::{debug, info};

/// Rendering of an empty collection
pub const NO_CONTACTS: &str = "No contacts.";

/// Result of a create or update submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Status line for the user
    pub message: String,
    /// Field values to display next: cleared on success, echoed on rejection
    pub fields: ContactFields,
    /// Feedback mode for the next field change event
    pub feedback: Feedback,
    /// Id of the created or updated contact, or why it was rejected
    pub result: Result<ContactId, ContactError>,
}

impl SubmitOutcome {
    fn accepted(message: String, id: ContactId) -> Self {
        Self {
            message,
            fields: ContactFields::default(),
            feedback: Feedback::Suppress,
            result: Ok(id),
        }
    }

    fn rejected(operation: Operation, error: ContactError, fields: ContactFields) -> Self {
        debug!("Rejected {}: {:?}", operation, error);
        Self {
            message: error.message_for(operation),
            fields,
            feedback: Feedback::Show,
            result: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn id(&self) -> Option<ContactId> {
        self.result.ok()
    }

    pub fn error(&self) -> Option<ContactError> {
        self.result.err()
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub message: String,
    pub result: Result<ContactId, ContactError>,
}

impl DeleteOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<ContactError> {
        self.result.err()
    }
}

/// Contact book over a JSON contact store
///
/// # Example
///
/// ```rust
/// use contact_book::{ContactBook, ContactFields, ContactStore, MemoryStorageBackend};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let book = ContactBook::new(ContactStore::new(MemoryStorageBackend::new()));
/// let fields = ContactFields::new("Ann", "", "Lee", "X", "a@b.c", "1234567890");
///
/// let outcome = book.create(fields).await.unwrap();
/// assert_eq!(outcome.id(), Some(1));
/// assert_eq!(book.read().await.unwrap(), "1. Ann  Lee | a@b.c | 1234567890 | X");
/// # });
/// ```
pub struct ContactBook<B: StorageBackend> {
    store: ContactStore<B>,
}

impl<B: StorageBackend> ContactBook<B> {
    pub fn new(store: ContactStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContactStore<B> {
        &self.store
    }

    /// Create a contact from a fully filled-in form.
    ///
    /// Checks run in a fixed order so the most relevant message wins:
    /// required fields, then formats, then uniqueness against stored records.
    pub async fn create(&self, fields: ContactFields) -> Result<SubmitOutcome, StorageError> {
        if let Err(error) = check_new(&fields) {
            return Ok(SubmitOutcome::rejected(Operation::Create, error, fields));
        }

        let mut contacts = self.store.load().await?;
        if let Err(error) = check_unique(&contacts, &fields, None) {
            return Ok(SubmitOutcome::rejected(Operation::Create, error, fields));
        }

        let id = next_id(&contacts);
        contacts.push(Contact::from_fields(id, fields));
        self.store.save(&contacts).await?;

        info!("Created contact {}", id);
        Ok(SubmitOutcome::accepted(
            format!("Contact created. Your ID is: {}", id),
            id,
        ))
    }

    /// Update the contact with `id` from a partially filled-in form.
    ///
    /// Empty fields are left unchanged and never validated. Uniqueness is
    /// checked against every other record, so resubmitting a contact's own
    /// email or phone is accepted.
    pub async fn update(
        &self,
        id: ContactId,
        fields: ContactFields,
    ) -> Result<SubmitOutcome, StorageError> {
        let mut contacts = self.store.load().await?;

        let Some(position) = contacts.iter().position(|c| c.id == id) else {
            return Ok(SubmitOutcome::rejected(
                Operation::Update,
                ContactError::NotFound,
                fields,
            ));
        };

        let checked =
            check_partial(&fields).and_then(|()| check_unique(&contacts, &fields, Some(id)));
        if let Err(error) = checked {
            return Ok(SubmitOutcome::rejected(Operation::Update, error, fields));
        }

        contacts[position].apply(&fields);
        self.store.save(&contacts).await?;

        info!("Updated contact {}", id);
        Ok(SubmitOutcome::accepted("Contact updated.".to_string(), id))
    }

    /// Remove the contact with `id`
    pub async fn delete(&self, id: ContactId) -> Result<DeleteOutcome, StorageError> {
        let contacts = self.store.load().await?;
        let before = contacts.len();
        let remaining: Vec<Contact> = contacts.into_iter().filter(|c| c.id != id).collect();

        if remaining.len() == before {
            debug!("Rejected {}: no contact {}", Operation::Delete, id);
            return Ok(DeleteOutcome {
                message: ContactError::NotFound.message_for(Operation::Delete),
                result: Err(ContactError::NotFound),
            });
        }

        self.store.save(&remaining).await?;

        info!("Deleted contact {}", id);
        Ok(DeleteOutcome {
            message: "Contact deleted.".to_string(),
            result: Ok(id),
        })
    }

    /// Render every contact, one per line, in stored order
    pub async fn read(&self) -> Result<String, StorageError> {
        let contacts = self.store.load().await?;
        Ok(render(&contacts))
    }

    /// All contacts in stored order
    pub async fn list(&self) -> Result<Vec<Contact>, StorageError> {
        self.store.load().await
    }

    pub async fn get(&self, id: ContactId) -> Result<Option<Contact>, StorageError> {
        let contacts = self.store.load().await?;
        Ok(contacts.into_iter().find(|c| c.id == id))
    }
}

/// Render a collection as the contact listing
pub fn render(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return NO_CONTACTS.to_string();
    }
    contacts
        .iter()
        .map(Contact::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Next unused id: one past the record count, or past the highest id after
/// deletions have left gaps.
fn next_id(contacts: &[Contact]) -> ContactId {
    let highest = contacts.iter().map(|c| c.id).max().unwrap_or(0);
    highest.max(contacts.len() as ContactId) + 1
}

/// Required-field and format checks for a new contact
fn check_new(fields: &ContactFields) -> Result<(), ContactError> {
    if !fields.has_required() {
        return Err(ContactError::MissingRequired);
    }
    if !is_valid_name(&fields.first_name) {
        return Err(ContactError::InvalidFirstName);
    }
    if !is_valid_last_name(&fields.last_name) {
        return Err(ContactError::InvalidLastName);
    }
    if !is_valid_email(&fields.email) {
        return Err(ContactError::InvalidEmail);
    }
    if !is_valid_phone(&fields.phone) {
        return Err(ContactError::InvalidPhone);
    }
    Ok(())
}

/// Format checks for the fields an update actually supplies
fn check_partial(fields: &ContactFields) -> Result<(), ContactError> {
    if supplied_and_invalid(&fields.first_name, is_valid_name) {
        return Err(ContactError::InvalidFirstName);
    }
    if supplied_and_invalid(&fields.last_name, is_valid_last_name) {
        return Err(ContactError::InvalidLastName);
    }
    if supplied_and_invalid(&fields.email, is_valid_email) {
        return Err(ContactError::InvalidEmail);
    }
    if supplied_and_invalid(&fields.phone, is_valid_phone) {
        return Err(ContactError::InvalidPhone);
    }
    Ok(())
}

fn supplied_and_invalid(value: &str, is_valid: fn(&str) -> bool) -> bool {
    !value.is_empty() && !is_valid(value)
}

/// Email and phone uniqueness against stored records, skipping `exclude`
fn check_unique(
    contacts: &[Contact],
    fields: &ContactFields,
    exclude: Option<ContactId>,
) -> Result<(), ContactError> {
    let others = move || contacts.iter().filter(move |c| Some(c.id) != exclude);

    if !fields.email.is_empty() && others().any(|c| c.email == fields.email) {
        return Err(ContactError::DuplicateEmail);
    }
    if !fields.phone.is_empty() && others().any(|c| c.phone == fields.phone) {
        return Err(ContactError::DuplicatePhone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: ContactId, email: &str, phone: &str) -> Contact {
        Contact::from_fields(id, ContactFields::new("Ann", "", "Lee", "X", email, phone))
    }

    #[test]
    fn test_next_id_sequential() {
        assert_eq!(next_id(&[]), 1);
        let contacts = vec![
            contact(1, "a@b.c", "1234567890"),
            contact(2, "b@b.c", "1234567891"),
        ];
        assert_eq!(next_id(&contacts), 3);
    }

    #[test]
    fn test_next_id_skips_surviving_ids() {
        // 1 was deleted from [1, 2]; count + 1 would collide with 2
        let contacts = vec![contact(2, "b@b.c", "1234567891")];
        assert_eq!(next_id(&contacts), 3);
    }

    #[test]
    fn test_check_new_order() {
        let missing_and_invalid = ContactFields::new("Al", "", "Lee", "", "bad", "1");
        assert_eq!(check_new(&missing_and_invalid), Err(ContactError::MissingRequired));

        let all_invalid = ContactFields::new("Al", "", "L3", "X", "bad", "1");
        assert_eq!(check_new(&all_invalid), Err(ContactError::InvalidFirstName));

        let bad_last = ContactFields::new("Ann", "", "L3", "X", "bad", "1");
        assert_eq!(check_new(&bad_last), Err(ContactError::InvalidLastName));

        let bad_email = ContactFields::new("Ann", "", "Lee", "X", "bad", "1");
        assert_eq!(check_new(&bad_email), Err(ContactError::InvalidEmail));

        let bad_phone = ContactFields::new("Ann", "", "Lee", "X", "a@b.c", "1");
        assert_eq!(check_new(&bad_phone), Err(ContactError::InvalidPhone));
    }

    #[test]
    fn test_check_partial_ignores_empty_fields() {
        assert_eq!(check_partial(&ContactFields::default()), Ok(()));

        let bad_phone_only = ContactFields {
            phone: "1111111111".to_string(),
            ..Default::default()
        };
        assert_eq!(check_partial(&bad_phone_only), Err(ContactError::InvalidPhone));
    }

    #[test]
    fn test_check_unique_excludes_target() {
        let contacts = vec![
            contact(1, "a@b.c", "1234567890"),
            contact(2, "b@b.c", "1234567891"),
        ];
        let own = ContactFields {
            email: "a@b.c".to_string(),
            phone: "1234567890".to_string(),
            ..Default::default()
        };

        assert_eq!(check_unique(&contacts, &own, Some(1)), Ok(()));
        assert_eq!(
            check_unique(&contacts, &own, Some(2)),
            Err(ContactError::DuplicateEmail)
        );

        let phone_clash = ContactFields {
            phone: "1234567891".to_string(),
            ..Default::default()
        };
        assert_eq!(
            check_unique(&contacts, &phone_clash, None),
            Err(ContactError::DuplicatePhone)
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), NO_CONTACTS);
    }
}
