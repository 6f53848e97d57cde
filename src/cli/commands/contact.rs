//! Contact commands: create, update, delete, list, show

use crate::book::ContactBook;
use crate::cli::error::CliError;
use crate::cli::output::{format_contact_json, format_submit_outcome};
use crate::models::{ContactFields, ContactId};
use crate::storage::StorageBackend;

/// Handle the `create` command
pub async fn handle_create<B: StorageBackend>(
    book: &ContactBook<B>,
    fields: ContactFields,
) -> Result<String, CliError> {
    let outcome = book.create(fields).await?;
    if outcome.is_success() {
        Ok(format_submit_outcome(&outcome))
    } else {
        Err(CliError::Rejected(format_submit_outcome(&outcome)))
    }
}

/// Handle the `update` command
pub async fn handle_update<B: StorageBackend>(
    book: &ContactBook<B>,
    id: ContactId,
    fields: ContactFields,
) -> Result<String, CliError> {
    let outcome = book.update(id, fields).await?;
    if outcome.is_success() {
        Ok(format_submit_outcome(&outcome))
    } else {
        Err(CliError::Rejected(format_submit_outcome(&outcome)))
    }
}

/// Handle the `delete` command
pub async fn handle_delete<B: StorageBackend>(
    book: &ContactBook<B>,
    id: ContactId,
) -> Result<String, CliError> {
    let outcome = book.delete(id).await?;
    if outcome.is_success() {
        Ok(outcome.message)
    } else {
        Err(CliError::Rejected(outcome.message))
    }
}

/// Handle the `list` command
pub async fn handle_list<B: StorageBackend>(book: &ContactBook<B>) -> Result<String, CliError> {
    Ok(book.read().await?)
}

/// Handle the `show` command
pub async fn handle_show<B: StorageBackend>(
    book: &ContactBook<B>,
    id: ContactId,
) -> Result<String, CliError> {
    match book.get(id).await? {
        Some(contact) => format_contact_json(&contact),
        None => Err(CliError::NotFound(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorageBackend;
    use crate::store::ContactStore;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    fn ann() -> ContactFields {
        ContactFields::new("Ann", "", "Lee", "X", "a@b.c", "1234567890")
    }

    #[test]
    fn test_create_then_list() {
        let book = ContactBook::new(ContactStore::new(MemoryStorageBackend::new()));

        let message = block_on(handle_create(&book, ann())).unwrap();
        assert_eq!(message, "Contact created. Your ID is: 1");

        let listing = block_on(handle_list(&book)).unwrap();
        assert_eq!(listing, "1. Ann  Lee | a@b.c | 1234567890 | X");
    }

    #[test]
    fn test_rejection_echoes_fields() {
        let book = ContactBook::new(ContactStore::new(MemoryStorageBackend::new()));
        block_on(handle_create(&book, ann())).unwrap();

        let err = block_on(handle_create(&book, ann())).unwrap_err();
        match err {
            CliError::Rejected(message) => {
                assert!(message.starts_with("Email exists.\nSubmitted:\n"));
                assert!(message.contains("a@b.c"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_show_and_delete_missing() {
        let book = ContactBook::new(ContactStore::new(MemoryStorageBackend::new()));

        assert!(matches!(
            block_on(handle_show(&book, 4)),
            Err(CliError::NotFound(4))
        ));
        assert!(matches!(
            block_on(handle_delete(&book, 4)),
            Err(CliError::Rejected(message)) if message == "Contact ID not found."
        ));
    }
}
