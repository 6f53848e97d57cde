//! Contact collection persistence
//!
//! Loads and saves the whole contact collection as one JSON array through a
//! storage backend. There is no cache: callers load before every operation
//! and save the full collection after every mutation.

use crate::models::Contact;
use crate::storage::{StorageBackend, StorageError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, warn};

/// Default file name of the collection inside the storage backend
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// JSON-array store of contacts on top of a storage backend
pub struct ContactStore<B: StorageBackend> {
    storage: B,
    file_path: String,
}

impl<B: StorageBackend> ContactStore<B> {
    /// Create a store reading and writing [`DEFAULT_CONTACTS_FILE`]
    pub fn new(storage: B) -> Self {
        Self::with_file(storage, DEFAULT_CONTACTS_FILE)
    }

    /// Create a store reading and writing `file_path` within the backend
    pub fn with_file(storage: B, file_path: impl Into<String>) -> Self {
        Self {
            storage,
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn storage(&self) -> &B {
        &self.storage
    }

    /// Seed the backing file with an empty array if it does not exist yet.
    ///
    /// Returns whether a file was created.
    pub async fn init(&self) -> Result<bool, StorageError> {
        if self.storage.file_exists(&self.file_path).await? {
            return Ok(false);
        }
        warn!("Contacts file {} not found, creating it", self.file_path);
        self.save(&[]).await?;
        Ok(true)
    }

    /// Load the full collection.
    ///
    /// A missing backing file reads as an empty collection; nothing is written.
    pub async fn load(&self) -> Result<Vec<Contact>, StorageError> {
        if !self.storage.file_exists(&self.file_path).await? {
            debug!("No contacts file at {}", self.file_path);
            return Ok(Vec::new());
        }

        let content = self.storage.read_file(&self.file_path).await?;
        let contacts: Vec<Contact> = serde_json::from_slice(&content).map_err(|e| {
            StorageError::SerializationError(format!(
                "Failed to parse {}: {}",
                self.file_path, e
            ))
        })?;

        info!("Loaded {} contacts from {}", contacts.len(), self.file_path);
        Ok(contacts)
    }

    /// Replace the persisted collection with `contacts`
    pub async fn save(&self, contacts: &[Contact]) -> Result<(), StorageError> {
        let content = to_json(contacts)?;
        self.storage.write_file(&self.file_path, &content).await?;

        debug!("Saved {} contacts to {}", contacts.len(), self.file_path);
        Ok(())
    }
}

/// Serialize with the four-space indentation used by the on-disk format
fn to_json(contacts: &[Contact]) -> Result<Vec<u8>, StorageError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    contacts.serialize(&mut serializer).map_err(|e| {
        StorageError::SerializationError(format!("Failed to serialize contacts: {}", e))
    })?;
    Ok(buffer)
}
