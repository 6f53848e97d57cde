//! Contact Book - validated contact records persisted as a JSON document
//!
//! Provides:
//! - Field validation (format predicates and live per-field feedback)
//! - A JSON contact store over pluggable storage backends
//! - The contact book engine (create, update, delete, read)
//! - Configuration and a command-line front end (feature-gated)

pub mod book;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "config")]
pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use storage::memory::MemoryStorageBackend;
pub use storage::{StorageBackend, StorageError};
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;

pub use book::{ContactBook, ContactError, DeleteOutcome, NO_CONTACTS, Operation, SubmitOutcome};
#[cfg(feature = "config")]
pub use config::{BookConfig, ConfigError};
pub use models::{Contact, ContactFields, ContactId};
pub use store::{ContactStore, DEFAULT_CONTACTS_FILE};
pub use validation::{Feedback, FieldKind, FieldStatus};
