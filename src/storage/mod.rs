//! Storage backend abstraction
//!
//! Defines the StorageBackend trait and implementations for different storage systems:
//! - FileSystemStorageBackend: Native file system (for the CLI and native apps)
//! - MemoryStorageBackend: In-process map (for tests and embedding)

use async_trait::async_trait;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Trait for storage backends
///
/// The contact store only ever needs whole-file reads and writes, so the
/// surface is kept to those plus an existence check that tells a missing
/// collection apart from an empty one.
#[async_trait(?Send)]
pub trait StorageBackend: Send + Sync {
    /// Read a file from storage
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Write a file to storage, replacing any previous content
    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Check if a file exists
    async fn file_exists(&self, path: &str) -> Result<bool, StorageError>;
}

#[cfg(feature = "native-fs")]
pub mod filesystem;

pub mod memory;
