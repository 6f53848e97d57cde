//! In-memory storage backend
//!
//! Keeps files in a map guarded by a mutex. Nothing survives the process;
//! used as the fake store in tests and by embedders that persist elsewhere.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Map-backed storage backend
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorageBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend with a single file already present
    pub fn with_file(path: &str, content: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        if let Ok(mut files) = backend.files.lock() {
            files.insert(normalize(path), content.into());
        }
        backend
    }

    /// Number of files currently held
    pub fn len(&self) -> usize {
        self.files.lock().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.files
            .lock()
            .map_err(|e| StorageError::BackendError(format!("Memory store poisoned: {}", e)))
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

#[async_trait(?Send)]
impl StorageBackend for MemoryStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.lock()?
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(path.to_string()))
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        self.lock()?.insert(normalize(path), content.to_vec());
        Ok(())
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.lock()?.contains_key(&normalize(path)))
    }
}
