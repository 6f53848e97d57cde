//! File system storage backend
//!
//! Stores each file under one base directory. Names are plain relative paths
//! such as `contacts.json` or `book/contacts.json`; anything that could step
//! outside the base directory is refused before touching the disk.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File system storage backend
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl FileSystemStorageBackend {
    /// Create a backend rooted at `base_path`.
    ///
    /// The directory does not need to exist yet; it is created on first write.
    ///
    /// ```rust
    /// use contact_book::storage::filesystem::FileSystemStorageBackend;
    ///
    /// let backend = FileSystemStorageBackend::new("/home/me/.contacts");
    /// assert!(backend.base_path().ends_with(".contacts"));
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Base directory all names are resolved against
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Map a stored name onto a path under the base directory.
    ///
    /// Both `/` and `\` separate segments so a Windows-style `..\` cannot slip
    /// through as one odd file name. A leading `/` is ignored.
    fn locate(&self, name: &str) -> Result<PathBuf, StorageError> {
        let mut path = self.base_path.clone();
        let mut segments = 0;

        for segment in name.split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(StorageError::PermissionDenied(format!(
                        "{} points outside {}",
                        name,
                        self.base_path.display()
                    )));
                }
                _ => {
                    path.push(segment);
                    segments += 1;
                }
            }
        }

        if segments == 0 {
            return Err(StorageError::PermissionDenied(format!(
                "'{}' does not name a file",
                name
            )));
        }
        Ok(path)
    }
}

fn io_error(action: &str, name: &str, error: std::io::Error) -> StorageError {
    match error.kind() {
        ErrorKind::NotFound => StorageError::FileNotFound(name.to_string()),
        ErrorKind::PermissionDenied => {
            StorageError::PermissionDenied(format!("Cannot {} {}: {}", action, name, error))
        }
        _ => StorageError::IoError(format!("Cannot {} {}: {}", action, name, error)),
    }
}

#[async_trait(?Send)]
impl StorageBackend for FileSystemStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let file = self.locate(path)?;
        fs::read(&file).await.map_err(|e| io_error("read", path, e))
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let file = self.locate(path)?;
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| io_error("create directory for", path, e))?;
        }

        debug!("Writing {} bytes to {}", content.len(), file.display());
        fs::write(&file, content)
            .await
            .map_err(|e| io_error("write", path, e))
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        let file = self.locate(path)?;
        match fs::metadata(&file).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("inspect", path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locate_nested_name() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemStorageBackend::new(temp.path());

        let located = backend.locate("book/./contacts.json").unwrap();
        assert_eq!(located, temp.path().join("book").join("contacts.json"));
    }

    #[test]
    fn test_locate_ignores_leading_slash() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemStorageBackend::new(temp.path());

        let located = backend.locate("/contacts.json").unwrap();
        assert_eq!(located, temp.path().join("contacts.json"));
    }

    #[test]
    fn test_locate_refuses_escapes() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemStorageBackend::new(temp.path());

        for name in ["../contacts.json", "/data/../../etc/passwd", "book\\..\\x", "", "/", "./"] {
            assert!(
                matches!(backend.locate(name), Err(StorageError::PermissionDenied(_))),
                "should refuse {:?}",
                name
            );
        }
    }

    #[test]
    fn test_dotted_file_names_are_allowed() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemStorageBackend::new(temp.path());

        assert!(backend.locate("contacts..json").is_ok());
        assert!(backend.locate(".contacts.json").is_ok());
    }
}
