//! Storage backend and contact store tests

#[cfg(feature = "native-fs")]
mod filesystem_tests {
    use contact_book::storage::{
        StorageBackend, StorageError, filesystem::FileSystemStorageBackend,
    };
    use contact_book::{Contact, ContactFields, ContactStore};
    use tempfile::TempDir;
    use tokio::runtime::Runtime;

    fn runtime() -> Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_read_write_roundtrip() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let backend = FileSystemStorageBackend::new(temp.path());

            backend.write_file("contacts.json", b"[]").await.unwrap();

            let read_content = backend.read_file("contacts.json").await.unwrap();
            assert_eq!(read_content, b"[]");
        });
    }

    #[test]
    fn test_file_not_found() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let backend = FileSystemStorageBackend::new(temp.path());

            let result = backend.read_file("nonexistent.json").await;
            assert!(matches!(result, Err(StorageError::FileNotFound(_))));
            assert!(!backend.file_exists("nonexistent.json").await.unwrap());
        });
    }

    #[test]
    fn test_path_traversal_various_patterns() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let backend = FileSystemStorageBackend::new(temp.path());

            let malicious_paths = [
                "..",
                "../",
                "../contacts.json",
                "book/../../contacts.json",
                "/../etc/passwd",
                "book/..\\contacts.json",
            ];

            for path in &malicious_paths {
                let result = backend.read_file(path).await;
                assert!(
                    matches!(result, Err(StorageError::PermissionDenied(_))),
                    "Path traversal should be blocked: {}",
                    path
                );
                let result = backend.write_file(path, b"[]").await;
                assert!(
                    matches!(result, Err(StorageError::PermissionDenied(_))),
                    "Path traversal should be blocked on write: {}",
                    path
                );
            }
        });
    }

    #[test]
    fn test_write_creates_directories() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let backend = FileSystemStorageBackend::new(temp.path().join("not-yet"));

            backend
                .write_file("book/contacts.json", b"[]")
                .await
                .unwrap();
            assert!(backend.file_exists("book/contacts.json").await.unwrap());
        });
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let backend = FileSystemStorageBackend::new(temp.path());

            backend.write_file("contacts.json", b"[1]").await.unwrap();
            backend.write_file("contacts.json", b"[]").await.unwrap();

            let content = backend.read_file("contacts.json").await.unwrap();
            assert_eq!(content, b"[]");
        });
    }

    #[test]
    fn test_store_load_does_not_create_file() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let store = ContactStore::new(FileSystemStorageBackend::new(temp.path()));

            assert!(store.load().await.unwrap().is_empty());
            assert!(!temp.path().join("contacts.json").exists());
        });
    }

    #[test]
    fn test_store_init_creates_file_on_disk() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let store = ContactStore::new(FileSystemStorageBackend::new(temp.path()));

            assert!(store.init().await.unwrap());

            let on_disk = std::fs::read_to_string(temp.path().join("contacts.json")).unwrap();
            assert_eq!(on_disk, "[]");
        });
    }

    #[test]
    fn test_store_roundtrip_on_disk() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            let store = ContactStore::new(FileSystemStorageBackend::new(temp.path()));
            let contacts = vec![
                Contact::from_fields(
                    1,
                    ContactFields::new("Ann", "", "Lee", "X", "a@b.c", "1234567890"),
                ),
                Contact::from_fields(
                    2,
                    ContactFields::new("Bob", "J", "Ray", "Y Street 4", "b@c.d", "1234509876"),
                ),
            ];

            store.save(&contacts).await.unwrap();
            assert_eq!(store.load().await.unwrap(), contacts);
        });
    }

    #[test]
    fn test_store_reads_file_written_by_hand() {
        let rt = runtime();
        rt.block_on(async {
            let temp = TempDir::new().unwrap();
            std::fs::write(
                temp.path().join("contacts.json"),
                r#"[
    {
        "id": 1,
        "first_name": "Hemalatha",
        "middle_name": "",
        "last_name": "R",
        "address": "Chennai",
        "email": "hemi@gmail.com",
        "phone": "9876543210"
    }
]"#,
            )
            .unwrap();

            let store = ContactStore::new(FileSystemStorageBackend::new(temp.path()));
            let contacts = store.load().await.unwrap();
            assert_eq!(contacts.len(), 1);
            assert_eq!(contacts[0].first_name, "Hemalatha");
            assert_eq!(contacts[0].email, "hemi@gmail.com");
        });
    }
}

mod memory_tests {
    use contact_book::{Contact, ContactFields, ContactStore, MemoryStorageBackend};

    #[test]
    fn test_save_load_roundtrip() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = ContactStore::new(MemoryStorageBackend::new());
            let contacts: Vec<Contact> = (1..=5)
                .map(|id| {
                    Contact::from_fields(
                        id,
                        ContactFields::new(
                            "Ann",
                            "",
                            "Lee",
                            "X",
                            format!("ann{}@b.c", id),
                            format!("12345678{:02}", id),
                        ),
                    )
                })
                .collect();

            store.save(&contacts).await.unwrap();
            assert_eq!(store.load().await.unwrap(), contacts);
        });
    }
}
