//! Record store persisted as a JSON array on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::contact::ContactRecord;

use super::{MemoryStore, RecordStore};

/// JSON file backed record store.
///
/// The whole file is loaded on open and rewritten after every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open a store, treating a missing file as empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records: Vec<ContactRecord> = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };

        debug!("Opened store {} with {} records", path.display(), records.len());

        Ok(Self {
            path,
            inner: MemoryStore::from_records(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `staged` to disk, then make it the current state.
    ///
    /// On failure the in-memory records are left untouched.
    fn commit(&mut self, staged: MemoryStore) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(staged.records())?;
        std::fs::write(&self.path, content)?;
        self.inner = staged;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn append(&mut self, record: ContactRecord) -> Result<(), StoreError> {
        let mut staged = self.inner.clone();
        staged.append(record)?;
        self.commit(staged)
    }

    fn list(&self) -> Vec<ContactRecord> {
        self.inner.list()
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(MemoryStore::new())?;
        info!("Cleared store {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactDraft;

    fn record(first: &str) -> ContactRecord {
        ContactRecord::from_draft(ContactDraft {
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("none.json")).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        let first = record("Ann");
        store.append(first.clone()).unwrap();
        store.append(record("Bob")).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let records = reopened.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first);
    }

    #[test]
    fn test_clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.append(record("Ann")).unwrap();
        store.clear().unwrap();

        assert!(JsonFileStore::open(&path).unwrap().list().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_previous_records() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the store's parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = JsonFileStore::open(blocker.join("records.json")).unwrap();
        let err = store.append(record("Ann")).unwrap_err();

        assert!(matches!(err, StoreError::Io(_)));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
