//! Append-only storage for submitted contact records.

mod json_file;

pub use json_file::JsonFileStore;

use tracing::debug;

use crate::error::StoreError;
use crate::models::contact::ContactRecord;

/// Trait for record stores.
///
/// Records are never edited in place; `clear` is the only removal path.
pub trait RecordStore {
    /// Add a record. Fails if a record with the same id is already stored.
    fn append(&mut self, record: ContactRecord) -> Result<(), StoreError>;

    /// All records in insertion order.
    fn list(&self) -> Vec<ContactRecord>;

    /// Remove every record.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Records whose name, company or email contain `term`, ignoring case.
    fn search(&self, term: &str) -> Vec<ContactRecord> {
        self.list()
            .into_iter()
            .filter(|r| r.matches_search(term))
            .collect()
    }
}

/// In-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<ContactRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn from_records(records: Vec<ContactRecord>) -> Self {
        Self { records }
    }

    pub(crate) fn records(&self) -> &[ContactRecord] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: ContactRecord) -> Result<(), StoreError> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        debug!("Storing record {}", record.id);
        self.records.push(record);
        Ok(())
    }

    fn list(&self) -> Vec<ContactRecord> {
        self.records.clone()
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        debug!("Clearing {} records", self.records.len());
        self.records.clear();
        Ok(())
    }
}
