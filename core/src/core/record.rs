//! Pluggable record backends for the panel store.

use std::collections::BTreeMap;

use error::StoreError;

pub mod error {
    use crate::core::db::error::DatabaseError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("database error: {0}")]
        Database(#[from] DatabaseError),
    }
}

/// String-keyed JSON record storage.
///
/// The store is handed to `PanelStore` by the embedding application
/// rather than reached through a process-wide handle, so frontends and
/// tests pick the backend.
pub trait RecordStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, json: &str) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and previews. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, json: &str) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.records.remove(key);
        Ok(())
    }
}
