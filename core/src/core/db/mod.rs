//! Database layer for panel storage.
//!
//! A single redb table holds each panel record as a JSON string under
//! its record name.

use crate::core::record::RecordStore;
use crate::core::record::error::StoreError;
use crate::types::Config;
use error::DatabaseError;
use redb::{ReadableDatabase, ReadableTable, TableDefinition};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DatabaseError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Records table: record name → JSON string.
const RECORDS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("records");

/// The main database struct wrapping redb.
pub struct Database {
    db: redb::Database,
}

impl Database {
    /// Creates or opens a database using paths from the config.
    pub fn new(config: &Config) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RECORDS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    fn read_record(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS_TABLE)?;

        match table.get(key)? {
            None => Ok(None),
            Some(guard) => Ok(Some(guard.value().to_string())),
        }
    }

    fn write_record(&mut self, key: &str, json: &str) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.insert(key, json)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn delete_record(&mut self, key: &str) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl RecordStore for Database {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_record(key)?)
    }

    fn write(&mut self, key: &str, json: &str) -> Result<(), StoreError> {
        Ok(self.write_record(key, json)?)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        Ok(self.delete_record(key)?)
    }
}
