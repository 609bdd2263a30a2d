//! redb-based storage for cart draft snapshots
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `drafts` | `session_key` | `CartDraft` (JSON) | Latest full draft per POS session |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`; a snapshot is on disk as soon
//! as `save` returns, so the draft survives a process restart or power loss.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::order::CartDraft;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for draft snapshots: key = session key, value = JSON-serialized CartDraft
const DRAFTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("drafts");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Scoped key-value persistence for draft snapshots
///
/// Synchronous from the caller's perspective.
pub trait DraftStore {
    fn load(&self, session_key: &str) -> StorageResult<Option<CartDraft>>;
    fn save(&self, session_key: &str, draft: &CartDraft) -> StorageResult<()>;
    fn remove(&self, session_key: &str) -> StorageResult<()>;
}

/// Draft storage backed by redb
#[derive(Clone)]
pub struct RedbDraftStore {
    db: Arc<Database>,
}

impl RedbDraftStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// In-memory database (tests, kiosk sessions without disk)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DRAFTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl DraftStore for RedbDraftStore {
    fn load(&self, session_key: &str) -> StorageResult<Option<CartDraft>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DRAFTS_TABLE)?;

        match table.get(session_key)? {
            Some(value) => {
                let draft: CartDraft = serde_json::from_slice(value.value())?;
                Ok(Some(draft))
            }
            None => Ok(None),
        }
    }

    fn save(&self, session_key: &str, draft: &CartDraft) -> StorageResult<()> {
        let value = serde_json::to_vec(draft)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            table.insert(session_key, value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, session_key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            table.remove(session_key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
