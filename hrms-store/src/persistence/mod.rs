//! Persistence mirror
//!
//! Each entity collection is written as one JSON array under its own
//! string key (`hrms_companies`, `hrms_employees`, ...). The store calls
//! [`Persistence::save`] after every successful mutation and
//! [`Persistence::load`] once per key on open.

mod redb_storage;

pub use redb_storage::RedbStorage;

use thiserror::Error;

/// Persistence errors
#[derive(Debug, Error)]
pub enum PersistError {
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

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PersistResult<T> = Result<T, PersistError>;

/// String-keyed durable area holding serialized collections
pub trait Persistence: Send + Sync {
    /// Read the value stored under `key`, `None` if never written
    fn load(&self, key: &str) -> PersistResult<Option<String>>;

    /// Replace the value stored under `key`
    fn save(&self, key: &str, json: &str) -> PersistResult<()>;
}

impl From<PersistError> for shared::AppError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::Serialization(e) => shared::AppError::serialization(e.to_string()),
            other => shared::AppError::storage(other.to_string()),
        }
    }
}
