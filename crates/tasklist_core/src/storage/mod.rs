//! Key-value storage slots holding serialized task lists.
//!
//! # Responsibility
//! - Define the whole-value read/write contract used by the store.
//! - Provide an in-memory slot for tests and a SQLite-backed slot for real
//!   sessions.
//!
//! # Invariants
//! - A slot value is replaced atomically on write; there are no partial
//!   updates.
//! - Reading an absent key is `Ok(None)`, never an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Slot key used when the caller does not choose one.
pub const DEFAULT_SLOT_KEY: &str = "todos";

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a storage slot backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Backend refused the write, e.g. quota exceeded.
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-value key-value persistence.
pub trait StorageSlot {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for &mut S {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
