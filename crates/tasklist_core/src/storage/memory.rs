//! In-memory storage slots.

use super::{StorageError, StorageResult, StorageSlot};
use std::collections::HashMap;

/// `HashMap`-backed slots.
///
/// `fail_reads` / `fail_writes` make the matching calls fail, to exercise
/// unreadable slots and quota-style errors.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with one slot already populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.slots.insert(key.into(), value.into());
        storage
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Returns the raw slot value, bypassing the trait.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl StorageSlot for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::Unavailable(format!(
                "read of slot `{key}` rejected"
            )));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable(format!(
                "write to slot `{key}` rejected"
            )));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}
