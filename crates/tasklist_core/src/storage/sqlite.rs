//! SQLite-backed storage slots.
//!
//! # Invariants
//! - Writes are single-statement upserts, so a slot is never half-written.
//! - The connection must come from `db::open_db*` so the slot table exists.

use super::{StorageResult, StorageSlot};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Storage slots persisted in the `storage_slots` table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Wraps a migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl StorageSlot for SqliteStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO storage_slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        debug!(
            "event=slot_write module=storage status=ok backend=sqlite bytes={}",
            value.len()
        );
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM storage_slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
