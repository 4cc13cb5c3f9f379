//! SQLite-backed store backend.
//!
//! # Responsibility
//! - Persist key-value entries in the migrated `kv_entries` table.
//!
//! # Invariants
//! - The wrapped connection has all migrations applied before first use.
//! - `set_item` is a single upsert; write failures propagate with no
//!   retry.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::store::{KeyValueStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Durable store over a single `kv_entries` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (and migrates) a store database file.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens (and migrates) an in-memory store database.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
