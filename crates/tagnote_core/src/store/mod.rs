//! Synchronous key-value store adapter.
//!
//! # Responsibility
//! - Define the `KeyValueStore` contract mirroring a string-keyed
//!   synchronous storage API.
//! - Provide typed read/write helpers that JSON-encode whole values under
//!   a given key.
//!
//! # Invariants
//! - Reads of an absent key fall back to a caller-supplied default and
//!   write nothing.
//! - A malformed stored value is surfaced as `StoreError::Corrupt`; no
//!   recovery or migration is attempted.
//! - Writes always serialize the full value and overwrite unconditionally.

use crate::db::DbError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Store key holding the serialized note collection.
pub const NOTES_KEY: &str = "NOTES";
/// Store key holding the serialized tag collection.
pub const TAGS_KEY: &str = "TAGS";

pub type StoreResult<T> = Result<T, StoreError>;

/// Adapter-level error for store access and value codec failures.
#[derive(Debug)]
pub enum StoreError {
    /// Backend transport failure, including capacity exhaustion on write.
    Db(DbError),
    /// Stored text under `key` does not deserialize into the expected
    /// shape. Fatal at startup per the store contract.
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
    /// Value failed to serialize before reaching the backend.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { key, source } => {
                write!(f, "malformed stored value under key `{key}`: {source}")
            }
            Self::Encode(err) => write!(f, "failed to encode value for store: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Contract for a synchronous string-keyed storage backend.
///
/// Mirrors the `get_item`/`set_item` surface of browser-style local
/// storage: string keys, string values, no suspension.
pub trait KeyValueStore {
    /// Returns the stored text under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, overwriting any previous contents.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Reads a typed value under `key`, falling back to a produced default.
///
/// The default producer runs only when the key is absent; nothing is
/// written back in that case.
///
/// # Errors
/// - `StoreError::Corrupt` when the stored text fails to deserialize.
pub fn read_or_else<S, T, F>(store: &S, key: &str, default: F) -> StoreResult<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get_item(key)? {
        None => Ok(default()),
        Some(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        }),
    }
}

/// Reads a typed value under `key`, falling back to a literal default.
pub fn read_or<S, T>(store: &S, key: &str, default: T) -> StoreResult<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    read_or_else(store, key, || default)
}

/// Serializes `value` and stores it under `key` unconditionally.
///
/// No diffing and no batching; the backend's own capacity limits apply.
pub fn write<S, T>(store: &mut S, key: &str, value: &T) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let text = serde_json::to_string(value).map_err(StoreError::Encode)?;
    store.set_item(key, &text)?;
    debug!(
        "event=kv_write module=store status=ok key={key} bytes={}",
        text.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_or, read_or_else, write, KeyValueStore, MemoryStore, StoreError};

    #[test]
    fn read_of_absent_key_uses_default_and_writes_nothing() {
        let store = MemoryStore::new();

        let value: Vec<u32> = read_or(&store, "MISSING", vec![7]).unwrap();
        assert_eq!(value, vec![7]);
        assert!(store.is_empty());
    }

    #[test]
    fn default_producer_runs_only_when_key_is_absent() {
        let mut store = MemoryStore::new();
        write(&mut store, "K", &vec![1u32, 2]).unwrap();

        let value: Vec<u32> = read_or_else(&store, "K", || panic!("default must not run")).unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut store = MemoryStore::new();
        write(&mut store, "K", &vec!["a".to_string(), "b".to_string()]).unwrap();

        let value: Vec<String> = read_or(&store, "K", Vec::new()).unwrap();
        assert_eq!(value, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn malformed_stored_text_is_reported_as_corrupt() {
        let mut store = MemoryStore::new();
        store.set_item("K", "not json at all").unwrap();

        let err = read_or::<_, Vec<u32>>(&store, "K", Vec::new()).unwrap_err();
        match err {
            StoreError::Corrupt { key, .. } => assert_eq!(key, "K"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
