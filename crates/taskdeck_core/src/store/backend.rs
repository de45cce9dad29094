//! Durable storage backends for the serialized task collection.
//!
//! # Responsibility
//! - Expose the read/write contract consumed by the task store.
//! - Keep SQL details behind the storage boundary.
//!
//! # Invariants
//! - The whole collection lives in one record under `STORE_KEY`.
//! - `write` fully replaces prior content.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed namespaced key holding the serialized task collection.
pub const STORE_KEY: &str = "taskdeck.tasks";

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage transport error.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
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

/// Durable storage contract consumed synchronously by the task store.
pub trait StorageBackend {
    /// Reads the stored record, or `None` when nothing was persisted yet.
    fn read(&self) -> StorageResult<Option<String>>;
    /// Replaces the stored record with the given payload.
    fn write(&mut self, payload: &str) -> StorageResult<()>;
}

/// SQLite-backed storage using one row of the `store` key/value table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Wraps a migrated/ready connection obtained from `db::open_db`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl StorageBackend for SqliteStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM store WHERE key = ?1;",
                [STORE_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, payload: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STORE_KEY, payload],
        )?;
        Ok(())
    }
}

/// In-memory backend used by tests and the CLI probe.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Option<String>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.record.clone())
    }

    fn write(&mut self, payload: &str) -> StorageResult<()> {
        self.record = Some(payload.to_string());
        Ok(())
    }
}
