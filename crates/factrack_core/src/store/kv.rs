//! Key-value persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the durable string-keyed storage seam used by record and
//!   session stores.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `set` replaces the whole value for a key in a single statement.
//! - `get` returns exactly what the last `set` wrote, or `None`.
//! - `remove` on an absent key is a no-op.

use crate::store::migrations::latest_version;
use crate::store::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Durable string-keyed storage contract.
///
/// Values are opaque to this layer; record and session stores encode
/// their collections as JSON documents. All operations complete
/// synchronously; there is no pending state observable by callers.
/// Safety against lost updates relies on the single-writer assumption
/// documented at the crate root.
pub trait DurableStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// SQLite-backed durable store over the `kv` table.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }
}

impl DurableStore for SqliteKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE
             SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if version > latest_version() {
        return Err(StoreError::UnsupportedSchemaVersion {
            store_version: version,
            latest_supported: latest_version(),
        });
    }

    if !table_exists(conn, "kv")? {
        return Err(StoreError::MissingRequiredTable("kv"));
    }

    for column in ["key", "value", "updated_at"] {
        if !table_has_column(conn, "kv", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "kv",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
