//! Generic key-value access over the `kv` table.
//!
//! Values are whole-collection JSON serializations under fixed keys; this
//! module knows nothing about what the blobs contain.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

pub fn set(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
    Ok(())
}

pub fn remove(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
    Ok(())
}
