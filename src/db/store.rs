//! Durable key/value storage for the station, the terminal counterpart of a
//! browser's local storage. Keys are fixed names, writes replace atomically.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub const KEY_TOKEN: &str = "token";
pub const KEY_ROLE: &str = "role";
pub const KEY_EMAIL: &str = "email";
pub const KEY_ISSUED_AT: &str = "issued_at";

pub const SESSION_KEYS: [&str; 4] = [KEY_TOKEN, KEY_ROLE, KEY_EMAIL, KEY_ISSUED_AT];

pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM local_storage WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO local_storage (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

pub fn remove(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
    Ok(())
}

/// Write several keys in one transaction.
pub fn set_many(conn: &mut Connection, entries: &[(&str, &str)]) -> AppResult<()> {
    let tx = conn.transaction()?;
    for (k, v) in entries {
        set(&tx, k, v)?;
    }
    tx.commit()?;
    Ok(())
}

pub fn remove_many(conn: &mut Connection, keys: &[&str]) -> AppResult<()> {
    let tx = conn.transaction()?;
    for k in keys {
        remove(&tx, k)?;
    }
    tx.commit()?;
    Ok(())
}
