//! Key/value queries for the session store.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";

impl super::SessionStore {
    /// Reads the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read session value")
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write session value")?;
        Ok(())
    }

    /// Removes `key`. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to remove session value")?;
        Ok(removed > 0)
    }
}
