//! SQLite key/value storage for the app state and device token

use std::path::Path;

use chrono::Utc;
use daily_core::store::{decode, encode};
use daily_core::{AppState, StateStore, StoreError, STORAGE_KEY};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;

/// Key the registered push token is stored under.
pub const FCM_TOKEN_KEY: &str = "fcm-token";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Key/value store over a single SQLite connection
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get a raw value by key
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or replace a raw value
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Delete a value. Returns true if a row was removed.
    pub fn delete_value(&self, key: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }

    /// Registered push token, if any
    pub fn fcm_token(&self) -> Result<Option<String>> {
        self.get_value(FCM_TOKEN_KEY)
    }

    pub fn set_fcm_token(&self, token: &str) -> Result<()> {
        self.set_value(FCM_TOKEN_KEY, token)
    }
}

fn unavailable(e: crate::error::ApiError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

impl StateStore for SqliteStore {
    fn load(&self) -> daily_core::Result<Option<AppState>> {
        self.get_value(STORAGE_KEY)
            .map_err(unavailable)?
            .as_deref()
            .map(decode)
            .transpose()
    }

    fn save(&self, state: &AppState) -> daily_core::Result<()> {
        let payload = encode(state)?;
        self.set_value(STORAGE_KEY, &payload).map_err(unavailable)
    }

    fn clear(&self) -> daily_core::Result<()> {
        self.delete_value(STORAGE_KEY).map_err(unavailable)?;
        Ok(())
    }
}
