use std::path::Path;

use rusqlite::{params, Connection};

use super::{KeyValueStore, StoreError};

/// SQLite-backed key-value store — one upsert table, no migrations
/// beyond the initial schema.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at the given path. The parent
    /// directory is created when missing.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        configure_pragmas(&conn)?;
        bootstrap_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        configure_pragmas(&conn)?;
        bootstrap_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Number of stored keys (for verification).
    pub fn count_entries(&self) -> Result<i64, StoreError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn configure_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

fn bootstrap_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv_entries (
             key        TEXT PRIMARY KEY,
             value      TEXT NOT NULL,
             updated_at TEXT NOT NULL
         );",
    )?;
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv_entries WHERE key = ?1")?;
        match stmt.query_row([key], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::from(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.count_entries().unwrap(), 0);
        assert!(store.get("medimart_profile").unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("medimart_language", "\"english\"").unwrap();
        assert_eq!(
            store.get("medimart_language").unwrap().as_deref(),
            Some("\"english\"")
        );
    }

    #[test]
    fn set_upserts() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.count_entries().unwrap(), 1);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medimart.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("medimart_profile", r#"{"name":"Asha"}"#).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("medimart_profile").unwrap().as_deref(),
            Some(r#"{"name":"Asha"}"#)
        );
    }

    #[test]
    fn open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("medimart.db");
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.count_entries().unwrap(), 0);
        assert!(path.exists());
    }

    #[test]
    fn unicode_values_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("medimart_language", "\"hindi\"").unwrap();
        store.set("greeting", "नमस्ते Asha!").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("नमस्ते Asha!"));
    }
}
