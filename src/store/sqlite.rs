//! # SQLite Store
//!
//! SQLite-backed stand-in for the device SMS content store.
//!
//! The table mirrors the provider's projection column for column (`_id`,
//! `address`, `body`, `date`, `type`) so host-side ingest can copy rows
//! across unchanged. In-memory databases are used for tests.

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::sync::Arc;

use super::{QueryWindow, SmsRow, SmsStore, StoreConfig};
use crate::error::{Error, Result};

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQL to create all tables
const CREATE_TABLES: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- SMS messages table
-- Column names mirror the platform content provider projection
CREATE TABLE IF NOT EXISTS sms (
    -- Store-assigned row identifier
    _id INTEGER PRIMARY KEY AUTOINCREMENT,
    -- Originating address (nullable at the provider)
    address TEXT,
    -- Message body (nullable at the provider)
    body TEXT,
    -- Date as epoch milliseconds
    date INTEGER NOT NULL,
    -- Message type (1 = inbox, 2 = sent)
    type INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_sms_date ON sms(date DESC);
"#;

/// SQLite-backed message store.
///
/// Wraps a SQLite connection and serves the single query shape the bridge
/// needs. The connection is shared behind a mutex; every statement is
/// scoped and released on all exit paths.
pub struct SqliteSmsStore {
    /// The underlying SQLite connection
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSmsStore {
    /// Open or create a store.
    ///
    /// If path is None, creates an in-memory database (useful for testing).
    pub fn open(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(p) => Connection::open(p)
                .map_err(|e| Error::DatabaseError(format!("Failed to open database: {}", e)))?,
            None => Connection::open_in_memory().map_err(|e| {
                Error::DatabaseError(format!("Failed to create in-memory database: {}", e))
            })?,
        };

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.init_schema()?;

        Ok(store)
    }

    /// Open a store from configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::open(config.path.as_deref())
    }

    /// Initialize the database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock();

        let version: Option<i32> = conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .ok();

        match version {
            None => {
                conn.execute_batch(CREATE_TABLES)
                    .map_err(|e| Error::DatabaseError(format!("Failed to create tables: {}", e)))?;

                conn.execute(
                    "INSERT INTO schema_version (version) VALUES (?)",
                    params![SCHEMA_VERSION],
                )
                .map_err(|e| {
                    Error::DatabaseError(format!("Failed to set schema version: {}", e))
                })?;

                tracing::info!("SMS store schema created (version {})", SCHEMA_VERSION);
            }
            Some(v) => {
                tracing::debug!("SMS store schema version: {}", v);
            }
        }

        Ok(())
    }

    /// Insert a message row.
    ///
    /// Host-side ingest and test seeding only — the bridge never writes.
    /// Returns the store-assigned row id.
    pub fn insert_message(
        &self,
        address: Option<&str>,
        body: Option<&str>,
        date: i64,
        message_type: i64,
    ) -> Result<i64> {
        let conn = self.conn.lock();

        conn.execute(
            "INSERT INTO sms (address, body, date, type) VALUES (?, ?, ?, ?)",
            params![address, body, date, message_type],
        )
        .map_err(|e| Error::DatabaseError(format!("Failed to insert message: {}", e)))?;

        Ok(conn.last_insert_rowid())
    }
}

impl SmsStore for SqliteSmsStore {
    fn query_messages(&self, window: Option<QueryWindow>) -> Result<Vec<SmsRow>> {
        let conn = self.conn.lock();

        // The window is appended to the same date-descending ordering the
        // full query uses, matching the provider's sort clause.
        let sql = match window {
            Some(_) => {
                "SELECT _id, address, body, date, type
                 FROM sms ORDER BY date DESC LIMIT ? OFFSET ?"
            }
            None => {
                "SELECT _id, address, body, date, type
                 FROM sms ORDER BY date DESC"
            }
        };

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| Error::DatabaseError(format!("Failed to prepare query: {}", e)))?;

        let map_row = |row: &rusqlite::Row<'_>| {
            let id: Option<i64> = row.get(0)?;
            Ok(SmsRow {
                id: id.map(|v| v.to_string()),
                address: row.get(1)?,
                body: row.get(2)?,
                date: row.get(3)?,
                message_type: row.get(4)?,
            })
        };

        let rows = match window {
            Some(w) => stmt
                .query_map(params![w.limit, w.offset], map_row)
                .map_err(|e| Error::DatabaseError(format!("Failed to query messages: {}", e)))?
                .collect::<std::result::Result<Vec<_>, _>>(),
            None => stmt
                .query_map([], map_row)
                .map_err(|e| Error::DatabaseError(format!("Failed to query messages: {}", e)))?
                .collect::<std::result::Result<Vec<_>, _>>(),
        };

        rows.map_err(|e| Error::DatabaseError(format!("Failed to read message row: {}", e)))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MESSAGE_TYPE_INBOX, MESSAGE_TYPE_SENT};

    fn seeded_store() -> SqliteSmsStore {
        let store = SqliteSmsStore::open(None).unwrap();
        store
            .insert_message(Some("+1"), Some("oldest"), 1_000, MESSAGE_TYPE_INBOX)
            .unwrap();
        store
            .insert_message(Some("+2"), Some("middle"), 2_000, MESSAGE_TYPE_SENT)
            .unwrap();
        store
            .insert_message(Some("+3"), Some("newest"), 3_000, MESSAGE_TYPE_INBOX)
            .unwrap();
        store
    }

    #[test]
    fn test_empty_store_returns_empty() {
        let store = SqliteSmsStore::open(None).unwrap();
        assert!(store.query_messages(None).unwrap().is_empty());
    }

    #[test]
    fn test_rows_ordered_newest_first() {
        let store = seeded_store();
        let rows = store.query_messages(None).unwrap();
        assert_eq!(rows.len(), 3);
        let dates: Vec<i64> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![3_000, 2_000, 1_000]);
    }

    #[test]
    fn test_window_applies_to_same_ordering() {
        let store = seeded_store();
        let rows = store
            .query_messages(Some(QueryWindow { limit: 2, offset: 1 }))
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].body.as_deref(), Some("middle"));
        assert_eq!(rows[1].body.as_deref(), Some("oldest"));
    }

    #[test]
    fn test_window_limit_caps_row_count() {
        let store = seeded_store();
        let rows = store
            .query_messages(Some(QueryWindow { limit: 1, offset: 0 }))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].body.as_deref(), Some("newest"));
    }

    #[test]
    fn test_offset_past_end_returns_empty() {
        let store = seeded_store();
        let rows = store
            .query_messages(Some(QueryWindow { limit: 20, offset: 10 }))
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_null_address_and_body_survive() {
        let store = SqliteSmsStore::open(None).unwrap();
        store.insert_message(None, None, 500, MESSAGE_TYPE_INBOX).unwrap();
        let rows = store.query_messages(None).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].address.is_none());
        assert!(rows[0].body.is_none());
        assert!(rows[0].id.is_some());
    }

    #[test]
    fn test_file_backed_store_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sms.db");
        let path_str = path.to_str().unwrap();

        {
            let store = SqliteSmsStore::open(Some(path_str)).unwrap();
            store
                .insert_message(Some("+1"), Some("persisted"), 1_000, MESSAGE_TYPE_INBOX)
                .unwrap();
        }

        let store = SqliteSmsStore::open(Some(path_str)).unwrap();
        let rows = store.query_messages(None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].body.as_deref(), Some("persisted"));
    }
}
