//! # Store Module
//!
//! The content-store boundary: a read-only query surface over the device's
//! SMS message store.
//!
//! ## Store Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          STORE BOUNDARY                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │  MessageBridge  │  Call router (bridge module)                       │
//! │  └────────┬────────┘                                                    │
//! │           │  SmsStore trait                                             │
//! │           ▼                                                             │
//! │  ┌─────────────────┐     ┌─────────────────────────────────────────┐    │
//! │  │  SqliteSmsStore │ or  │  Host-provided store (content resolver, │    │
//! │  │  (this module)  │     │  implemented by the embedding platform) │    │
//! │  └─────────────────┘     └─────────────────────────────────────────┘    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is an external collaborator: the bridge only ever issues one
//! query shape (full projection, ordered by descending date, optionally
//! windowed) and never mutates it. Hosts with a live platform content
//! resolver implement [`SmsStore`] themselves; hosts that hand the bridge a
//! database path use [`SqliteSmsStore`].

mod sqlite;

pub use sqlite::SqliteSmsStore;

use crate::error::Result;

/// Store configuration
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Path to the database file (None for in-memory)
    pub path: Option<String>,
}

/// A raw row from the message store, using the provider's projection.
///
/// `_id`, `address`, and `body` are nullable at the store; the mapping into
/// [`crate::message::SmsMessage`] turns nulls into empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRow {
    /// Store-assigned row identifier (`_id`)
    pub id: Option<String>,
    /// Originating address
    pub address: Option<String>,
    /// Message body
    pub body: Option<String>,
    /// Date as epoch milliseconds
    pub date: i64,
    /// Message type (`type` column; 1 = inbox, 2 = sent)
    pub message_type: i64,
}

/// A limit/offset window over the date-descending ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    /// Maximum number of rows to return
    pub limit: i64,
    /// Number of rows to skip from the head of the ordering
    pub offset: i64,
}

/// The content-store boundary.
///
/// Implementations must return rows ordered by strictly non-increasing
/// `date`, with the window (when given) applied to that same ordering.
/// Read access only — the bridge never writes through this trait.
pub trait SmsStore {
    /// Query message rows, newest first, optionally windowed.
    fn query_messages(&self, window: Option<QueryWindow>) -> Result<Vec<SmsRow>>;
}
