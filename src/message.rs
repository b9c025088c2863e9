//! # Message Records
//!
//! The transient record returned across the bridge, and its mapping from
//! content-store rows.
//!
//! Records are constructed per query, returned once, and discarded — the
//! bridge never caches them and has no identity for a message beyond the
//! source row.

use serde::{Deserialize, Serialize};

use crate::store::SmsRow;
use crate::time::format_timestamp_millis;

/// Store type value for messages in the inbox (received)
pub const MESSAGE_TYPE_INBOX: i64 = 1;

/// Store type value for sent messages
pub const MESSAGE_TYPE_SENT: i64 = 2;

/// A single SMS message as returned to the UI layer.
///
/// Field names serialize to the wire names the host channel expects
/// (`isIncoming`, not `is_incoming`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessage {
    /// Store-assigned row identifier, empty if absent
    pub id: String,

    /// Originating address, empty if absent
    pub sender: String,

    /// Message body, empty if absent
    pub content: String,

    /// ISO-8601 timestamp derived from the store's epoch-millisecond date
    pub timestamp: String,

    /// True iff the store's type column equals the inbox constant
    #[serde(rename = "isIncoming")]
    pub is_incoming: bool,
}

impl SmsMessage {
    /// Map a store row into a record.
    ///
    /// Null identifier, address, or body map to empty strings — never to a
    /// missing field or a failure.
    pub fn from_row(row: &SmsRow) -> Self {
        Self {
            id: row.id.clone().unwrap_or_default(),
            sender: row.address.clone().unwrap_or_default(),
            content: row.body.clone().unwrap_or_default(),
            timestamp: format_timestamp_millis(row.date),
            is_incoming: row.message_type == MESSAGE_TYPE_INBOX,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
