//! Call dispatcher: routes method names to store queries.
//!
//! Handlers keep the behaviour of the original platform channel handler:
//! the same method names, the same defaults, and the same failure messages.

use serde_json::Value;
use tracing::{debug, error};

use super::reply::{CallReply, FailureCode};
use crate::error::{Error, Result};
use crate::message::SmsMessage;
use crate::store::{QueryWindow, SmsStore};

/// Default window size for `getMessages` when `limit` is omitted
pub const DEFAULT_LIMIT: i64 = 20;

/// Default window start for `getMessages` when `offset` is omitted
pub const DEFAULT_OFFSET: i64 = 0;

/// Failure message when `sendMessage` arguments are missing
const MSG_ARGS_REQUIRED: &str = "Recipient and content are required";

/// Failure message for the unimplemented send path
const MSG_SEND_UNIMPLEMENTED: &str = "Sending SMS is not implemented yet";

/// The call router.
///
/// Owns the store handle and dispatches named operations from the host
/// channel. Each call runs synchronously on the calling thread; every
/// failure is caught here and converted into a [`CallReply`].
pub struct MessageBridge<S: SmsStore> {
    store: S,
}

impl<S: SmsStore> MessageBridge<S> {
    /// Create a bridge over a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Dispatch a named call with its JSON argument bag.
    ///
    /// Unknown method names reply [`CallReply::NotImplemented`] without
    /// touching the store.
    pub fn handle_call(&self, method: &str, args: &Value) -> CallReply {
        debug!("Received method call: {}", method);
        match method {
            "getAllConversations" => self.get_all_conversations().map_or_else(
                |e| {
                    error!("Error getting conversations: {}", e);
                    CallReply::from_error(e)
                },
                CallReply::Success,
            ),
            "getMessages" => {
                let limit = opt_i64(args, "limit", DEFAULT_LIMIT);
                let offset = opt_i64(args, "offset", DEFAULT_OFFSET);
                self.get_messages(limit, offset).map_or_else(
                    |e| {
                        error!("Error getting messages: {}", e);
                        CallReply::from_error(e)
                    },
                    CallReply::Success,
                )
            }
            "sendMessage" => self.send_message(args),
            other => {
                debug!("Method not implemented: {}", other);
                CallReply::NotImplemented
            }
        }
    }

    /// Query the full store, newest first, and map every row.
    ///
    /// Despite the wire name this returns all messages, not one row per
    /// thread — behaviour kept from the original handler.
    fn get_all_conversations(&self) -> Result<Value> {
        let rows = self.store.query_messages(None)?;
        debug!("Found {} messages", rows.len());
        let messages: Vec<SmsMessage> = rows.iter().map(SmsMessage::from_row).collect();
        Ok(serde_json::to_value(messages)?)
    }

    /// Query a limit/offset window over the same ordering.
    fn get_messages(&self, limit: i64, offset: i64) -> Result<Value> {
        debug!("Getting messages with limit={}, offset={}", limit, offset);
        let rows = self
            .store
            .query_messages(Some(QueryWindow { limit, offset }))?;
        debug!("Found {} messages", rows.len());
        let messages: Vec<SmsMessage> = rows.iter().map(SmsMessage::from_row).collect();
        Ok(serde_json::to_value(messages)?)
    }

    /// Validate send arguments, then fail: sending is unimplemented.
    ///
    /// Performs no store access on either path.
    fn send_message(&self, args: &Value) -> CallReply {
        let recipient = args["recipient"].as_str();
        let content = args["content"].as_str();

        match (recipient, content) {
            (Some(recipient), Some(_content)) => {
                debug!("Sending message to {}", recipient);
                error!("Error sending message: {}", MSG_SEND_UNIMPLEMENTED);
                CallReply::Failure {
                    code: FailureCode::Error,
                    message: MSG_SEND_UNIMPLEMENTED.to_string(),
                }
            }
            _ => {
                error!("Invalid arguments for sendMessage");
                CallReply::from_error(Error::InvalidArguments(MSG_ARGS_REQUIRED.to_string()))
            }
        }
    }
}

/// Read an optional integer argument, defaulting when absent or not an
/// integer, and clamping negatives to zero so a window can never widen.
fn opt_i64(args: &Value, field: &str, default: i64) -> i64 {
    args[field].as_i64().unwrap_or(default).max(0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MESSAGE_TYPE_INBOX, MESSAGE_TYPE_SENT};
    use crate::store::{SmsRow, SqliteSmsStore};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts queries, for asserting no-store-access properties.
    struct CountingStore {
        queries: AtomicUsize,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                queries: AtomicUsize::new(0),
            }
        }

        fn query_count(&self) -> usize {
            self.queries.load(Ordering::SeqCst)
        }
    }

    impl SmsStore for &CountingStore {
        fn query_messages(&self, _window: Option<QueryWindow>) -> Result<Vec<SmsRow>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    /// Store whose every query fails.
    struct FailingStore;

    impl SmsStore for FailingStore {
        fn query_messages(&self, _window: Option<QueryWindow>) -> Result<Vec<SmsRow>> {
            Err(Error::StoreQueryFailed("permission denied".into()))
        }
    }

    fn seeded_bridge() -> MessageBridge<SqliteSmsStore> {
        let store = SqliteSmsStore::open(None).unwrap();
        // Dates deliberately out of insertion order
        store
            .insert_message(Some("+1"), Some("b"), 2_000, MESSAGE_TYPE_SENT)
            .unwrap();
        store
            .insert_message(Some("+2"), Some("c"), 3_000, MESSAGE_TYPE_INBOX)
            .unwrap();
        store
            .insert_message(Some("+3"), Some("a"), 1_000, MESSAGE_TYPE_INBOX)
            .unwrap();
        MessageBridge::new(store)
    }

    fn expect_messages(reply: CallReply) -> Vec<SmsMessage> {
        match reply {
            CallReply::Success(value) => serde_json::from_value(value).unwrap(),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_get_all_conversations_newest_first() {
        let bridge = seeded_bridge();
        let msgs = expect_messages(bridge.handle_call("getAllConversations", &Value::Null));
        assert_eq!(msgs.len(), 3);
        let timestamps: Vec<&str> = msgs.iter().map(|m| m.timestamp.as_str()).collect();
        let mut sorted = timestamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(timestamps, sorted, "timestamps must be non-increasing");
        assert_eq!(msgs[0].content, "c");
    }

    #[test]
    fn test_get_messages_window_matches_full_ordering() {
        let bridge = seeded_bridge();
        let full = expect_messages(bridge.handle_call("getAllConversations", &Value::Null));
        let windowed = expect_messages(
            bridge.handle_call("getMessages", &json!({ "limit": 2, "offset": 1 })),
        );
        assert_eq!(windowed.len(), 2);
        assert_eq!(windowed[..], full[1..3]);
    }

    #[test]
    fn test_get_messages_returns_at_most_limit() {
        let bridge = seeded_bridge();
        let msgs = expect_messages(bridge.handle_call("getMessages", &json!({ "limit": 1 })));
        assert_eq!(msgs.len(), 1);
    }

    #[test]
    fn test_get_messages_defaults_apply() {
        let bridge = seeded_bridge();
        // Omitted entirely
        let msgs = expect_messages(bridge.handle_call("getMessages", &json!({})));
        assert_eq!(msgs.len(), 3, "default limit of 20 covers all seeded rows");
        // Null argument bag
        let msgs = expect_messages(bridge.handle_call("getMessages", &Value::Null));
        assert_eq!(msgs.len(), 3);
        // Non-integer values fall back to defaults
        let msgs = expect_messages(
            bridge.handle_call("getMessages", &json!({ "limit": "ten", "offset": true })),
        );
        assert_eq!(msgs.len(), 3);
    }

    #[test]
    fn test_get_messages_negative_values_clamp() {
        let bridge = seeded_bridge();
        let msgs = expect_messages(
            bridge.handle_call("getMessages", &json!({ "limit": -5, "offset": -3 })),
        );
        assert!(msgs.is_empty(), "negative limit clamps to an empty window");
    }

    #[test]
    fn test_store_failure_surfaces_as_error_code() {
        let bridge = MessageBridge::new(FailingStore);
        for method in ["getAllConversations", "getMessages"] {
            match bridge.handle_call(method, &Value::Null) {
                CallReply::Failure { code, message } => {
                    assert_eq!(code, FailureCode::Error);
                    assert!(message.contains("permission denied"));
                }
                other => panic!("expected failure for {}, got {:?}", method, other),
            }
        }
    }

    #[test]
    fn test_send_message_missing_arguments() {
        let counting = CountingStore::new();
        let bridge = MessageBridge::new(&counting);

        for args in [
            json!({}),
            json!({ "recipient": "+15551234" }),
            json!({ "content": "hi" }),
            json!({ "recipient": 7, "content": "hi" }),
            Value::Null,
        ] {
            match bridge.handle_call("sendMessage", &args) {
                CallReply::Failure { code, message } => {
                    assert_eq!(code, FailureCode::InvalidArguments);
                    assert_eq!(message, "Recipient and content are required");
                }
                other => panic!("expected invalid-arguments for {}, got {:?}", args, other),
            }
        }
        assert_eq!(counting.query_count(), 0, "validation must not touch the store");
    }

    #[test]
    fn test_send_message_complete_arguments_still_fail() {
        let counting = CountingStore::new();
        let bridge = MessageBridge::new(&counting);

        let args = json!({ "recipient": "+15551234", "content": "hi" });
        match bridge.handle_call("sendMessage", &args) {
            CallReply::Failure { code, message } => {
                assert_eq!(code, FailureCode::Error);
                assert_eq!(message, "Sending SMS is not implemented yet");
            }
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(counting.query_count(), 0, "send must not touch the store");
    }

    #[test]
    fn test_unknown_method_not_implemented() {
        let counting = CountingStore::new();
        let bridge = MessageBridge::new(&counting);

        assert_eq!(
            bridge.handle_call("deleteEverything", &Value::Null),
            CallReply::NotImplemented
        );
        assert_eq!(counting.query_count(), 0, "unknown methods have no side effects");
    }

    #[test]
    fn test_null_row_fields_map_to_empty_strings() {
        let store = SqliteSmsStore::open(None).unwrap();
        store.insert_message(None, None, 1_000, MESSAGE_TYPE_INBOX).unwrap();
        let bridge = MessageBridge::new(store);

        let msgs = expect_messages(bridge.handle_call("getAllConversations", &Value::Null));
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].sender, "");
        assert_eq!(msgs[0].content, "");
        assert!(msgs[0].is_incoming);
    }

    #[test]
    fn test_empty_store_succeeds_with_empty_list() {
        let bridge = MessageBridge::new(SqliteSmsStore::open(None).unwrap());
        let msgs = expect_messages(bridge.handle_call("getAllConversations", &Value::Null));
        assert!(msgs.is_empty());
    }
}
