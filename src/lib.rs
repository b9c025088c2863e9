//! # SMS Core
//!
//! A cross-platform bridge exposing a device's SMS message store to a UI
//! layer through a small set of named request/response calls.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SMS CORE MODULES                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Host channel (Flutter/Swift/Kotlin)                                    │
//! │         │  method name + JSON argument bag                              │
//! │         ▼                                                               │
//! │  ┌─────────────┐      ┌─────────────┐      ┌──────────────────────┐     │
//! │  │     FFI     │─────►│   Bridge    │─────►│        Store         │     │
//! │  │             │      │             │      │                      │     │
//! │  │ - C API     │      │ - Dispatch  │      │ - SmsStore trait     │     │
//! │  │ - Envelope  │      │ - Defaults  │      │ - SQLite stand-in    │     │
//! │  │ - State     │      │ - Failures  │      │ - date DESC ordering │     │
//! │  └─────────────┘      └──────┬──────┘      └──────────────────────┘     │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                       ┌─────────────┐                                   │
//! │                       │   Message   │  row → transient record           │
//! │                       └─────────────┘                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`message`] - Transient message records and row mapping
//! - [`store`] - The content-store boundary and its SQLite stand-in
//! - [`bridge`] - The call router
//! - [`time`] - Epoch-millisecond handling and ISO-8601 formatting
//!
//! ## Call Contract
//!
//! | Method | Arguments | Reply |
//! |--------|-----------|-------|
//! | `getAllConversations` | — | JSON array of records, newest first |
//! | `getMessages` | `limit?` (20), `offset?` (0) | windowed JSON array |
//! | `sendMessage` | `recipient`, `content` | always fails (unimplemented) |
//! | anything else | — | not implemented |
//!
//! Failures cross the boundary as `{code, message}` with codes `ERROR` and
//! `INVALID_ARGUMENTS`. Every call is synchronous on the caller's thread.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod bridge;
pub mod error;
pub mod message;
pub mod store;
/// Time utilities (epoch milliseconds, ISO-8601 formatting).
pub mod time;

#[cfg(feature = "ffi")]
pub mod ffi;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use bridge::{CallReply, FailureCode, MessageBridge};
pub use error::{Error, Result};
pub use message::SmsMessage;
pub use store::{SmsRow, SmsStore, SqliteSmsStore};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Returns the version of SMS Core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
