//! # FFI Bindings
//!
//! C-compatible bindings so the host platform's channel handler can forward
//! bridge calls straight into the router.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         FFI ARCHITECTURE                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Host channel handler (Kotlin/Swift)                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  sms_core_call(method, args)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                      MessageBridge                              │    │
//! │  │                                                                 │    │
//! │  │  getAllConversations │ getMessages │ sendMessage │ unknown      │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  FfiResult carrying the reply envelope JSON                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Bridge-level outcomes (success, `{code, message}` failure, not
//! implemented) travel inside the reply envelope. `FfiResult` errors are
//! reserved for boundary problems: invalid C strings, calling before init.

mod types;

mod state;

mod c_api;

pub use c_api::*;
pub use types::*;
