//! # Bridge Module
//!
//! The call router: dispatches named operations arriving as asynchronous
//! cross-boundary calls from the host channel, and returns a result or a
//! typed failure back across that boundary.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          CALL ROUTING                                   │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Host channel (Flutter/Swift/Kotlin)                                    │
//! │         │  method name + JSON argument bag                              │
//! │         ▼                                                               │
//! │  ┌─────────────────┐       ┌──────────────────────────────────────┐     │
//! │  │  MessageBridge  │──────►│ getAllConversations │ getMessages │  │     │
//! │  │   handle_call   │       │ sendMessage │ (anything else)       │     │
//! │  └─────────────────┘       └──────────────────────────────────────┘     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CallReply: Success(value) │ Failure{code, message} │ NotImplemented    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is handled independently and synchronously on the calling
//! thread. All failures are caught here and converted to a reply; nothing
//! propagates further.

mod dispatcher;
mod reply;

pub use dispatcher::MessageBridge;
pub use reply::{CallReply, FailureCode};
