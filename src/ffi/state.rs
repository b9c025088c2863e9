//! # Shared FFI State
//!
//! Global state shared by the C entry points.
//!
//! The bridge is synchronous by contract — every call runs on the host's
//! channel thread — so unlike a service core there is no runtime here, just
//! the store-backed router.

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::bridge::MessageBridge;
use crate::error::Result;
use crate::store::SqliteSmsStore;

/// Global state
static STATE: OnceCell<Arc<RwLock<FfiState>>> = OnceCell::new();

/// FFI state holding the store-backed bridge
pub(crate) struct FfiState {
    pub bridge: MessageBridge<SqliteSmsStore>,
}

impl FfiState {
    pub fn new(bridge: MessageBridge<SqliteSmsStore>) -> Self {
        Self { bridge }
    }
}

pub(crate) fn get_state() -> Result<Arc<RwLock<FfiState>>> {
    STATE.get().cloned().ok_or(crate::Error::NotInitialized)
}

pub(crate) fn init_state(state: FfiState) -> std::result::Result<(), ()> {
    STATE.set(Arc::new(RwLock::new(state))).map_err(|_| ())
}
