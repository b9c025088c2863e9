//! # C API
//!
//! C-compatible FFI functions for host platforms.
//!
//! All functions follow the naming convention: `sms_core_<action>`

use std::os::raw::c_char;

use super::state::{get_state, init_state, FfiState};
use super::types::{cstr_to_string, FfiResult};
use crate::bridge::MessageBridge;
use crate::store::{SqliteSmsStore, StoreConfig};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize the SMS bridge.
///
/// Must be called before `sms_core_call`.
///
/// # Arguments
/// * `store_path` - Path to the SQLite message store (null for in-memory)
///
/// # Returns
/// FfiResult with success/error status
///
/// # Safety
/// `store_path` must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn sms_core_init(store_path: *const c_char) -> FfiResult {
    let config = StoreConfig {
        path: cstr_to_string(store_path),
    };

    let store = match SqliteSmsStore::from_config(&config) {
        Ok(store) => store,
        Err(e) => return FfiResult::err(e.code(), e.to_string()),
    };

    let bridge = MessageBridge::new(store);
    if init_state(FfiState::new(bridge)).is_err() {
        return FfiResult::err(101, "Already initialized".to_string());
    }

    tracing::info!(
        "SMS bridge initialized with store: {}",
        config.path.as_deref().unwrap_or("<in-memory>")
    );
    FfiResult::ok_empty()
}

// ============================================================================
// CALL DISPATCH
// ============================================================================

/// Dispatch a bridge call.
///
/// # Arguments
/// * `method` - Method name (e.g. "getAllConversations")
/// * `args` - JSON argument bag (null or empty for no arguments)
///
/// # Returns
/// FfiResult whose data is the reply envelope JSON:
/// `{"status":"success","value":...}`, `{"status":"error","code":...,
/// "message":...}`, or `{"status":"notImplemented"}`.
///
/// # Safety
/// `method` must be a valid null-terminated C string; `args` must be null
/// or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn sms_core_call(
    method: *const c_char,
    args: *const c_char,
) -> FfiResult {
    let method = match cstr_to_string(method) {
        Some(m) => m,
        None => return FfiResult::err(200, "Invalid method name".to_string()),
    };

    let args: serde_json::Value = match cstr_to_string(args) {
        Some(raw) if !raw.is_empty() => match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => return FfiResult::err(201, format!("Invalid JSON arguments: {}", e)),
        },
        _ => serde_json::Value::Null,
    };

    let state = match get_state() {
        Ok(s) => s,
        Err(e) => return FfiResult::err(e.code(), e.to_string()),
    };

    let state = state.read();
    let reply = state.bridge.handle_call(&method, &args);
    FfiResult::ok(reply.to_envelope().to_string())
}

// ============================================================================
// VERSION INFO
// ============================================================================

/// Get the bridge version
#[no_mangle]
pub extern "C" fn sms_core_version() -> *mut c_char {
    std::ffi::CString::new(crate::version())
        .unwrap_or_default()
        .into_raw()
}
