//! Time utilities for the bridge.
//!
//! The content store keeps dates as epoch milliseconds; the wire contract
//! carries ISO-8601 strings with millisecond precision and a literal `Z`.

use chrono::{DateTime, TimeZone, Utc};

/// Returns the current Unix timestamp in milliseconds.
pub fn now_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats an epoch-millisecond date as `yyyy-MM-ddTHH:mm:ss.SSSZ` (UTC).
///
/// Out-of-range values (beyond what chrono can represent) fall back to the
/// epoch rather than failing the row — a mapped record never surfaces a
/// formatting error to the host.
pub fn format_timestamp_millis(millis: i64) -> String {
    let dt = Utc
        .timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
