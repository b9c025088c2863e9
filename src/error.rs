//! # Error Handling
//!
//! Error types for the SMS bridge.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                      │
//! │  │                                                                      │
//! │  ├── Lifecycle Errors                                                   │
//! │  │   ├── NotInitialized        - Bridge not initialized                 │
//! │  │   └── AlreadyInitialized    - Bridge already initialized             │
//! │  │                                                                      │
//! │  ├── Argument Errors                                                    │
//! │  │   ├── InvalidArguments      - Required call arguments missing        │
//! │  │   └── InvalidJson           - Argument bag is not valid JSON         │
//! │  │                                                                      │
//! │  ├── Store Errors                                                       │
//! │  │   ├── StoreQueryFailed      - Content store query failed             │
//! │  │   └── DatabaseError         - Underlying SQLite error                │
//! │  │                                                                      │
//! │  └── Internal Errors                                                    │
//! │      ├── NotImplemented        - Operation deliberately unimplemented   │
//! │      └── SerializationError    - JSON encode/decode failed              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All errors are caught at the call boundary and converted into a reply;
//! nothing propagates past the router (see [`crate::bridge`]).

use thiserror::Error;

/// Result type alias for SMS bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SMS bridge
///
/// Errors are categorized by module/domain to make error handling clearer
/// and to provide meaningful error messages to the host.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Lifecycle Errors (100-199)
    // ========================================================================

    /// Bridge has not been initialized
    #[error("SMS bridge has not been initialized. Call init first.")]
    NotInitialized,

    /// Bridge has already been initialized
    #[error("SMS bridge has already been initialized.")]
    AlreadyInitialized,

    // ========================================================================
    // Argument Errors (200-299)
    // ========================================================================

    /// Required call arguments are missing or of the wrong type
    #[error("{0}")]
    InvalidArguments(String),

    /// Argument bag is not valid JSON
    #[error("Invalid JSON arguments: {0}")]
    InvalidJson(String),

    // ========================================================================
    // Store Errors (400-499)
    // ========================================================================

    /// Content store query failed
    #[error("Store query failed: {0}")]
    StoreQueryFailed(String),

    /// Underlying SQLite error
    #[error("Database error: {0}")]
    DatabaseError(String),

    // ========================================================================
    // Internal Errors (900-999)
    // ========================================================================

    /// Operation is deliberately unimplemented
    #[error("{0}")]
    NotImplemented(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Get the error code for FFI
    ///
    /// Error codes are organized by category:
    /// - 100-199: Lifecycle
    /// - 200-299: Arguments
    /// - 400-499: Store
    /// - 900-999: Internal
    pub fn code(&self) -> i32 {
        match self {
            // Lifecycle (100-199)
            Error::NotInitialized => 100,
            Error::AlreadyInitialized => 101,

            // Arguments (200-299)
            Error::InvalidArguments(_) => 200,
            Error::InvalidJson(_) => 201,

            // Store (400-499)
            Error::StoreQueryFailed(_) => 400,
            Error::DatabaseError(_) => 401,

            // Internal (900-999)
            Error::NotImplemented(_) => 900,
            Error::SerializationError(_) => 901,
        }
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
