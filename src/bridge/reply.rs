//! Reply types for bridge calls.
//!
//! A bridge call is answered with exactly one of three reply kinds, matching
//! the host channel's result contract: a success value, a structured failure
//! `{code, message}`, or "not implemented" for unknown methods. The third
//! kind is a distinct outcome, not an error.

use serde_json::{json, Value};

use crate::error::Error;

/// Wire failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    /// Any underlying failure; the message is passed through
    Error,
    /// Required call arguments are missing
    InvalidArguments,
}

impl FailureCode {
    /// The code string as it crosses the boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::Error => "ERROR",
            FailureCode::InvalidArguments => "INVALID_ARGUMENTS",
        }
    }
}

/// Result of a bridge call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallReply {
    /// The call succeeded; the value is what the host channel returns
    /// (`null` for a successful send)
    Success(Value),
    /// The call failed with a structured `{code, message}` failure
    Failure {
        /// Wire failure code
        code: FailureCode,
        /// Human-readable message, passed through from the underlying error
        message: String,
    },
    /// The method name is not one the bridge implements
    NotImplemented,
}

impl CallReply {
    /// Build a failure reply from a crate error.
    ///
    /// Missing-argument errors keep their dedicated wire code; every other
    /// error collapses to `ERROR` with its message passed through.
    pub fn from_error(err: Error) -> Self {
        let code = match err {
            Error::InvalidArguments(_) => FailureCode::InvalidArguments,
            _ => FailureCode::Error,
        };
        CallReply::Failure {
            code,
            message: err.to_string(),
        }
    }

    /// Whether this reply is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, CallReply::Success(_))
    }

    /// Single-string envelope form for hosts that consume one JSON payload
    /// instead of a three-way channel result.
    pub fn to_envelope(&self) -> Value {
        match self {
            CallReply::Success(value) => json!({
                "status": "success",
                "value": value,
            }),
            CallReply::Failure { code, message } => json!({
                "status": "error",
                "code": code.as_str(),
                "message": message,
            }),
            CallReply::NotImplemented => json!({
                "status": "notImplemented",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_codes_are_wire_strings() {
        assert_eq!(FailureCode::Error.as_str(), "ERROR");
        assert_eq!(FailureCode::InvalidArguments.as_str(), "INVALID_ARGUMENTS");
    }

    #[test]
    fn test_invalid_arguments_keeps_code() {
        let reply = CallReply::from_error(Error::InvalidArguments(
            "Recipient and content are required".into(),
        ));
        match reply {
            CallReply::Failure { code, message } => {
                assert_eq!(code, FailureCode::InvalidArguments);
                assert_eq!(message, "Recipient and content are required");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_store_error_collapses_to_error_code() {
        let reply = CallReply::from_error(Error::DatabaseError("disk I/O error".into()));
        match reply {
            CallReply::Failure { code, message } => {
                assert_eq!(code, FailureCode::Error);
                assert!(message.contains("disk I/O error"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_success_envelope() {
        let env = CallReply::Success(Value::Null).to_envelope();
        assert_eq!(env["status"], "success");
        assert!(env["value"].is_null());
    }

    #[test]
    fn test_error_envelope() {
        let env = CallReply::Failure {
            code: FailureCode::Error,
            message: "boom".into(),
        }
        .to_envelope();
        assert_eq!(env["status"], "error");
        assert_eq!(env["code"], "ERROR");
        assert_eq!(env["message"], "boom");
    }

    #[test]
    fn test_not_implemented_envelope() {
        let env = CallReply::NotImplemented.to_envelope();
        assert_eq!(env["status"], "notImplemented");
        assert!(env.get("code").is_none());
    }
}
