//! # API Error Type
//!
//! Unified error type for caller-facing operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Rollcall                               │
//! │                                                                         │
//! │  Caller                       Service Layer                             │
//! │  ──────                       ─────────────                             │
//! │                                                                         │
//! │  register_member(form)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Validation rejection? ── RegistrationError ──► ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store failure? ── logged + swallowed (NEVER an ApiError) ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The caller receives a machine-readable code and a human message:      │
//! │  { "code": "INVALID_NATIONAL_ID",                                      │
//! │    "message": "national id 1234567 is not a valid identity number" }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use rollcall_core::{CoreError, RegistrationError};

/// API error returned from caller-facing operations.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// Every code except `Internal` maps to a user-correctable registration
/// rejection: the caller fixes the input and resubmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required form field was absent, empty, or non-numeric.
    MissingRequiredField,

    /// National identity number outside the accepted range.
    InvalidNationalId,

    /// The registry is at its 390-member ceiling.
    CapacityExceeded,

    /// Unexpected internal failure.
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        let code = match &err {
            RegistrationError::MissingRequiredField { .. } => ErrorCode::MissingRequiredField,
            RegistrationError::InvalidNationalId { .. } => ErrorCode::InvalidNationalId,
            RegistrationError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Registration(rejection) => rejection.into(),
            CoreError::RegistryFull { .. } => ApiError::new(ErrorCode::CapacityExceeded, err.to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_error_mapping() {
        let api: ApiError = RegistrationError::InvalidNationalId {
            national_id: 1_234_567,
        }
        .into();
        assert_eq!(api.code, ErrorCode::InvalidNationalId);
        assert!(api.message.contains("1234567"));

        let api: ApiError = RegistrationError::CapacityExceeded { max: 390 }.into();
        assert_eq!(api.code, ErrorCode::CapacityExceeded);
    }

    #[test]
    fn test_serialized_shape() {
        let api = ApiError::new(ErrorCode::MissingRequiredField, "full name is required");
        let json = serde_json::to_string(&api).unwrap();
        assert!(json.contains("\"code\":\"MISSING_REQUIRED_FIELD\""));
        assert!(json.contains("\"message\":\"full name is required\""));
    }
}
