//! # Error Types
//!
//! Domain-specific error types for rollcall-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rollcall-core errors (this file)                                      │
//! │  ├── CoreError          - General domain errors                        │
//! │  └── RegistrationError  - Registration rejections                      │
//! │                                                                         │
//! │  rollcall-store errors (separate crate)                                │
//! │  └── StoreError         - Snapshot load/save failures                  │
//! │                                                                         │
//! │  App-level errors (rollcall-app)                                       │
//! │  └── ApiError           - What the presentation layer sees             │
//! │                                                                         │
//! │  Flow: RegistrationError → CoreError → ApiError → Caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Every rejection is user-correctable: resubmit corrected input
//!
//! Note that the pricing formula deliberately has NO error type. An unknown
//! plan id prices at zero rather than failing; see [`crate::pricing`].

use thiserror::Error;

// =============================================================================
// Registration Error
// =============================================================================

/// Reasons a registration request is rejected.
///
/// These are surfaced synchronously to the caller at registration time and
/// are never retried automatically. All of them are recoverable by
/// resubmitting corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A required field is missing, empty, or non-numeric where a number
    /// is expected.
    ///
    /// ## When This Occurs
    /// - Empty full name
    /// - National id or age absent or not parseable as a number
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },

    /// National identity number is outside the accepted range.
    ///
    /// ## User Workflow
    /// ```text
    /// Submit form (national id: 1,234,567)
    ///      │
    ///      ▼
    /// Range check: [2,000,000 .. 59,999,999]
    ///      │
    ///      ▼
    /// InvalidNationalId { national_id: 1234567 }
    ///      │
    ///      ▼
    /// UI shows: "national id 1234567 is not a valid identity number"
    /// ```
    #[error("national id {national_id} is not a valid identity number")]
    InvalidNationalId { national_id: u32 },

    /// The registry is full; no registration can be accepted until a member
    /// is removed.
    #[error("membership is at capacity ({max} members)")]
    CapacityExceeded { max: usize },
}

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent business rule violations beyond registration input,
/// e.g. a misbehaving caller pushing members into a full registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Registration rejection (wraps RegistrationError).
    #[error("registration rejected: {0}")]
    Registration(#[from] RegistrationError),

    /// The registry refused an insertion that would break its capacity
    /// invariant. The validated registration path never hits this; it is a
    /// defensive re-assertion against callers that skip validation.
    #[error("registry is full ({max} members)")]
    RegistryFull { max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_error_messages() {
        let err = RegistrationError::MissingRequiredField { field: "full name" };
        assert_eq!(err.to_string(), "full name is required");

        let err = RegistrationError::InvalidNationalId {
            national_id: 1_234_567,
        };
        assert_eq!(
            err.to_string(),
            "national id 1234567 is not a valid identity number"
        );

        let err = RegistrationError::CapacityExceeded { max: 390 };
        assert_eq!(err.to_string(), "membership is at capacity (390 members)");
    }

    #[test]
    fn test_registration_converts_to_core_error() {
        let rejection = RegistrationError::CapacityExceeded { max: 390 };
        let core_err: CoreError = rejection.into();
        assert!(matches!(core_err, CoreError::Registration(_)));
    }
}
