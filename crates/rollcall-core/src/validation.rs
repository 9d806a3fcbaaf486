//! # Validation Engine
//!
//! Registration rule checks for Rollcall.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Pipeline                                │
//! │                                                                         │
//! │  validate(request, registry_len) - ordered, short-circuits on first    │
//! │  failure:                                                               │
//! │                                                                         │
//! │  1. Required fields                                                     │
//! │     ├── full_name non-empty after trim                                  │
//! │     ├── national_id present (numeric)                                   │
//! │     └── age present (numeric)                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. national_id ∈ [2,000,000 .. 59,999,999]                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. registry_len < 390 (capacity)                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Ok(()) ──► enroll                                                      │
//! │                                                                         │
//! │  NOTHING ELSE IS VALIDATED. Absent location/plan/payment-method         │
//! │  default silently - that permissive input space is part of the          │
//! │  contract, do not tighten it here.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a pure decision function over the request and the current
//! registry size; it has no side effects and touches no state.

use crate::error::RegistrationError;
use crate::types::RegistrationRequest;
use crate::{MAX_CAPACITY, NATIONAL_ID_MAX, NATIONAL_ID_MIN};

/// Result type for validation operations.
pub type ValidationResult = Result<(), RegistrationError>;

/// Validates a registration request against the current registry size.
///
/// Checks run in a fixed order and stop at the first failure, so the caller
/// always sees the earliest applicable rejection reason.
///
/// ## Example
/// ```rust
/// use rollcall_core::types::RegistrationRequest;
/// use rollcall_core::validation::validate;
///
/// let request = RegistrationRequest {
///     full_name: "Amira Salem".to_string(),
///     national_id: Some(30_000_000),
///     age: Some(24),
///     ..Default::default()
/// };
/// assert!(validate(&request, 0).is_ok());
/// ```
pub fn validate(request: &RegistrationRequest, registry_len: usize) -> ValidationResult {
    validate_required_fields(request)?;
    validate_national_id(request.national_id.unwrap_or(0))?;
    validate_capacity(registry_len)?;
    Ok(())
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: required fields present and non-empty.
///
/// `national_id` and `age` arrive as `None` when the form field was absent
/// or not numeric; both cases reject with the same reason.
pub fn validate_required_fields(request: &RegistrationRequest) -> ValidationResult {
    if request.full_name.trim().is_empty() {
        return Err(RegistrationError::MissingRequiredField { field: "full name" });
    }

    if request.national_id.is_none() {
        return Err(RegistrationError::MissingRequiredField {
            field: "national id",
        });
    }

    if request.age.is_none() {
        return Err(RegistrationError::MissingRequiredField { field: "age" });
    }

    Ok(())
}

/// Rule 2: national identity number within the accepted range (inclusive).
pub fn validate_national_id(national_id: u32) -> ValidationResult {
    if !(NATIONAL_ID_MIN..=NATIONAL_ID_MAX).contains(&national_id) {
        return Err(RegistrationError::InvalidNationalId { national_id });
    }

    Ok(())
}

/// Rule 3: room for one more member.
pub fn validate_capacity(registry_len: usize) -> ValidationResult {
    if registry_len >= MAX_CAPACITY {
        return Err(RegistrationError::CapacityExceeded { max: MAX_CAPACITY });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
