//! # Data Transfer Objects
//!
//! The shapes that cross the boundary between the service and the excluded
//! presentation layer.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the caller-facing contract
//! - Handles serde rename to camelCase for JS-style consumers
//! - Carries both the exact fee (for any downstream math) and the
//!   display-rounded fee (so rounding stays cosmetic and centralized)

use serde::{Deserialize, Serialize};

use rollcall_core::{LocationCode, Member, PaymentMethod, RegistrationRequest};

// =============================================================================
// Registration Form
// =============================================================================

/// Raw form fields as submitted by the caller.
///
/// All fields are strings because that is what form inputs produce. Parsing
/// happens in [`RegistrationForm::into_request`]; a non-numeric national id
/// or age parses to `None`, which validation rejects as a missing required
/// field. Location, plan, and payment method are permissive: unknown or
/// empty values fall back to defaults instead of rejecting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub plan_id: String,
    #[serde(default)]
    pub payment_method: String,
}

impl RegistrationForm {
    /// Parses the raw form into a typed registration request.
    pub fn into_request(self) -> RegistrationRequest {
        let location = {
            let raw = self.location.trim();
            if raw.is_empty() {
                None
            } else {
                Some(LocationCode::parse_or_default(raw))
            }
        };

        let plan_id = {
            let raw = self.plan_id.trim();
            if raw.is_empty() {
                None
            } else {
                // Unknown plan ids are kept verbatim; they price at zero
                Some(raw.to_string())
            }
        };

        let payment_method = {
            let raw = self.payment_method.trim();
            if raw.is_empty() {
                None
            } else {
                Some(PaymentMethod::parse_or_default(raw))
            }
        };

        RegistrationRequest {
            full_name: self.full_name,
            national_id: self.national_id.trim().parse().ok(),
            age: self.age.trim().parse().ok(),
            location,
            plan_id,
            payment_method,
        }
    }
}

// =============================================================================
// Member DTO
// =============================================================================

/// Member view handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: String,
    pub full_name: String,
    pub national_id: u32,
    pub age: u32,
    pub location: LocationCode,
    pub plan_id: String,
    pub payment_method: PaymentMethod,
    /// Exact stored fee; feeds any downstream aggregation.
    pub fee: f64,
    /// Whole-unit rounded fee for display. Cosmetic only.
    pub fee_display: i64,
    pub joined_at: String,
}

impl From<&Member> for MemberDto {
    fn from(m: &Member) -> Self {
        MemberDto {
            id: m.id.clone(),
            full_name: m.full_name.clone(),
            national_id: m.national_id,
            age: m.age,
            location: m.location,
            plan_id: m.plan_id.clone(),
            payment_method: m.payment_method,
            fee: m.fee.amount(),
            fee_display: m.fee.rounded(),
            joined_at: m.joined_at.to_rfc3339(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
