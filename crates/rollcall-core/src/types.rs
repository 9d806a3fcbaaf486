//! # Domain Types
//!
//! Core domain types used throughout Rollcall.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │     Member      │   │ RegistrationRequest │   │  LocationCode   │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  full_name          │   │  Downtown       │   │
//! │  │  full_name      │   │  national_id: Opt   │   │  Riverside      │   │
//! │  │  national_id    │   │  age: Opt           │   │  Hillcrest      │   │
//! │  │  fee (frozen)   │   │  location: Opt      │   │  Westgate       │   │
//! │  └─────────────────┘   └─────────────────────┘   └─────────────────┘   │
//! │                                                                         │
//! │                        ┌─────────────────┐                              │
//! │                        │  PaymentMethod  │                              │
//! │                        │  Cash / Card    │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A member has:
//! - `id`: UUID v4 - immutable, unique for the registry lifetime (never
//!   reused after removal)
//! - `national_id`: government-issued number - validated but NOT unique
//!   (two people may legitimately share one in messy real-world data)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog;
use crate::fee::Fee;
use crate::pricing;

// =============================================================================
// Payment Method
// =============================================================================

/// How a member pays their fee.
///
/// The method participates in pricing: card payments carry a 5% surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    Card,
}

impl PaymentMethod {
    /// Parses a form field value. Unknown or empty input defaults to cash,
    /// matching the permissive registration contract.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "card" => PaymentMethod::Card,
            _ => PaymentMethod::Cash,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Location Code
// =============================================================================

/// One of the fixed set of facility locations.
///
/// The set and its order are part of the catalog contract: reports produce
/// a breakdown row for every variant, in this order, zero rows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCode {
    Downtown,
    Riverside,
    Hillcrest,
    Westgate,
}

impl LocationCode {
    /// All locations in fixed catalog order.
    pub const ALL: &'static [LocationCode] = &[
        LocationCode::Downtown,
        LocationCode::Riverside,
        LocationCode::Hillcrest,
        LocationCode::Westgate,
    ];

    /// The wire/display code for this location.
    pub const fn code(&self) -> &'static str {
        match self {
            LocationCode::Downtown => "downtown",
            LocationCode::Riverside => "riverside",
            LocationCode::Hillcrest => "hillcrest",
            LocationCode::Westgate => "westgate",
        }
    }

    /// Parses a form field value. Unknown or empty input defaults to the
    /// first catalog location, matching the permissive registration contract.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "downtown" => LocationCode::Downtown,
            "riverside" => LocationCode::Riverside,
            "hillcrest" => LocationCode::Hillcrest,
            "westgate" => LocationCode::Westgate,
            _ => LocationCode::default(),
        }
    }
}

impl Default for LocationCode {
    fn default() -> Self {
        LocationCode::Downtown
    }
}

// =============================================================================
// Registration Request
// =============================================================================

/// A registration request as parsed from caller form fields.
///
/// ## Optionality Map
/// - `full_name` - required, must be non-empty after trimming
/// - `national_id` / `age` - required, `None` when the field was absent or
///   not numeric (validation rejects with `MissingRequiredField`)
/// - `location` / `plan_id` / `payment_method` - OPTIONAL; absent values
///   default silently rather than rejecting. This permissiveness is part of
///   the accepted-input contract, do not tighten it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub national_id: Option<u32>,
    pub age: Option<u32>,
    pub location: Option<LocationCode>,
    pub plan_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

// =============================================================================
// Member
// =============================================================================

/// A person enrolled in the business.
///
/// ## Fee Freezing
/// `fee` is computed once by the pricing formula at enrollment and never
/// recomputed, even if catalog prices change afterwards. The snapshot store
/// dumps members field-for-field, so a hydrated member carries the exact
/// fee it was enrolled with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier (UUID v4). Never reused, even after removal.
    pub id: String,

    /// Full name as entered on the registration form.
    pub full_name: String,

    /// Government-issued identity number. Validated to the accepted range
    /// at registration; NOT unique across members.
    pub national_id: u32,

    /// Age in whole years at enrollment.
    pub age: u32,

    /// Facility the member enrolled at.
    pub location: LocationCode,

    /// Plan id as accepted at enrollment. May reference a plan the catalog
    /// does not know (such members were priced at a zero base).
    pub plan_id: String,

    /// How the member pays.
    pub payment_method: PaymentMethod,

    /// Fee owed, frozen at enrollment. Unrounded.
    pub fee: Fee,

    /// When the member enrolled.
    pub joined_at: DateTime<Utc>,
}

impl Member {
    /// Builds a member from a validated registration request.
    ///
    /// ## Defaults
    /// Optional request fields resolve here: location falls back to the
    /// first catalog location, plan to [`catalog::DEFAULT_PLAN_ID`], payment
    /// to cash. The fee is computed from the resolved values and frozen.
    ///
    /// ## Precondition
    /// The request must have passed [`crate::validation::validate`]; this
    /// constructor trusts `national_id` and `age` to be present.
    pub fn enroll(request: &RegistrationRequest) -> Member {
        let location = request.location.unwrap_or_default();
        let plan_id = request
            .plan_id
            .clone()
            .unwrap_or_else(|| catalog::DEFAULT_PLAN_ID.to_string());
        let payment_method = request.payment_method.unwrap_or_default();
        let age = request.age.unwrap_or(0);

        let fee = pricing::compute_fee(age, &plan_id, payment_method);

        Member {
            id: Uuid::new_v4().to_string(),
            full_name: request.full_name.trim().to_string(),
            national_id: request.national_id.unwrap_or(0),
            age,
            location,
            plan_id,
            payment_method,
            fee,
            joined_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> RegistrationRequest {
        RegistrationRequest {
            full_name: name.to_string(),
            national_id: Some(30_000_000),
            age: Some(25),
            location: None,
            plan_id: None,
            payment_method: None,
        }
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse_or_default("card"), PaymentMethod::Card);
        assert_eq!(PaymentMethod::parse_or_default("CARD"), PaymentMethod::Card);
        assert_eq!(PaymentMethod::parse_or_default("cash"), PaymentMethod::Cash);
        // Unknown and empty default to cash
        assert_eq!(PaymentMethod::parse_or_default("cheque"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::parse_or_default(""), PaymentMethod::Cash);
    }

    #[test]
    fn test_location_parse() {
        assert_eq!(
            LocationCode::parse_or_default("riverside"),
            LocationCode::Riverside
        );
        assert_eq!(
            LocationCode::parse_or_default(" Westgate "),
            LocationCode::Westgate
        );
        // Unknown and empty default to the first catalog location
        assert_eq!(LocationCode::parse_or_default("mars"), LocationCode::Downtown);
        assert_eq!(LocationCode::parse_or_default(""), LocationCode::Downtown);
    }

    #[test]
    fn test_enroll_applies_defaults() {
        let member = Member::enroll(&request("  Dana Whitfield  "));
        assert_eq!(member.full_name, "Dana Whitfield");
        assert_eq!(member.location, LocationCode::Downtown);
        assert_eq!(member.plan_id, "basic");
        assert_eq!(member.payment_method, PaymentMethod::Cash);
        // Adult on basic paying cash: exactly the base price
        assert_eq!(member.fee.amount(), 300.0);
    }

    #[test]
    fn test_enroll_keeps_unknown_plan_and_prices_zero() {
        let mut req = request("Sam Ortega");
        req.plan_id = Some("platinum".to_string());
        let member = Member::enroll(&req);
        assert_eq!(member.plan_id, "platinum");
        assert!(member.fee.is_zero());
    }

    #[test]
    fn test_enroll_ids_are_unique() {
        let a = Member::enroll(&request("A"));
        let b = Member::enroll(&request("A"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_member_snapshot_roundtrip() {
        let member = Member::enroll(&request("Noor Hassan"));
        let json = serde_json::to_string(&member).unwrap();
        let back: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, member.id);
        assert_eq!(back.fee, member.fee);
        assert_eq!(back.joined_at, member.joined_at);
    }
}
