//! # Plan Catalog
//!
//! Static reference data: the fee plans and facility locations.
//!
//! ## Immutability Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lifecycle                                 │
//! │                                                                         │
//! │  Process start ──► catalog is fixed ──► process exit                   │
//! │                                                                         │
//! │  • Plans and locations never change while the process runs             │
//! │  • Member fees are frozen at enrollment, so even a future catalog      │
//! │    price change would NOT retroactively alter existing members         │
//! │  • Reports iterate locations in THIS catalog order, always including   │
//! │    zero-member locations                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::types::LocationCode;

// =============================================================================
// Plan
// =============================================================================

/// A named fee tier with a base price.
///
/// Base prices are whole currency units; fractional amounts only appear
/// after the pricing formula applies its multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Business identifier referenced by `Member.plan_id`.
    pub id: &'static str,

    /// Display name shown by the presentation layer.
    pub display_name: &'static str,

    /// Base price in whole currency units.
    pub base_price: u64,
}

/// The fixed plan table, in display order.
const PLANS: &[Plan] = &[
    Plan {
        id: "basic",
        display_name: "Basic",
        base_price: 300,
    },
    Plan {
        id: "standard",
        display_name: "Standard",
        base_price: 450,
    },
    Plan {
        id: "premium",
        display_name: "Premium",
        base_price: 600,
    },
];

/// Plan assigned when a registration request omits one.
pub const DEFAULT_PLAN_ID: &str = "basic";

// =============================================================================
// Lookups
// =============================================================================

/// Returns all plans in catalog order.
pub fn plans() -> &'static [Plan] {
    PLANS
}

/// Looks up a plan by id.
pub fn plan(plan_id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == plan_id)
}

/// Returns the base price for a plan id, or `None` for an unknown id.
///
/// The pricing formula maps `None` to a zero base rather than erroring;
/// see [`crate::pricing::compute_fee`].
pub fn base_price(plan_id: &str) -> Option<u64> {
    plan(plan_id).map(|p| p.base_price)
}

/// Returns all facility locations in their fixed catalog order.
///
/// Report aggregation depends on this order and on the set being complete:
/// every location gets a breakdown row even with zero members.
pub fn locations() -> &'static [LocationCode] {
    LocationCode::ALL
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_lookup() {
        assert_eq!(base_price("basic"), Some(300));
        assert_eq!(base_price("standard"), Some(450));
        assert_eq!(base_price("premium"), Some(600));
        assert_eq!(base_price("platinum"), None);
        assert_eq!(base_price(""), None);
    }

    #[test]
    fn test_default_plan_exists() {
        assert!(plan(DEFAULT_PLAN_ID).is_some());
    }

    #[test]
    fn test_plan_order_is_stable() {
        let ids: Vec<&str> = plans().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["basic", "standard", "premium"]);
    }

    #[test]
    fn test_locations_fixed_order() {
        let codes: Vec<&str> = locations().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["downtown", "riverside", "hillcrest", "westgate"]);
    }
}
