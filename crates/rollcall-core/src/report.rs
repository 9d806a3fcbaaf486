//! # Report Aggregator
//!
//! Derives revenue and per-location breakdowns from the registry's current
//! contents.
//!
//! ## Aggregation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      summarize(members)                                 │
//! │                                                                         │
//! │  total_count:   number of members                                       │
//! │  total_revenue: Σ fee over all members (exact, unrounded)               │
//! │  per_location:  ONE ROW PER CATALOG LOCATION, in catalog order,        │
//! │                 including locations with zero members                   │
//! │                                                                         │
//! │  ┌──────────────┬───────┬─────────┐                                    │
//! │  │ location     │ count │ income  │                                    │
//! │  ├──────────────┼───────┼─────────┤                                    │
//! │  │ downtown     │   12  │ 4200.0  │                                    │
//! │  │ riverside    │    0  │    0.0  │  ◄── zero rows are kept            │
//! │  │ hillcrest    │    3  │  930.0  │                                    │
//! │  │ westgate     │    0  │    0.0  │                                    │
//! │  └──────────────┴───────┴─────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure function of the member list: no hidden state, recomputed on every
//! call. Sums use the exact stored fee amounts, never display-rounded
//! values.

use serde::Serialize;

use crate::catalog;
use crate::fee::Fee;
use crate::types::{LocationCode, Member};

// =============================================================================
// Summary Types
// =============================================================================

/// Per-location slice of the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationBreakdown {
    /// The facility this row describes.
    pub location: LocationCode,

    /// Members enrolled at this facility.
    pub count: usize,

    /// Sum of their fees, exact.
    pub income: Fee,
}

/// Aggregate financial view of the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrySummary {
    /// Number of active members.
    pub total_count: usize,

    /// Sum of all member fees, exact.
    pub total_revenue: Fee,

    /// One row per catalog location, in catalog order, zero rows included.
    pub per_location: Vec<LocationBreakdown>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Summarizes the given member list.
///
/// ## Example
/// ```rust
/// use rollcall_core::report::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.total_count, 0);
/// assert_eq!(summary.total_revenue.amount(), 0.0);
/// // Every catalog location is present even on an empty registry
/// assert_eq!(summary.per_location.len(), 4);
/// ```
pub fn summarize(members: &[Member]) -> RegistrySummary {
    let total_revenue: Fee = members.iter().map(|m| m.fee).sum();

    let per_location = catalog::locations()
        .iter()
        .map(|&location| {
            let mut count = 0;
            let mut income = Fee::zero();
            for member in members.iter().filter(|m| m.location == location) {
                count += 1;
                income += member.fee;
            }
            LocationBreakdown {
                location,
                count,
                income,
            }
        })
        .collect();

    RegistrySummary {
        total_count: members.len(),
        total_revenue,
        per_location,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentMethod, RegistrationRequest};

    fn member(name: &str, location: LocationCode, plan: &str) -> Member {
        Member::enroll(&RegistrationRequest {
            full_name: name.to_string(),
            national_id: Some(30_000_000),
            age: Some(25),
            location: Some(location),
            plan_id: Some(plan.to_string()),
            payment_method: Some(PaymentMethod::Cash),
        })
    }

    #[test]
    fn test_empty_registry_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.total_revenue, Fee::zero());

        // Every location present, all rows zeroed
        assert_eq!(summary.per_location.len(), catalog::locations().len());
        for row in &summary.per_location {
            assert_eq!(row.count, 0);
            assert_eq!(row.income, Fee::zero());
        }
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let summary = summarize(&[member("A", LocationCode::Westgate, "basic")]);
        let order: Vec<LocationCode> = summary.per_location.iter().map(|r| r.location).collect();
        assert_eq!(order, catalog::locations().to_vec());
    }

    #[test]
    fn test_totals_and_breakdown() {
        let members = vec![
            member("A", LocationCode::Downtown, "basic"),    // 300
            member("B", LocationCode::Downtown, "premium"),  // 600
            member("C", LocationCode::Hillcrest, "standard"), // 450
        ];
        let summary = summarize(&members);

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.total_revenue.amount(), 1350.0);

        let downtown = &summary.per_location[0];
        assert_eq!(downtown.location, LocationCode::Downtown);
        assert_eq!(downtown.count, 2);
        assert_eq!(downtown.income.amount(), 900.0);

        let riverside = &summary.per_location[1];
        assert_eq!(riverside.count, 0);
        assert_eq!(riverside.income, Fee::zero());

        let hillcrest = &summary.per_location[2];
        assert_eq!(hillcrest.count, 1);
        assert_eq!(hillcrest.income.amount(), 450.0);
    }

    #[test]
    fn test_sums_use_exact_fees() {
        // A minor on card carries a fractional-capable fee; the sum must be
        // the exact float sum, not a sum of display-rounded values
        let mut request = RegistrationRequest {
            full_name: "Minor".to_string(),
            national_id: Some(30_000_000),
            age: Some(15),
            location: Some(LocationCode::Downtown),
            plan_id: Some("basic".to_string()),
            payment_method: Some(PaymentMethod::Card),
        };
        let a = Member::enroll(&request);
        request.full_name = "Minor Two".to_string();
        let b = Member::enroll(&request);

        let summary = summarize(&[a.clone(), b.clone()]);
        assert_eq!(
            summary.total_revenue.amount(),
            a.fee.amount() + b.fee.amount()
        );
    }
}
