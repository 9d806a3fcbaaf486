//! # Pricing Calculator
//!
//! The deterministic membership fee formula.
//!
//! ## The Formula, In Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fee Computation                                  │
//! │                                                                         │
//! │  1. base = catalog base price for plan_id (unknown plan ⇒ 0)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. age < 18?  ──yes──► amount ×= 0.8   (youth discount)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. card?      ──yes──► amount ×= 1.05  (card surcharge)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. return amount, unrounded                                            │
//! │                                                                         │
//! │  ORDER MATTERS: the surcharge applies to the already-discounted         │
//! │  amount. 600 × 0.8 × 1.05 = 504, which is NOT the same float result    │
//! │  as computing the surcharge first. Do not reorder the steps.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The function is pure and total: it never fails and never logs. An
//! unknown plan id silently prices at zero - that permissiveness is part of
//! the contract (registration is not rejected over an unpriceable plan).

use crate::catalog;
use crate::fee::Fee;
use crate::types::PaymentMethod;

/// Age below which the youth discount applies.
pub const YOUTH_AGE_LIMIT: u32 = 18;

/// Youth discount multiplier (20% off).
pub const YOUTH_DISCOUNT: f64 = 0.8;

/// Card surcharge multiplier (5% on top).
pub const CARD_SURCHARGE: f64 = 1.05;

/// Computes the fee owed for a member.
///
/// ## Example
/// ```rust
/// use rollcall_core::pricing::compute_fee;
/// use rollcall_core::types::PaymentMethod;
///
/// // Adult on standard, cash: exactly the base price
/// assert_eq!(compute_fee(30, "standard", PaymentMethod::Cash).amount(), 450.0);
///
/// // Minor on standard, card: discount first, surcharge second
/// assert_eq!(
///     compute_fee(15, "standard", PaymentMethod::Card).amount(),
///     450.0 * 0.8 * 1.05,
/// );
/// ```
pub fn compute_fee(age: u32, plan_id: &str, payment_method: PaymentMethod) -> Fee {
    // Step 1: base price; unknown plan prices at zero, never errors
    let mut amount = catalog::base_price(plan_id).unwrap_or(0) as f64;

    // Step 2: youth discount
    if age < YOUTH_AGE_LIMIT {
        amount *= YOUTH_DISCOUNT;
    }

    // Step 3: card surcharge, applied to the already-discounted amount
    if payment_method == PaymentMethod::Card {
        amount *= CARD_SURCHARGE;
    }

    Fee::from_amount(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
