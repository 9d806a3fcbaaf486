//! # Fee Module
//!
//! Provides the `Fee` type for handling membership fee amounts.
//!
//! ## Why Unrounded Floats?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FEE PRECISION CONTRACT                                             │
//! │                                                                         │
//! │  The fee formula multiplies a whole-unit base price by fractional       │
//! │  factors (×0.8 youth discount, ×1.05 card surcharge):                   │
//! │                                                                         │
//! │    premium minor on card:  600 × 0.8 × 1.05 = 504.0                    │
//! │    basic minor on card:    300 × 0.8 × 1.05 = 252.0                    │
//! │    standard minor on card: 450 × 0.8 × 1.05 = 378.0                    │
//! │                                                                         │
//! │  Amounts are stored EXACTLY as produced, fractions included. Rounding   │
//! │  to whole units happens only at display time and never feeds back into  │
//! │  the stored amount, so revenue sums stay reproducible.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rollcall_core::fee::Fee;
//!
//! let fee = Fee::from_amount(504.0);
//!
//! // Aggregation keeps full precision
//! let total = fee + Fee::from_amount(252.0);
//! assert_eq!(total.amount(), 756.0);
//!
//! // Display rounding is cosmetic only
//! assert_eq!(Fee::from_amount(251.99).rounded(), 252);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Fee Type
// =============================================================================

/// A membership fee amount in whole currency units, fractions retained.
///
/// ## Design Decisions
/// - **f64 inner value**: the fee formula is specified over fractional
///   multipliers and the stored amount must match its output exactly
/// - **Single field tuple struct**: zero-cost abstraction, serializes as a
///   bare number in the snapshot dump
/// - **No `Eq`/`Ord`/`Hash`**: floats only get `PartialEq`/`PartialOrd`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Fee(f64);

impl Fee {
    /// Creates a Fee from an exact amount.
    #[inline]
    pub const fn from_amount(amount: f64) -> Self {
        Fee(amount)
    }

    /// Returns the exact, unrounded amount.
    ///
    /// This is the value aggregation must use; see [`crate::report`].
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero fee.
    #[inline]
    pub const fn zero() -> Self {
        Fee(0.0)
    }

    /// Checks if the fee is zero.
    ///
    /// A zero fee is legal: it is what an unknown plan id prices at.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Rounds to whole currency units for display.
    ///
    /// ## Cosmetic Only
    /// The rounded value must never be stored back into a member or summed
    /// into a report; it exists purely so the presentation layer can show
    /// "252" instead of "251.99999999999997".
    #[inline]
    pub fn rounded(&self) -> i64 {
        self.0.round() as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the rounded whole-unit amount.
///
/// ## Note
/// This is for debugging and report text. Use frontend formatting for
/// actual UI display to handle localization properly.
impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

/// Default fee is zero.
impl Default for Fee {
    fn default() -> Self {
        Fee::zero()
    }
}

/// Addition of two Fee values (used by revenue aggregation).
impl Add for Fee {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Fee(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Fee {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Summation over an iterator of fees.
impl Sum for Fee {
    fn sum<I: Iterator<Item = Fee>>(iter: I) -> Self {
        iter.fold(Fee::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
