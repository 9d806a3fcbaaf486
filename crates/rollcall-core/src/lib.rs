//! # rollcall-core: Pure Business Logic for Rollcall
//!
//! This crate is the **heart** of Rollcall. It contains all enrollment
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rollcall Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (excluded)                  │   │
//! │  │    Register Form ──► Member List ──► Reports ──► Search Box    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rollcall-app (service)                       │   │
//! │  │    register_member, remove_member, search, summarize           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rollcall-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐         │   │
//! │  │   │  types   │ │ pricing  │ │ registry │ │validation│         │   │
//! │  │   │  Member  │ │   Fee    │ │ ordered  │ │  rules   │         │   │
//! │  │   │  Plan    │ │ formula  │ │  add/rm  │ │  checks  │         │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘         │   │
//! │  │   ┌──────────┐ ┌──────────┐                                    │   │
//! │  │   │  report  │ │  search  │                                    │   │
//! │  │   └──────────┘ └──────────┘                                    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          rollcall-store / rollcall-advisor (collaborators)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Member, RegistrationRequest, enums)
//! - [`fee`] - Fee type preserving unrounded amounts
//! - [`catalog`] - Static plan and location reference data
//! - [`pricing`] - The deterministic fee formula
//! - [`validation`] - Registration rule checks
//! - [`registry`] - The ordered, capacity-bounded member collection
//! - [`report`] - Revenue and per-location aggregation
//! - [`search`] - Free-text member filtering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and logging side effects are FORBIDDEN here
//! 3. **Frozen Fees**: A member's fee is computed once at enrollment and never
//!    recomputed, even if catalog prices change later
//! 4. **Explicit Errors**: All rejections are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rollcall_core::pricing::compute_fee;
//! use rollcall_core::types::PaymentMethod;
//!
//! // A 16 year old on the premium plan paying by card:
//! // 600 base, youth discount first, card surcharge second.
//! let fee = compute_fee(16, "premium", PaymentMethod::Card);
//! assert_eq!(fee.amount(), 600.0 * 0.8 * 1.05);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod fee;
pub mod pricing;
pub mod registry;
pub mod report;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rollcall_core::Member` instead of
// `use rollcall_core::types::Member`

pub use error::{CoreError, RegistrationError};
pub use fee::Fee;
pub use registry::MemberRegistry;
pub use report::{LocationBreakdown, RegistrySummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Hard ceiling on simultaneously active members across all locations.
///
/// ## Business Reason
/// Facility insurance caps total active headcount. Registration number 391
/// is rejected with `CapacityExceeded` until someone is removed.
pub const MAX_CAPACITY: usize = 390;

/// Lowest national identity number accepted on registration (inclusive).
pub const NATIONAL_ID_MIN: u32 = 2_000_000;

/// Highest national identity number accepted on registration (inclusive).
pub const NATIONAL_ID_MAX: u32 = 59_999_999;
