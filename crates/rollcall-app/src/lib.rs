//! # rollcall-app: Enrollment Service
//!
//! The thin orchestration layer over the Rollcall core: it owns the
//! registry for the process lifetime, wires in the snapshot store and the
//! advisory client, and exposes the operations the presentation layer
//! invokes.
//!
//! ## Public Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Caller-Facing Operations                            │
//! │                                                                         │
//! │  register_member(form)  -> Ok(MemberDto) | Err(ApiError)               │
//! │  remove_member(id)      -> bool (false = unknown id, no-op)            │
//! │  members()              -> Vec<MemberDto>, newest first                │
//! │  search(query)          -> Vec<MemberDto>, registry order              │
//! │  summarize()            -> RegistrySummary (totals + location table)   │
//! │  request_advice()       -> String (advice text or fixed fallback)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dto;
pub mod error;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use dto::{MemberDto, RegistrationForm};
pub use error::{ApiError, ErrorCode};
pub use service::EnrollmentService;
