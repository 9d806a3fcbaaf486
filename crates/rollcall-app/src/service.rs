//! # Enrollment Service
//!
//! Owns the process-lifetime registry and exposes the caller-facing
//! contract.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Enrollment Service Operations                        │
//! │                                                                         │
//! │  Caller Action             Service Method          Effects              │
//! │  ─────────────             ──────────────          ───────              │
//! │                                                                         │
//! │  Submit form ────────────► register_member() ───► validate → price →   │
//! │                                                   add → SAVE SNAPSHOT  │
//! │                                                                         │
//! │  Click remove ───────────► remove_member() ─────► remove → SAVE if     │
//! │                                                   anything changed     │
//! │                                                                         │
//! │  Type in search box ─────► search() ────────────► (read only)          │
//! │                                                                         │
//! │  Open reports ───────────► summarize() ─────────► (read only)          │
//! │                                                                         │
//! │  Ask for advice ─────────► request_advice() ────► advisory call,       │
//! │                                                   fallback on failure  │
//! │                                                                         │
//! │  NOTE: All operations acquire the registry Mutex. There is exactly     │
//! │  one logical writer; the lock is what lets concurrent callers share    │
//! │  the service safely, since the core itself assumes a single caller.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Contract
//! The snapshot is rewritten after every successful mutation, so stored
//! state never diverges from memory for more than one operation. A save
//! failure is logged and swallowed: persistence problems are not domain
//! errors and never bounce a registration that already succeeded.

use std::sync::Mutex;

use tracing::{debug, info, warn};

use rollcall_advisor::AdvisoryClient;
use rollcall_core::report::{summarize, RegistrySummary};
use rollcall_core::search::filter;
use rollcall_core::validation::validate;
use rollcall_core::{Member, MemberRegistry};
use rollcall_store::SnapshotStore;

use crate::dto::{MemberDto, RegistrationForm};
use crate::error::ApiError;

/// The enrollment service: registry + store + advisory client.
pub struct EnrollmentService<S: SnapshotStore> {
    registry: Mutex<MemberRegistry>,
    store: S,
    advisor: AdvisoryClient,
}

impl<S: SnapshotStore> EnrollmentService<S> {
    /// Builds the service and hydrates the registry from the store.
    ///
    /// A failed or corrupt snapshot load is logged and treated as an empty
    /// registry: loss of the store is silent and total by contract.
    pub fn new(store: S, advisor: AdvisoryClient) -> Self {
        let mut registry = MemberRegistry::new();
        match store.load() {
            Ok(snapshot) => {
                info!(count = snapshot.len(), "registry hydrated from snapshot");
                registry.hydrate(snapshot);
            }
            Err(err) => {
                warn!(error = %err, "snapshot load failed, starting with empty registry");
            }
        }

        EnrollmentService {
            registry: Mutex::new(registry),
            store,
            advisor,
        }
    }

    /// Registers a new member from raw form fields.
    ///
    /// Pipeline: parse → validate → enroll (price + freeze fee) → add at
    /// front → snapshot. Rejections come back as [`ApiError`] with a
    /// machine-readable code; the caller corrects the form and resubmits.
    pub fn register_member(&self, form: RegistrationForm) -> Result<MemberDto, ApiError> {
        let request = form.into_request();
        let mut registry = self.lock_registry();

        validate(&request, registry.len())?;

        let member = Member::enroll(&request);
        debug!(member_id = %member.id, fee = member.fee.amount(), "member enrolled");

        let member = registry.add(member).map_err(ApiError::from)?.clone();
        self.persist(&registry);

        info!(
            member_id = %member.id,
            location = member.location.code(),
            "member registered"
        );
        Ok(MemberDto::from(&member))
    }

    /// Removes a member by id.
    ///
    /// Returns `true` if a member was removed. Removing an unknown id is a
    /// no-op returning `false`, never an error; the snapshot is only
    /// rewritten when something actually changed.
    pub fn remove_member(&self, id: &str) -> bool {
        let mut registry = self.lock_registry();
        let removed = registry.remove(id);

        if removed {
            self.persist(&registry);
            info!(member_id = %id, "member removed");
        } else {
            debug!(member_id = %id, "remove requested for unknown id, no-op");
        }
        removed
    }

    /// All members, most-recently-registered first.
    pub fn members(&self) -> Vec<MemberDto> {
        let registry = self.lock_registry();
        registry.list().iter().map(MemberDto::from).collect()
    }

    /// Members matching a free-text query, registry order preserved.
    pub fn search(&self, query: &str) -> Vec<MemberDto> {
        let registry = self.lock_registry();
        filter(registry.list(), query)
            .into_iter()
            .map(MemberDto::from)
            .collect()
    }

    /// Aggregate financial view: totals plus the full per-location table.
    pub fn summarize(&self) -> RegistrySummary {
        let registry = self.lock_registry();
        summarize(registry.list())
    }

    /// Asks the advisory service for free-text advice on the current stats.
    ///
    /// Best-effort: always returns a usable string, falling back to the
    /// advisor's fixed message on any failure. Never touches domain state.
    pub async fn request_advice(&self) -> String {
        // Snapshot the summary first so the lock is not held across await
        let summary = self.summarize();
        self.advisor.advise(&summary).await
    }

    /// Current member count (handy for capacity displays).
    pub fn member_count(&self) -> usize {
        self.lock_registry().len()
    }

    fn lock_registry(&self) -> std::sync::MutexGuard<'_, MemberRegistry> {
        self.registry.lock().expect("registry mutex poisoned")
    }

    /// Rewrites the snapshot from the registry's current contents.
    ///
    /// Failures are logged and swallowed: the mutation already succeeded
    /// and persistence problems are local-only by contract.
    fn persist(&self, registry: &MemberRegistry) {
        if let Err(err) = self.store.save(registry.list()) {
            warn!(error = %err, "snapshot save failed, state kept in memory only");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
