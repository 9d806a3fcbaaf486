//! # Member Registry
//!
//! The authoritative, ordered collection of enrolled members.
//!
//! ## Ownership and Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry Operations                                  │
//! │                                                                         │
//! │  Caller Action              Registry Method        State Change         │
//! │  ─────────────              ───────────────        ────────────         │
//! │                                                                         │
//! │  Register member ─────────► add(member) ─────────► insert at FRONT     │
//! │                                                                         │
//! │  Remove member ───────────► remove(id) ──────────► delete by id        │
//! │                                                     (false if absent)   │
//! │                                                                         │
//! │  Startup hydration ───────► hydrate(snapshot) ───► wholesale replace   │
//! │                                                                         │
//! │  Any read view ───────────► list() ──────────────► (read only)         │
//! │                                                                         │
//! │  Ordering invariant: most-recently-added FIRST. Reports and search     │
//! │  both preserve this order in their derived views.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `len() <= MAX_CAPACITY` (390) at all times
//! - Member ids are unique (UUID v4, never reused after removal)
//! - Duplicate national ids across different members are ALLOWED
//!
//! The registry owns its `Vec<Member>` exclusively. It is not thread-safe
//! by itself; concurrent callers must serialize access around it (the app
//! crate wraps it in a `Mutex` with a single logical writer).

use crate::error::CoreError;
use crate::types::Member;
use crate::MAX_CAPACITY;

/// The ordered, capacity-bounded member collection.
#[derive(Debug, Clone, Default)]
pub struct MemberRegistry {
    /// Members, most-recently-added first.
    members: Vec<Member>,
}

impl MemberRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        MemberRegistry {
            members: Vec::new(),
        }
    }

    /// Adds a member at the front of the sequence.
    ///
    /// ## Defensive Capacity Check
    /// The validated registration path checks capacity before ever building
    /// a `Member`, so this re-assertion never fires there. It exists to stop
    /// a misbehaving caller from pushing the registry past its invariant.
    /// National-id uniqueness is deliberately NOT enforced.
    pub fn add(&mut self, member: Member) -> Result<&Member, CoreError> {
        if self.members.len() >= MAX_CAPACITY {
            return Err(CoreError::RegistryFull { max: MAX_CAPACITY });
        }

        self.members.insert(0, member);
        Ok(&self.members[0])
    }

    /// Removes the member with the given id.
    ///
    /// Returns `true` if a member was removed, `false` if no member matched.
    /// Removing an unknown id is a no-op, never an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() != initial_len
    }

    /// Read-only view of all members, most-recently-added first.
    pub fn list(&self) -> &[Member] {
        &self.members
    }

    /// Replaces the entire collection wholesale from a snapshot.
    ///
    /// Used once at startup from the persistence collaborator. Performs no
    /// validation: the snapshot is trusted to be a faithful dump of a
    /// previously valid registry.
    pub fn hydrate(&mut self, snapshot: Vec<Member>) {
        self.members = snapshot;
    }

    /// Number of active members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the registry has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// How many more members can register before capacity.
    pub fn remaining_capacity(&self) -> usize {
        MAX_CAPACITY.saturating_sub(self.members.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
