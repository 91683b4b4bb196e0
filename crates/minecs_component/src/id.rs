//! Entity identifiers and id sources.
//!
//! An [`EntityId`] is a lightweight `u64` identifier. Ids are handed out by an
//! [`IdSource`] owned by (or injected into) the entity manager, so their
//! lifetime and sharing are explicit rather than process-global.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identity of an entity inside one id sequence.
///
/// Ordering follows creation order; a sequence never hands out the same id
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Reserved; no [`IdSource`] ever returns it.
    pub const INVALID: EntityId = EntityId(0);

    /// Wraps a raw value, e.g. one read back from a snapshot.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// `false` only for [`EntityId::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// A strictly increasing generator of entity ids.
pub trait IdSource: Send {
    /// Returns the next id. Every call returns an id greater than all ids
    /// previously returned by this source.
    fn next_id(&mut self) -> EntityId;
}

/// The id sequence of a single manager. The first id is 1.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    issued: u64,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many ids this allocator has issued.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.issued
    }
}

impl IdSource for EntityAllocator {
    fn next_id(&mut self) -> EntityId {
        self.issued += 1;
        EntityId(self.issued)
    }
}

/// An id sequence shared between several owners.
///
/// Clones draw from the same counter, so entities created through any clone
/// never collide. Use this to give several worlds one id space.
#[derive(Debug, Clone)]
pub struct SharedAllocator {
    next_id: Arc<AtomicU64>,
}

impl SharedAllocator {
    /// Creates a new shared sequence starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Returns the number of ids allocated so far across all clones.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed) - 1
    }
}

impl Default for SharedAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SharedAllocator {
    fn next_id(&mut self) -> EntityId {
        EntityId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_invalid() {
        assert!(!EntityId::INVALID.is_valid());
        assert!(EntityId::from_raw(42).is_valid());
        assert_eq!(EntityId::from_raw(42).id(), 42);
    }

    #[test]
    fn test_allocator_produces_increasing_ids() {
        let mut alloc = EntityAllocator::new();
        let e1 = alloc.next_id();
        let e2 = alloc.next_id();
        let e3 = alloc.next_id();
        assert_eq!(e1.id(), 1);
        assert!(e1 < e2 && e2 < e3);
        assert_eq!(alloc.count(), 3);
    }

    #[test]
    fn test_separate_allocators_are_independent() {
        let mut a = EntityAllocator::new();
        let mut b = EntityAllocator::new();
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn test_shared_allocator_clones_share_sequence() {
        let mut a = SharedAllocator::new();
        let mut b = a.clone();
        let first = a.next_id();
        let second = b.next_id();
        let third = a.next_id();
        assert!(first < second && second < third);
        assert_eq!(a.count(), 3);
        assert_eq!(b.count(), 3);
    }
}
