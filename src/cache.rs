//! Bounded top-K-by-length cache of discovered cycles.
//!
//! Each entry keeps the membership set that was filled while its cycle was
//! found. A later seed whose initial state has its bit set in any retained
//! set lies on (or leads into) that trajectory, so its length is already
//! known and no walk is needed.
//!
//! # Admission
//!
//! Slots are kept in descending length order and admission is a linear
//! insertion: the candidate moves right until it beats a slot, takes that
//! slot, and the displaced entry becomes the candidate for the rest of the
//! row. The chain stops at an empty slot. An entry pushed out of the last
//! slot (or displaced with nowhere left to go) leaves the cache for good and
//! is handed back to the caller to drop.
//!
//! K is small and fixed, so O(K) per offer and per lookup is the whole cost.
//! Every set is hundreds of megabytes; K is what bounds total memory.

use tracing::debug;

use crate::bits::MembershipSet;
use crate::state::StateModel;

/// Number of cycles retained by default.
pub const DEFAULT_CACHE_SLOTS: usize = 7;

/// A retained cycle: the set built while walking it and its length.
#[derive(Debug)]
pub struct CachedCycle {
    set: MembershipSet,
    length: u64,
}

impl CachedCycle {
    /// Steps from the discovering seed to the first repeated state.
    #[inline]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The states visited by the discovering walk.
    #[inline]
    pub fn set(&self) -> &MembershipSet {
        &self.set
    }

    /// Take back the buffer.
    pub fn into_set(self) -> MembershipSet {
        self.set
    }
}

/// Outcome of [`CycleCache::offer`].
///
/// The variants make the buffer's new owner explicit: a rejected set comes
/// back to the caller, a retained one now belongs to the cache.
#[derive(Debug)]
#[must_use]
pub enum Admission {
    /// Nothing changed. The candidate set is returned for reuse.
    Rejected(MembershipSet),
    /// The candidate is now owned by the cache. `evicted` is the entry that
    /// permanently left the cache to make room, if any.
    Retained { evicted: Option<CachedCycle> },
}

impl Admission {
    /// Returns true if the cache took ownership of the offered set.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Retained { .. })
    }
}

/// Up to K retained cycles, ordered longest first.
///
/// Invariants: at most `capacity()` slots are occupied, occupied slots form
/// a prefix, and an occupied slot is only ever replaced by a strictly longer
/// cycle.
#[derive(Debug)]
pub struct CycleCache {
    slots: Vec<Option<CachedCycle>>,
    occupied: usize,
}

impl CycleCache {
    /// Create an empty cache with `slots` positions.
    ///
    /// # Panics
    ///
    /// Panics if `slots` is zero.
    pub fn new(slots: usize) -> Self {
        assert!(slots > 0, "cycle cache needs at least one slot");
        Self {
            slots: (0..slots).map(|_| None).collect(),
            occupied: 0,
        }
    }

    /// Maximum number of retained cycles (K).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Iterate over retained cycles in slot order (longest first).
    pub fn iter(&self) -> impl Iterator<Item = &CachedCycle> + '_ {
        self.slots.iter().flatten()
    }

    /// Lengths of the retained cycles in slot order.
    pub fn lengths(&self) -> impl Iterator<Item = u64> + '_ {
        self.iter().map(CachedCycle::length)
    }

    /// Length of the first retained cycle whose set contains `encoded`.
    ///
    /// Read-only: costs one bit test per occupied slot.
    #[inline]
    pub fn lookup_encoded(&self, encoded: u32) -> Option<u64> {
        self.iter()
            .find(|cycle| cycle.set.test(encoded))
            .map(CachedCycle::length)
    }

    /// [`lookup_encoded`](Self::lookup_encoded) for a model state.
    #[inline]
    pub fn lookup<M: StateModel>(&self, model: &M, state: &M::State) -> Option<u64> {
        self.lookup_encoded(model.encode(state))
    }

    /// Offer a freshly walked set and its length for retention.
    pub fn offer(&mut self, set: MembershipSet, length: u64) -> Admission {
        if self.occupied == 0 {
            debug!(length, slot = 0, "retained first cycle");
            self.slots[0] = Some(CachedCycle { set, length });
            self.occupied = 1;
            return Admission::Retained { evicted: None };
        }

        let last = self.slots.len() - 1;
        let mut candidate = CachedCycle { set, length };
        let mut accepted = false;

        for position in 0..self.slots.len() {
            let stored = self.slots[position].as_ref().map_or(0, CachedCycle::length);
            if candidate.length <= stored {
                continue;
            }

            if !accepted {
                debug!(length, slot = position, "retained cycle");
                accepted = true;
            }

            match self.slots[position].replace(candidate) {
                None => {
                    self.occupied += 1;
                    return Admission::Retained { evicted: None };
                }
                Some(previous) if position == last => {
                    debug!(length = previous.length, "evicted cycle from last slot");
                    return Admission::Retained {
                        evicted: Some(previous),
                    };
                }
                Some(previous) => candidate = previous,
            }
        }

        if accepted {
            // Displaced but outranked by every slot to its right.
            debug!(length = candidate.length, "evicted displaced cycle");
            Admission::Retained {
                evicted: Some(candidate),
            }
        } else {
            Admission::Rejected(candidate.set)
        }
    }

    /// Returns the heap memory held by retained sets, in bytes.
    pub fn heap_size(&self) -> usize {
        self.iter().map(|cycle| cycle.set.heap_size()).sum()
    }
}

impl Default for CycleCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SLOTS)
    }
}
