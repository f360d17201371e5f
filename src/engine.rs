//! Per-seed cycle discovery.
//!
//! [`Engine`] owns the one live scratch set and the cycle cache. For each
//! seed it either answers from the cache or walks the successor function,
//! marking every encoded state, until a state repeats. The walked set is then
//! offered to the cache; if the cache keeps it, a fresh scratch set is
//! allocated for the next walk.
//!
//! The engine is single-threaded and every call runs to completion. If a
//! replacement scratch set cannot be allocated the engine is failed for good:
//! every later call returns the same [`Error::Allocation`]. A walk
//! is bounded by the size of the state space, which pigeonhole makes an exact
//! bound: a walk that reaches it has visited every state, so the first repeat
//! is precisely that step.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::bits::MembershipSet;
use crate::cache::{Admission, CycleCache};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::scan::Scan;
use crate::state::StateModel;
use core::ops::Range;

/// Result of [`Engine::discover`] for one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Discovery {
    /// The seed that was examined.
    pub seed: u32,
    /// Steps from the seed's initial state to the first revisited state
    /// (tail plus period).
    pub length: u64,
    /// True if the answer came from a cached cycle and no walk ran.
    pub known: bool,
}

/// Running counters for an engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineStats {
    /// Walks performed (cache misses plus cold walks).
    pub walks: u64,
    /// Seeds answered from the cache.
    pub cache_hits: u64,
    /// Successor steps taken across all walks.
    pub steps: u64,
    /// Walked sets the cache took ownership of.
    pub retained: u64,
    /// Sets that permanently left the cache.
    pub evicted: u64,
}

/// Cycle discovery engine: scratch set, cycle cache and the model they index.
pub struct Engine<M: StateModel> {
    model: M,
    scratch: MembershipSet,
    cache: CycleCache,
    stats: EngineStats,
    /// Bytes of the scratch allocation that failed, if one did.
    failed: Option<usize>,
}

impl<M: StateModel> Engine<M> {
    /// Create an engine and allocate its scratch set.
    pub fn new(model: M, config: EngineConfig) -> Result<Self> {
        if config.cache_slots == 0 {
            return Err(Error::InvalidConfig("cache_slots must be at least 1"));
        }
        let scratch = MembershipSet::for_state_bits(model.state_bits())?;
        debug!(
            state_bits = model.state_bits(),
            cache_slots = config.cache_slots,
            set_bytes = scratch.heap_size(),
            "engine ready"
        );
        Ok(Self {
            model,
            scratch,
            cache: CycleCache::new(config.cache_slots),
            stats: EngineStats::default(),
            failed: None,
        })
    }

    /// The state model being walked.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The retained cycles.
    #[inline]
    pub fn cache(&self) -> &CycleCache {
        &self.cache
    }

    #[inline]
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Returns true once a scratch allocation has failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed.is_some()
    }

    /// Find the cycle length for `seed`.
    ///
    /// If the seed's initial state is on a retained cycle the cached length
    /// is returned with `known = true` and the scratch set is untouched.
    /// Otherwise the seed is walked and the result offered to the cache.
    ///
    /// A cached length is the length of the walk that filled the set. When
    /// the successor is a bijection (sfc8's is) every state lies on its
    /// cycle and that is exactly what a fresh walk would return.
    ///
    /// Fails only if a replacement scratch set cannot be allocated, or one
    /// already failed; the cache is not consulted after that.
    pub fn discover(&mut self, seed: u32) -> Result<Discovery> {
        self.check_failed()?;
        let state = self.model.seed_state(seed);

        if let Some(length) = self.cache.lookup(&self.model, &state) {
            self.stats.cache_hits += 1;
            return Ok(Discovery {
                seed,
                length,
                known: true,
            });
        }

        let length = self.walk(state)?;
        self.retain_scratch(length)?;

        Ok(Discovery {
            seed,
            length,
            known: false,
        })
    }

    /// Walk from `state` until an encoded state repeats, bypassing the cache.
    ///
    /// Returns the 0-based step at which the repeat was seen, which is the
    /// number of distinct states visited. The walked set is not offered to
    /// the cache.
    pub fn walk(&mut self, mut state: M::State) -> Result<u64> {
        self.check_failed()?;
        self.scratch.clear();

        let limit = self.model.state_space();
        let mut steps = 0u64;
        while steps < limit {
            if self.scratch.test_and_set(self.model.encode(&state)) {
                break;
            }
            self.model.advance(&mut state);
            steps += 1;
        }

        if steps == limit {
            warn!(steps, "walk visited every state without a repeat");
        }
        trace!(steps, "walk complete");

        self.stats.walks += 1;
        self.stats.steps += steps;
        Ok(steps)
    }

    /// Iterate [`discover`](Self::discover) over `seeds` in ascending order.
    pub fn scan(&mut self, seeds: Range<u32>) -> Scan<'_, M> {
        Scan::new(self, seeds)
    }

    /// Offer the just-walked scratch set to the cache.
    fn retain_scratch(&mut self, length: u64) -> Result<()> {
        let scratch = core::mem::replace(&mut self.scratch, MembershipSet::unallocated());

        match self.cache.offer(scratch, length) {
            Admission::Rejected(set) => self.scratch = set,
            Admission::Retained { evicted } => {
                self.stats.retained += 1;
                if let Some(cycle) = evicted {
                    self.stats.evicted += 1;
                    drop(cycle);
                }
                self.replace_scratch()?;
            }
        }
        Ok(())
    }

    /// Allocate a fresh scratch set. A failure is final.
    fn replace_scratch(&mut self) -> Result<()> {
        match MembershipSet::for_state_bits(self.model.state_bits()) {
            Ok(set) => {
                self.scratch = set;
                Ok(())
            }
            Err(err) => {
                if let Error::Allocation { bytes } = err {
                    warn!(bytes, "scratch allocation failed; engine stopped");
                    self.failed = Some(bytes);
                }
                Err(err)
            }
        }
    }

    fn check_failed(&self) -> Result<()> {
        match self.failed {
            Some(bytes) => Err(Error::Allocation { bytes }),
            None => Ok(()),
        }
    }
}

impl<M: StateModel + core::fmt::Debug> core::fmt::Debug for Engine<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("model", &self.model)
            .field("cache", &self.cache)
            .field("stats", &self.stats)
            .field("failed", &self.failed)
            .finish()
    }
}
