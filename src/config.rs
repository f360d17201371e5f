//! Configuration for the discovery engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CACHE_SLOTS;

/// Configuration for [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Number of discovered cycles to retain (default: 7).
    ///
    /// Each retained cycle holds a full membership set, so memory grows
    /// linearly with this value.
    pub cache_slots: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_slots: DEFAULT_CACHE_SLOTS,
        }
    }
}

impl EngineConfig {
    /// Set the number of retained cycles.
    pub fn with_cache_slots(mut self, cache_slots: usize) -> Self {
        self.cache_slots = cache_slots;
        self
    }

    /// Upper bound on membership-set memory for a model of `state_bits`
    /// width: every cache slot plus the scratch set.
    pub fn peak_memory(&self, state_bits: u32) -> u64 {
        let set_bytes = (1u64 << state_bits).div_ceil(64) * 8;
        set_bytes * (self.cache_slots as u64 + 1)
    }
}
