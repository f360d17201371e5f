//! Dense bit-per-state membership set.
//!
//! One bit for every encoded state a walk can produce. For the full 32-bit
//! sfc8 state space this is 2^32 bits (512 MiB), so the set is allocated
//! fallibly and cleared in place rather than reallocated between walks.
//!
//! # Layout
//!
//! Bit `i` lives in word `i >> 6` at position `i & 63`, the same LSB-first
//! word order the rest of the crate's bit code uses.

use crate::error::{Error, Result};

/// Largest number of entries a set can cover: every `u32` index.
pub const MAX_LEN: u64 = 1 << 32;

#[inline]
fn word_index(index: u32) -> usize {
    (index >> 6) as usize
}

#[inline]
fn bit_mask(index: u32) -> u64 {
    1u64 << (index & 0x3F)
}

/// A fixed-size bit array indexed by encoded state.
///
/// Invariant: bit `e` is set iff encoded state `e` has been visited by the
/// walk that filled this set. Once a set is handed to the cycle cache it is
/// never mutated again.
#[derive(Clone, PartialEq, Eq)]
pub struct MembershipSet {
    words: Vec<u64>,
    len: u64,
}

impl MembershipSet {
    /// Allocate a zeroed set covering indices `[0, len)`.
    ///
    /// Returns [`Error::Allocation`] if the backing buffer cannot be
    /// reserved, and [`Error::InvalidConfig`] if `len` exceeds the `u32`
    /// index space.
    pub fn try_new(len: u64) -> Result<Self> {
        if len > MAX_LEN {
            return Err(Error::InvalidConfig(
                "membership set cannot exceed 2^32 entries",
            ));
        }

        let word_count = len.div_ceil(64) as usize;
        let mut words = Vec::new();
        words
            .try_reserve_exact(word_count)
            .map_err(|_| Error::Allocation {
                bytes: word_count * core::mem::size_of::<u64>(),
            })?;
        words.resize(word_count, 0);

        Ok(Self { words, len })
    }

    /// Allocate a set covering every index of a `bits`-wide encoding.
    pub fn for_state_bits(bits: u32) -> Result<Self> {
        if bits == 0 || bits > 32 {
            return Err(Error::InvalidConfig("state width must be 1..=32 bits"));
        }
        Self::try_new(1u64 << bits)
    }

    /// A set with no backing storage. Holds the scratch slot while the real
    /// buffer is on loan to the cache.
    pub(crate) fn unallocated() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the set covers no indices at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set the bit at `index`, returning whether it was already set.
    ///
    /// The first `true` during a walk marks the revisited state.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn test_and_set(&mut self, index: u32) -> bool {
        self.check_index(index);
        let mask = bit_mask(index);
        let word = &mut self.words[word_index(index)];
        let was_set = *word & mask != 0;
        *word |= mask;
        was_set
    }

    /// Check whether the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn test(&self, index: u32) -> bool {
        self.check_index(index);
        self.words[word_index(index)] & bit_mask(index) != 0
    }

    // Word indexing alone would accept padding bits past `len`.
    #[inline]
    fn check_index(&self, index: u32) {
        assert!(
            u64::from(index) < self.len,
            "index {} out of range for set of {}",
            index,
            self.len
        );
    }

    /// Reset every bit to unset.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of set bits (states visited).
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Returns the heap memory usage in bytes.
    pub fn heap_size(&self) -> usize {
        self.words.len() * core::mem::size_of::<u64>()
    }
}

impl core::fmt::Debug for MembershipSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Printing half a gigabyte of words helps nobody.
        f.debug_struct("MembershipSet")
            .field("len", &self.len)
            .field("heap_size", &self.heap_size())
            .finish()
    }
}
