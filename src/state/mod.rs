//! Generator state models.
//!
//! The engine only needs three things from a generator: how a seed becomes a
//! state, how a state steps forward, and how a state packs into a `u32`
//! index. [`StateModel`] captures exactly that, so the same walker and cache
//! run over the real [`Sfc8`] generator and over small test graphs.

mod sfc8;

pub use sfc8::{Sfc8, Sfc8State, SFC8_INITIAL_COUNTER, SFC8_SEED_SPACE};

use core::fmt::Debug;

/// A deterministic generator whose state encodes into at most 32 bits.
pub trait StateModel {
    /// One generator state. Owned by the walk that is stepping it.
    type State: Copy + Eq + Debug;

    /// Width of the encoded state space, in bits (1..=32).
    ///
    /// Every value returned by [`encode`](Self::encode) must be below
    /// `2^state_bits()`.
    fn state_bits(&self) -> u32;

    /// Build the initial state for `seed`.
    fn seed_state(&self, seed: u32) -> Self::State;

    /// Step `state` to its successor. Total and pure.
    fn advance(&self, state: &mut Self::State);

    /// Bijective packing of `state` into an index.
    fn encode(&self, state: &Self::State) -> u32;

    /// Number of distinct encoded states: `2^state_bits()`.
    ///
    /// This is also the walk bound, since a trajectory cannot visit more
    /// distinct states than exist.
    #[inline]
    fn state_space(&self) -> u64 {
        1u64 << self.state_bits()
    }
}

impl<M: StateModel + ?Sized> StateModel for &M {
    type State = M::State;

    #[inline]
    fn state_bits(&self) -> u32 {
        (**self).state_bits()
    }

    #[inline]
    fn seed_state(&self, seed: u32) -> Self::State {
        (**self).seed_state(seed)
    }

    #[inline]
    fn advance(&self, state: &mut Self::State) {
        (**self).advance(state)
    }

    #[inline]
    fn encode(&self, state: &Self::State) -> u32 {
        (**self).encode(state)
    }
}
