//! The 8-bit Small Fast Counting generator (sfc8).
//!
//! Four `u8` words `a`, `b`, `c` and a counter `d`. The counter guarantees
//! every cycle is a multiple of 256 steps, but says nothing about how many
//! distinct cycles the 2^32 state space splits into, which is what this
//! crate measures.
//!
//! # Seed restriction
//!
//! Seeds fill only `a`, `b` and `c`; the counter always starts at
//! [`SFC8_INITIAL_COUNTER`]. Reachable initial states are therefore a 24-bit
//! slice of the full state space ([`SFC8_SEED_SPACE`] seeds), and a census
//! over all seeds still only starts from that slice.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::StateModel;

/// Counter value every seeded state starts with.
pub const SFC8_INITIAL_COUNTER: u8 = 1;

/// Number of distinct seeds: only the low three bytes of a seed are used.
pub const SFC8_SEED_SPACE: u32 = 1 << 24;

/// One sfc8 state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sfc8State {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    /// Step counter.
    pub d: u8,
}

impl Sfc8State {
    /// Build the initial state for `seed`.
    ///
    /// `a`, `b`, `c` take bytes 0, 1, 2 of the seed; byte 3 is ignored and
    /// `d` is fixed to [`SFC8_INITIAL_COUNTER`].
    #[inline]
    pub fn from_seed(seed: u32) -> Self {
        let [a, b, c, _] = seed.to_le_bytes();
        Self {
            a,
            b,
            c,
            d: SFC8_INITIAL_COUNTER,
        }
    }

    /// Step to the successor state.
    #[inline]
    pub fn advance(&mut self) {
        let t = self.a.wrapping_add(self.b).wrapping_add(self.d);
        self.d = self.d.wrapping_add(1);
        self.a = self.b ^ (self.b >> 2);
        self.b = self.c.wrapping_add(self.c << 1);
        self.c = t.wrapping_add(self.c.rotate_left(3));
    }

    /// Pack into a `u32`: `a` in bits 0-7, `b` 8-15, `c` 16-23, `d` 24-31.
    #[inline]
    pub fn encode(&self) -> u32 {
        u32::from_le_bytes([self.a, self.b, self.c, self.d])
    }

    /// Inverse of [`encode`](Self::encode).
    #[inline]
    pub fn decode(encoded: u32) -> Self {
        let [a, b, c, d] = encoded.to_le_bytes();
        Self { a, b, c, d }
    }
}

/// [`StateModel`] for sfc8 over the full 32-bit state space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sfc8;

impl StateModel for Sfc8 {
    type State = Sfc8State;

    #[inline]
    fn state_bits(&self) -> u32 {
        32
    }

    #[inline]
    fn seed_state(&self, seed: u32) -> Sfc8State {
        Sfc8State::from_seed(seed)
    }

    #[inline]
    fn advance(&self, state: &mut Sfc8State) {
        state.advance();
    }

    #[inline]
    fn encode(&self, state: &Sfc8State) -> u32 {
        state.encode()
    }
}
