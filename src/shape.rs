//! Constant-memory cycle shape via Brent's algorithm.
//!
//! Splits a trajectory into its pre-periodic tail and its period without a
//! membership set, at the cost of stepping the generator roughly three times
//! as often as a marking walk. The engine never needs this; it serves as an
//! independent check on engine lengths and as a diagnostic for single seeds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::StateModel;

/// Tail and period of the trajectory from one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleShape {
    /// Steps before the trajectory first enters its cycle.
    pub tail: u64,
    /// Length of the cycle itself.
    pub period: u64,
}

impl CycleShape {
    /// Step at which a marking walk sees its first repeat: `tail + period`.
    ///
    /// This is the length [`Engine::discover`](crate::Engine::discover)
    /// reports.
    #[inline]
    pub fn first_repeat(&self) -> u64 {
        self.tail + self.period
    }
}

/// Measure the tail and period of the trajectory starting at `start`.
///
/// States are compared by encoding, matching how the engine detects a
/// repeat. Returns `None` if the first repeat lies more than `limit` steps
/// out. Passing [`StateModel::state_space`] as the limit never gives up on
/// a real trajectory.
pub fn cycle_shape<M: StateModel>(
    model: &M,
    start: M::State,
    limit: u64,
) -> Option<CycleShape> {
    let step = |mut state: M::State| {
        model.advance(&mut state);
        state
    };
    let same = |x: &M::State, y: &M::State| model.encode(x) == model.encode(y);

    // Period: the hare runs ahead in power-of-two windows until it lands on
    // the tortoise.
    let mut power = 1u64;
    let mut period = 1u64;
    let mut tortoise = start;
    let mut hare = step(start);
    while !same(&tortoise, &hare) {
        if power == period {
            tortoise = hare;
            power *= 2;
            period = 0;
        }
        hare = step(hare);
        period += 1;
        if period > limit {
            return None;
        }
    }

    // Tail: start the hare one period ahead and advance both until they meet.
    let mut tortoise = start;
    let mut hare = start;
    for _ in 0..period {
        hare = step(hare);
    }
    let mut tail = 0u64;
    while !same(&tortoise, &hare) {
        tortoise = step(tortoise);
        hare = step(hare);
        tail += 1;
        if tail + period > limit {
            return None;
        }
    }

    (tail + period <= limit).then_some(CycleShape { tail, period })
}
