//! Shared test models and reference detectors.

#![allow(dead_code)]

use proptest::prelude::*;
use sfc_cycles::StateModel;
use std::collections::HashSet;

/// A generator whose successor function is an explicit table over
/// `2^bits` states. Seeds are masked into the state space.
#[derive(Debug, Clone)]
pub struct TableModel {
    bits: u32,
    next: Vec<u32>,
}

impl TableModel {
    /// Build from a successor table whose length is a power of two.
    pub fn new(next: Vec<u32>) -> Self {
        assert!(next.len().is_power_of_two(), "table must cover 2^bits states");
        let bits = next.len().trailing_zeros();
        assert!(bits >= 1);
        assert!(next.iter().all(|&s| (s as usize) < next.len()));
        Self { bits, next }
    }

    /// Build from a successor function over `2^bits` states.
    pub fn from_fn(bits: u32, f: impl Fn(u32) -> u32) -> Self {
        Self::new((0..1u32 << bits).map(f).collect())
    }

    /// Disjoint rings of the given sizes, laid out back to back. Remaining
    /// states are fixed points.
    pub fn rings(bits: u32, sizes: &[u32]) -> Self {
        let mut next: Vec<u32> = (0..1u32 << bits).collect();
        let mut start = 0u32;
        for &size in sizes {
            for offset in 0..size {
                next[(start + offset) as usize] = start + (offset + 1) % size;
            }
            start += size;
        }
        assert!(start <= 1 << bits, "rings overflow the state space");
        Self::new(next)
    }

    pub fn size(&self) -> u32 {
        self.next.len() as u32
    }
}

impl StateModel for TableModel {
    type State = u32;

    fn state_bits(&self) -> u32 {
        self.bits
    }

    fn seed_state(&self, seed: u32) -> u32 {
        seed & (self.size() - 1)
    }

    fn advance(&self, state: &mut u32) {
        *state = self.next[*state as usize];
    }

    fn encode(&self, state: &u32) -> u32 {
        *state
    }
}

/// Step count to the first repeated encoded state, by brute force.
pub fn reference_first_repeat<M: StateModel>(model: &M, mut state: M::State) -> u64 {
    let mut seen = HashSet::new();
    let mut steps = 0u64;
    while seen.insert(model.encode(&state)) {
        model.advance(&mut state);
        steps += 1;
    }
    steps
}

/// Random functional graph: every state maps to an arbitrary state.
pub fn functional_graph(bits: u32) -> impl Strategy<Value = TableModel> {
    let size = 1u32 << bits;
    prop::collection::vec(0..size, size as usize).prop_map(TableModel::new)
}

/// Random permutation: every state is on a cycle, no tails.
pub fn permutation(bits: u32) -> impl Strategy<Value = TableModel> {
    let size = 1u32 << bits;
    Just((0..size).collect::<Vec<u32>>())
        .prop_shuffle()
        .prop_map(TableModel::new)
}
