//! Seed-range driver.
//!
//! [`Scan`] runs [`Engine::discover`] over a range of seeds in ascending
//! order. Seeds must be visited in order for the output to be reproducible:
//! which seed reports a cycle first depends on what the cache already holds.

use core::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::{Discovery, Engine};
use crate::error::Result;
use crate::state::StateModel;

/// Iterator over discoveries for a seed range. Created by [`Engine::scan`].
///
/// Stops after the first error; allocation failure leaves nothing sensible
/// to continue with.
pub struct Scan<'a, M: StateModel> {
    engine: &'a mut Engine<M>,
    seeds: Range<u32>,
    failed: bool,
}

impl<'a, M: StateModel> Scan<'a, M> {
    pub(crate) fn new(engine: &'a mut Engine<M>, seeds: Range<u32>) -> Self {
        Self {
            engine,
            seeds,
            failed: false,
        }
    }

    /// Keep only seeds that were not already on a known cycle.
    ///
    /// Errors are passed through.
    pub fn novel(self) -> impl Iterator<Item = Result<Discovery>> + 'a
    where
        M: 'a,
    {
        self.filter(|result| !matches!(result, Ok(discovery) if discovery.known))
    }
}

impl<M: StateModel> Iterator for Scan<'_, M> {
    type Item = Result<Discovery>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let seed = self.seeds.next()?;
        let result = self.engine.discover(seed);
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.seeds.size_hint().1)
        }
    }
}

/// Tally of a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanSummary {
    /// Seeds examined.
    pub seeds: u64,
    /// Seeds that walked onto a cycle not in the cache.
    pub novel: u64,
    /// Seeds answered from the cache.
    pub known: u64,
    /// Longest length seen.
    pub longest: u64,
}

impl ScanSummary {
    /// Account for one discovery.
    pub fn record(&mut self, discovery: &Discovery) {
        self.seeds += 1;
        if discovery.known {
            self.known += 1;
        } else {
            self.novel += 1;
        }
        self.longest = self.longest.max(discovery.length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    /// 4-bit model: even states are fixed points, odd states fall to the
    /// even state below.
    struct Pairs;

    impl StateModel for Pairs {
        type State = u8;

        fn state_bits(&self) -> u32 {
            4
        }

        fn seed_state(&self, seed: u32) -> u8 {
            (seed & 0xF) as u8
        }

        fn advance(&self, state: &mut u8) {
            *state &= !1;
        }

        fn encode(&self, state: &u8) -> u32 {
            u32::from(*state)
        }
    }

    #[test]
    fn test_scan_visits_every_seed() {
        let mut engine = Engine::new(Pairs, EngineConfig::default()).unwrap();
        let seeds: Vec<u32> = engine.scan(0..6).map(|r| r.unwrap().seed).collect();
        assert_eq!(seeds, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_novel_skips_known() {
        let mut engine = Engine::new(Pairs, EngineConfig::default()).unwrap();
        // 0 walks {0}; 1 walks {1, 0}; 2 walks {2}; 3 walks {3, 2}
        let novel: Vec<(u32, u64)> = engine
            .scan(0..4)
            .novel()
            .map(|r| r.map(|d| (d.seed, d.length)).unwrap())
            .collect();
        assert_eq!(novel, vec![(0, 1), (1, 2), (2, 1), (3, 2)]);

        // Now every state below 4 is on some cached set
        assert!(engine.scan(0..4).all(|r| r.unwrap().known));
    }

    #[test]
    fn test_summary_counts_known() {
        let mut engine = Engine::new(Pairs, EngineConfig::default()).unwrap();
        let mut summary = ScanSummary::default();
        for _ in 0..2 {
            for result in engine.scan(0..2) {
                summary.record(&result.unwrap());
            }
        }
        assert_eq!(summary.seeds, 4);
        assert_eq!(summary.novel, 2);
        assert_eq!(summary.known, 2);
        assert_eq!(summary.longest, 2);
    }
}
