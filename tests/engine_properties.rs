//! Property tests for the discovery engine over random small generators.

mod common;

use common::{functional_graph, permutation, reference_first_repeat, TableModel};
use proptest::prelude::*;
use sfc_cycles::{cycle_shape, Engine, EngineConfig, StateModel};

fn new_engine(model: &TableModel, cache_slots: usize) -> Engine<&TableModel> {
    Engine::new(model, EngineConfig::default().with_cache_slots(cache_slots)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cold_walk_matches_reference(model in functional_graph(8), seed in 0u32..256) {
        let state = model.seed_state(seed);
        let expected = reference_first_repeat(&model, state);
        let walked = new_engine(&model, 1).walk(state).unwrap();
        prop_assert_eq!(walked, expected);
        let shape = cycle_shape(&model, state, model.state_space());
        prop_assert_eq!(shape.map(|s| s.first_repeat()), Some(expected));
    }

    #[test]
    fn prop_walk_visits_distinct_states(model in functional_graph(6), seed in 0u32..64) {
        let mut engine = new_engine(&model, 1);
        let mut state = model.seed_state(seed);
        let length = engine.walk(state).unwrap();

        let mut seen = Vec::new();
        for _ in 0..length {
            seen.push(model.encode(&state));
            model.advance(&mut state);
        }
        let mut distinct = seen.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(distinct.len() as u64, length);
        // One more step lands on a state already seen
        prop_assert!(seen.contains(&model.encode(&state)));
    }

    #[test]
    fn prop_discover_is_deterministic(model in functional_graph(7), seed in 0u32..128) {
        let first = new_engine(&model, 3).discover(seed).unwrap();
        let second = new_engine(&model, 3).discover(seed).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(!first.known);
    }

    #[test]
    fn prop_novel_lengths_match_reference(model in functional_graph(7), slots in 1usize..8) {
        let mut engine = new_engine(&model, slots);
        for result in engine.scan(0..128) {
            let discovery = result.unwrap();
            if !discovery.known {
                let expected = reference_first_repeat(&model, model.seed_state(discovery.seed));
                prop_assert_eq!(discovery.length, expected);
            }
        }
    }

    #[test]
    fn prop_cached_lengths_are_sound_for_permutations(model in permutation(8), slots in 1usize..8) {
        let mut engine = new_engine(&model, slots);
        let mut checker = new_engine(&model, 1);
        for seed in 0..256 {
            let state = model.seed_state(seed);
            if let Some(cached) = engine.cache().lookup(&model, &state) {
                prop_assert_eq!(checker.walk(state).unwrap(), cached);
            }
            let discovery = engine.discover(seed).unwrap();
            prop_assert_eq!(discovery.length, checker.walk(state).unwrap());
        }
    }

    #[test]
    fn prop_cache_never_exceeds_capacity(model in functional_graph(7), slots in 1usize..5) {
        let mut engine = new_engine(&model, slots);
        for seed in 0..128 {
            engine.discover(seed).unwrap();
            prop_assert!(engine.cache().len() <= slots);
            prop_assert_eq!(engine.cache().capacity(), slots);
        }
        let stats = engine.stats();
        prop_assert_eq!(stats.walks + stats.cache_hits, 128);
        prop_assert_eq!(stats.retained - stats.evicted, engine.cache().len() as u64);
    }

    #[test]
    fn prop_full_permutation_seeds_report_once_per_cycle(model in permutation(6)) {
        // With room for every cycle, each cycle is reported by exactly one seed
        let mut engine = new_engine(&model, 64);
        let novel: Vec<_> = engine.scan(0..64).novel().map(Result::unwrap).collect();

        let mut cycle_count = 0;
        let mut covered = vec![false; 64];
        for start in 0..64u32 {
            if covered[start as usize] {
                continue;
            }
            cycle_count += 1;
            let mut state = start;
            while !covered[state as usize] {
                covered[state as usize] = true;
                model.advance(&mut state);
            }
        }
        prop_assert_eq!(novel.len(), cycle_count);
        prop_assert_eq!(novel.iter().map(|d| d.length).sum::<u64>(), 64);
    }
}
