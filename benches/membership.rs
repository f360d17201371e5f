//! Micro-benchmark for membership set operations.
//!
//! Compares:
//! 1. test_and_set over sequential indices (cache-friendly)
//! 2. test_and_set over random indices (the walk's real access pattern)
//! 3. clear() cost as the set grows

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sfc_cycles::MembershipSet;

fn bench_test_and_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership_test_and_set");

    for bits in [16u32, 20, 24] {
        let len = 1u32 << bits;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let random: Vec<u32> = (0..100_000).map(|_| rng.gen_range(0..len)).collect();
        let sequential: Vec<u32> = (0..100_000u32).map(|i| i % len).collect();

        group.throughput(Throughput::Elements(random.len() as u64));

        for (name, indices) in [("sequential", &sequential), ("random", &random)] {
            group.bench_with_input(
                BenchmarkId::new(name, format!("2^{}", bits)),
                indices,
                |b, indices| {
                    let mut set = MembershipSet::for_state_bits(bits).unwrap();
                    b.iter(|| {
                        let mut hits = 0u32;
                        for &i in indices.iter() {
                            hits += set.test_and_set(black_box(i)) as u32;
                        }
                        black_box(hits)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership_clear");

    for bits in [16u32, 20, 24] {
        let mut set = MembershipSet::for_state_bits(bits).unwrap();
        group.throughput(Throughput::Bytes(set.heap_size() as u64));
        group.bench_function(BenchmarkId::from_parameter(format!("2^{}", bits)), |b| {
            b.iter(|| {
                set.clear();
                black_box(&set);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_test_and_set, bench_clear);
criterion_main!(benches);
