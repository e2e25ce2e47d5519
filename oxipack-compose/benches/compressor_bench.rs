//! Performance benchmarks for oxipack-compose
//!
//! Measures the self-describing compressor end to end (delta, packing, tail
//! and envelope) for every scheme on sorted posting-list style arrays.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxipack_compose::{CompressorConfig, IntCompressor, Scheme};
use std::hint::black_box;

mod test_data {
    /// Sorted document ids with small random gaps
    pub fn sorted(size: usize) -> Vec<i32> {
        let mut seed: u64 = 0x2545F4914F6CDD1D;
        let mut value = 0i32;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                value += 1 + ((seed >> 32) % 64) as i32;
                value
            })
            .collect()
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("compressor");

    for size in [1_000usize, 100_000] {
        let data = test_data::sorted(size);
        group.throughput(Throughput::Elements(size as u64));

        for scheme in Scheme::ALL {
            let compressor = IntCompressor::new(CompressorConfig::new(scheme));
            let envelope = compressor.compress(&data).unwrap();

            let id = format!("compress/{}/{}", scheme, size);
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| compressor.compress(black_box(data)).unwrap())
            });

            let id = format!("decompress/{}/{}", scheme, size);
            group.bench_with_input(BenchmarkId::from_parameter(&id), &envelope, |b, env| {
                b.iter(|| compressor.decompress(black_box(env)).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
