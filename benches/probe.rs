use std::collections::HashMap as StdHashMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use probe_collections::collections::hash::{fnv1, HashMap};

const SIZES: [u64; 2] = [1_000, 10_000];

fn bench_insert_get_remove_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_get_remove");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("probe", size), &size, |b, &size| {
            b.iter(|| {
                let mut m = HashMap::<u64, u64>::new();
                for i in 0..size { m.insert(i, i); }
                for i in 0..size { let _ = black_box(m.get(&i)); }
                for i in 0..size { let _ = m.remove(&i); }
                black_box(m.cap())
            })
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                let mut m = StdHashMap::<u64, u64>::new();
                for i in 0..size { m.insert(i, i); }
                for i in 0..size { let _ = black_box(m.get(&i)); }
                for i in 0..size { let _ = m.remove(&i); }
                black_box(m.capacity())
            })
        });
    }

    group.finish();
}

fn bench_lookup_presized(c: &mut Criterion) {
    let mut m = HashMap::<u64, u64>::with_cap(1 << 16);
    for i in 0..20_000 { m.insert(i, i); }

    c.bench_function("probe_contains_presized", |b| {
        b.iter(|| {
            let mut hits = 0;
            for i in 0..40_000 {
                if m.contains(&i) { hits += 1; }
            }
            black_box(hits)
        })
    });
}

fn bench_fnv1(c: &mut Criterion) {
    let bytes = [0xab_u8; 64];
    c.bench_function("fnv1_64_bytes", |b| b.iter(|| fnv1(black_box(&bytes))));
}

criterion_group!(benches, bench_insert_get_remove_probe, bench_lookup_presized, bench_fnv1);
criterion_main!(benches);
