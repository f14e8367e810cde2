use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use llrb_treemap::TreeMap;

const LOAD: u64 = 10_000;

// spread the keys so neither tree degenerates into sequential appends.
fn scrambled(i: u64) -> u64 {
    i.wrapping_mul(2654435761) % (LOAD * 4)
}

fn put_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_10k");

    group.bench_function("llrb_treemap", |b| {
        b.iter(|| {
            let mut map: TreeMap<u64, u64> = TreeMap::new();
            for i in 0..LOAD {
                let _ = map.put(scrambled(i), i);
            }
            black_box(map.len());
        })
    });

    group.bench_function("std_btreemap", |b| {
        b.iter(|| {
            let mut map: BTreeMap<u64, u64> = BTreeMap::new();
            for i in 0..LOAD {
                map.entry(scrambled(i)).or_insert(i);
            }
            black_box(map.len());
        })
    });

    group.finish();
}

fn get_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_10k");

    let mut llrb: TreeMap<u64, u64> = TreeMap::new();
    let mut btree: BTreeMap<u64, u64> = BTreeMap::new();
    for i in 0..LOAD {
        let _ = llrb.put(scrambled(i), i);
        btree.entry(scrambled(i)).or_insert(i);
    }

    group.bench_function("llrb_treemap", |b| {
        b.iter(|| {
            for i in 0..LOAD {
                black_box(llrb.get(&scrambled(i)).ok());
            }
        })
    });

    group.bench_function("std_btreemap", |b| {
        b.iter(|| {
            for i in 0..LOAD {
                black_box(btree.get(&scrambled(i)).copied());
            }
        })
    });

    group.finish();
}

fn poll_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("poll_first_10k");

    group.bench_function("llrb_treemap", |b| {
        b.iter(|| {
            let mut map: TreeMap<u64, u64> = TreeMap::new();
            for i in 0..LOAD {
                let _ = map.put(scrambled(i), i);
            }
            while let Ok(pair) = map.poll_first() {
                black_box(pair);
            }
        })
    });

    group.bench_function("std_btreemap", |b| {
        b.iter(|| {
            let mut map: BTreeMap<u64, u64> = BTreeMap::new();
            for i in 0..LOAD {
                map.entry(scrambled(i)).or_insert(i);
            }
            while let Some(pair) = map.pop_first() {
                black_box(pair);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, put_benchmark, get_benchmark, poll_benchmark);
criterion_main!(benches);
