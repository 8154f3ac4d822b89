#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use probemap::{ChainingMap, OpenAddressingMap, hash_function_2};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;
const INITIAL_CAPACITY: usize = 64;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = proptest::collection::vec(("[a-z]{1,12}", any::<u32>()), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Collision strategy comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut open_map = OpenAddressingMap::new(INITIAL_CAPACITY, hash_function_2).unwrap();
    let mut chained_map = ChainingMap::new(INITIAL_CAPACITY, hash_function_2).unwrap();
    let mut rust_map = HashMap::new();
    group.bench_function("open addressing put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                open_map.put(key, value);
            }
        });
    });
    group.bench_function("chaining put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chained_map.put(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("open addressing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = open_map.get(key);
            }
        });
    });
    group.bench_function("chaining get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
