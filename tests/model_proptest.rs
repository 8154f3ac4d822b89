use std::collections::HashMap;

use probemap::{
    ChainingMap, HashFunction, MAX_LOAD_FACTOR, OpenAddressingMap, StringMap, hash_function_1,
    hash_function_2,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Put(usize, u32),
    Remove(usize),
    Resize(usize),
    Clear,
}

fn op_strategy(keys: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..keys, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        3 => (0..keys).prop_map(Op::Remove),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => Just(Op::Clear),
    ]
}

/// Keys that collide often under both hash functions
fn key_name(k: usize) -> String {
    format!("k{}", k % 7) + &"x".repeat(k / 7)
}

/// Applies `ops` to `map` and to a std model, checking they agree after each step
fn check_against_model<M: StringMap<u32>>(
    map: &mut M,
    ops: &[Op],
    keys: usize,
    bounded_load: bool,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, u32> = HashMap::new();

    for op in ops {
        match op {
            Op::Put(k, v) => {
                let key = key_name(*k);
                prop_assert_eq!(map.put(key.clone(), *v), model.insert(key, *v));
                if bounded_load {
                    prop_assert!(map.table_load() < MAX_LOAD_FACTOR);
                }
            }
            Op::Remove(k) => {
                let key = key_name(*k);
                prop_assert_eq!(map.remove(&key), model.remove(&key));
            }
            Op::Resize(capacity) => {
                let before = map.get_capacity();
                map.resize_table(*capacity);
                if *capacity == 0 || (bounded_load && *capacity < model.len()) {
                    prop_assert_eq!(map.get_capacity(), before);
                } else {
                    prop_assert!(map.get_capacity() >= *capacity);
                }
            }
            Op::Clear => {
                let before = map.get_capacity();
                map.clear();
                model.clear();
                prop_assert_eq!(map.get_capacity(), before);
            }
        }

        prop_assert_eq!(map.get_size(), model.len());
        for k in 0..keys {
            let key = key_name(k);
            prop_assert_eq!(map.get(&key), model.get(&key));
            prop_assert_eq!(map.contains_key(&key), model.contains_key(&key));
        }
    }

    let mut keys_seen = map.get_keys();
    keys_seen.sort();
    let mut expected: Vec<String> = model.keys().cloned().collect();
    expected.sort();
    prop_assert_eq!(keys_seen, expected);
    Ok(())
}

fn hash_for(selector: bool) -> HashFunction {
    if selector { hash_function_1 } else { hash_function_2 }
}

proptest! {
    #[test]
    fn prop_open_addressing_matches_model(
        capacity in 1usize..32,
        selector in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(24), 1..120),
    ) {
        let mut map = OpenAddressingMap::new(capacity, hash_for(selector)).unwrap();
        check_against_model(&mut map, &ops, 24, true)?;
        prop_assert_eq!(map.empty_buckets(), map.get_capacity() - map.get_size());
    }

    #[test]
    fn prop_chaining_matches_model(
        capacity in 1usize..32,
        selector in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(24), 1..120),
    ) {
        let mut map = ChainingMap::new(capacity, hash_for(selector)).unwrap();
        check_against_model(&mut map, &ops, 24, false)?;
        prop_assert!(map.empty_buckets() <= map.get_capacity());
    }

    #[test]
    fn prop_remove_absent_is_noop(
        capacity in 1usize..32,
        present in proptest::collection::vec("[a-f]{1,4}", 0..20),
        absent in "[g-z]{1,4}",
    ) {
        let mut open = OpenAddressingMap::new(capacity, hash_function_1).unwrap();
        let mut chained = ChainingMap::new(capacity, hash_function_1).unwrap();
        for key in &present {
            open.put(key.as_str(), 0_u8);
            chained.put(key.as_str(), 0_u8);
        }
        let (open_size, chained_size) = (open.get_size(), chained.get_size());

        prop_assert_eq!(open.remove(&absent), None);
        prop_assert_eq!(chained.remove(&absent), None);
        prop_assert_eq!(open.get_size(), open_size);
        prop_assert_eq!(chained.get_size(), chained_size);
    }
}
