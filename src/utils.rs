//! Common contract implemented by both map strategies

use std::num::NonZeroUsize;

use crate::{ChainingMap, OpenAddressingMap, hash::HashFunction};

/// Operations shared by [`OpenAddressingMap`] and [`ChainingMap`]
///
/// Code written against this trait works with either collision strategy.
pub trait StringMap<V>: Sized {
    /// Creates an empty map with a bucket count known to be valid
    fn with_buckets(capacity: NonZeroUsize, hash_function: HashFunction) -> Self;

    /// Inserts or updates a key-value pair, returning the replaced value
    fn put(&mut self, key: String, value: V) -> Option<V>;

    /// Returns the value stored for `key`
    fn get(&self, key: &str) -> Option<&V>;

    /// Returns a mutable reference to the value stored for `key`
    fn get_mut(&mut self, key: &str) -> Option<&mut V>;

    /// Removes `key`, returning its value; absent keys are a no-op
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Returns true if the map holds `key`
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes every entry, keeping the capacity
    fn clear(&mut self);

    /// Rehashes into `new_capacity` buckets, ignoring invalid targets
    fn resize_table(&mut self, new_capacity: usize);

    /// Number of live entries
    fn get_size(&self) -> usize;

    /// Number of buckets
    fn get_capacity(&self) -> usize;

    /// Ratio of live entries to buckets
    fn table_load(&self) -> f64;

    /// Number of empty buckets, as defined by the strategy
    fn empty_buckets(&self) -> usize;

    /// All live keys in traversal order
    fn get_keys(&self) -> Vec<String>;

    /// Most buckets or nodes a successful lookup inspects
    fn longest_lookup(&self) -> usize;
}

/// Implements [`StringMap`] by forwarding to the inherent methods
macro_rules! forward_string_map {
    ($map:ident, $longest:ident) => {
        impl<V> StringMap<V> for $map<V> {
            fn with_buckets(capacity: NonZeroUsize, hash_function: HashFunction) -> Self {
                Self::allocate(capacity.get(), hash_function)
            }

            fn put(&mut self, key: String, value: V) -> Option<V> {
                $map::put(self, key, value)
            }

            fn get(&self, key: &str) -> Option<&V> {
                $map::get(self, key)
            }

            fn get_mut(&mut self, key: &str) -> Option<&mut V> {
                $map::get_mut(self, key)
            }

            fn remove(&mut self, key: &str) -> Option<V> {
                $map::remove(self, key)
            }

            fn contains_key(&self, key: &str) -> bool {
                $map::contains_key(self, key)
            }

            fn clear(&mut self) {
                $map::clear(self);
            }

            fn resize_table(&mut self, new_capacity: usize) {
                $map::resize_table(self, new_capacity);
            }

            fn get_size(&self) -> usize {
                $map::get_size(self)
            }

            fn get_capacity(&self) -> usize {
                $map::get_capacity(self)
            }

            fn table_load(&self) -> f64 {
                $map::table_load(self)
            }

            fn empty_buckets(&self) -> usize {
                $map::empty_buckets(self)
            }

            fn get_keys(&self) -> Vec<String> {
                $map::get_keys(self)
            }

            fn longest_lookup(&self) -> usize {
                $map::$longest(self)
            }
        }
    };
}

forward_string_map!(OpenAddressingMap, longest_probe);
forward_string_map!(ChainingMap, longest_chain);

/// Builds a map of either strategy from key-value pairs
///
/// Later pairs overwrite earlier ones with the same key.
pub fn from_pairs<M, V, I>(capacity: NonZeroUsize, hash_function: HashFunction, pairs: I) -> M
where
    M: StringMap<V>,
    I: IntoIterator<Item = (String, V)>,
{
    let mut map = M::with_buckets(capacity, hash_function);
    for (key, value) in pairs {
        map.put(key, value);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_function_1;

    fn exercise<M: StringMap<i32>>() {
        let capacity = NonZeroUsize::new(10).unwrap();
        let mut map: M = from_pairs(
            capacity,
            hash_function_1,
            [("a".to_owned(), 1), ("b".to_owned(), 2), ("a".to_owned(), 3)],
        );

        assert_eq!(map.get_size(), 2);
        assert_eq!(map.get("a"), Some(&3));
        assert!(map.contains_key("b"));
        assert!(!map.contains_key("c"));

        if let Some(value) = map.get_mut("b") {
            *value = 20;
        }
        assert_eq!(map.remove("b"), Some(20));
        assert_eq!(map.remove("b"), None);

        map.resize_table(0);
        assert_eq!(map.get_capacity(), 10);
        map.resize_table(40);
        assert_eq!(map.get_capacity(), 40);
        assert_eq!(map.get_keys(), vec!["a".to_owned()]);
        assert!((map.table_load() - 0.025).abs() < f64::EPSILON);
        assert_eq!(map.longest_lookup(), 1);

        map.clear();
        assert_eq!(map.get_size(), 0);
        assert_eq!(map.empty_buckets(), 40);
        assert_eq!(map.longest_lookup(), 0);
    }

    #[test]
    fn test_open_addressing_contract() {
        exercise::<OpenAddressingMap<i32>>();
    }

    #[test]
    fn test_chaining_contract() {
        exercise::<ChainingMap<i32>>();
    }
}
