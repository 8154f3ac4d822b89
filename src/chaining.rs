use std::mem;

use crate::{
    chain::{self, Chain},
    error::{MapError, Result},
    hash::HashFunction,
};

/// A string-keyed hash table resolving collisions by separate chaining.
///
/// Every bucket owns a singly linked list of the entries that hash to it.
/// The bucket count only changes through [`ChainingMap::resize_table`]: chains
/// grow without bound as entries are added.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ChainingMap<V> {
    /// The chains, one per bucket
    buckets: Vec<Chain<V>>,
    /// Current number of entries across all chains
    size: usize,
    /// Hash function supplied at construction
    hash_function: HashFunction,
}

impl<V> Extend<(String, V)> for ChainingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> ChainingMap<V> {
    /// Creates an empty map with `capacity` buckets
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, hash_function: HashFunction) -> Result<Self> {
        if capacity == 0 {
            return Err(MapError::InvalidCapacity { capacity });
        }
        Ok(Self::allocate(capacity, hash_function))
    }

    /// Builds a map without validating the capacity
    pub(crate) fn allocate(capacity: usize, hash_function: HashFunction) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::default);
        Self { buckets, size: 0, hash_function }
    }

    /// Gets the index in the buckets for a key
    fn bucket_index(&self, key: &str) -> usize {
        (self.hash_function)(key).checked_rem(self.buckets.len()).unwrap_or(0)
    }

    /// The chain `key` belongs to
    fn bucket(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets.get(self.bucket_index(key))
    }

    /// The chain `key` belongs to, for modification
    fn bucket_mut(&mut self, key: &str) -> Option<&mut Chain<V>> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)
    }

    /// Inserts or updates a key-value pair, returning the replaced value
    ///
    /// Never resizes the table.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let bucket = self.bucket_mut(&key)?;
        if let Some(entry) = bucket.contains_mut(&key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        bucket.insert(key, value);
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket(key)?.contains(key).map(|entry| &entry.value)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.bucket_mut(key)?.contains_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns true if an entry exists for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.size > 0 && self.get(key).is_some()
    }

    /// Unlinks the entry for `key` and returns its value
    ///
    /// Removing an absent key leaves the map untouched.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let removed = self.bucket_mut(key)?.remove(key)?;
        self.size = self.size.saturating_sub(1);
        Some(removed.value)
    }

    /// Rehashes every entry into a table of `new_capacity` buckets
    ///
    /// A zero target is ignored.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            log::debug!("ignoring resize to {new_capacity} buckets");
            return;
        }

        let old_capacity = self.buckets.len();
        let mut new_table = Self::allocate(new_capacity, self.hash_function);

        // Replay in bucket order, then chain order
        for chain in mem::take(&mut self.buckets) {
            for entry in chain.into_entries() {
                new_table.put(entry.key, entry.value);
            }
        }

        log::debug!(
            "resized chains from {old_capacity} to {new_capacity} buckets, {} entries",
            new_table.size
        );

        *self = new_table;
    }

    /// Returns the ratio of entries to buckets
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of buckets whose chain holds no entry
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Length of the longest chain in the table
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::length).max().unwrap_or(0)
    }

    /// Clears the hash map, keeping its capacity
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            *chain = Chain::default();
        }
        self.size = 0;
    }

    /// Returns the keys in bucket order, then chain order
    #[must_use]
    pub fn get_keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Returns the number of entries
    #[must_use]
    pub const fn get_size(&self) -> usize {
        self.size
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entry
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns an iterator over the key-value pairs in bucket order, then
    /// chain order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: None }
    }
}

/// Iterator over the key-value pairs of a [`ChainingMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Buckets not yet visited
    buckets: std::slice::Iter<'a, Chain<V>>,
    /// Position inside the current bucket's chain
    chain: Option<chain::Iter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                return Some((entry.key.as_str(), &entry.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}
