use std::{marker::PhantomData, mem};

use crate::{
    entry::Entry,
    error::{MapError, Result},
    hash::HashFunction,
    probe::QuadraticProbe,
};

/// Load factor at which `put` doubles the table before inserting
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// State of one bucket in the table
///
/// A slot starts out `Empty` and never returns to it: removal leaves a
/// `Tombstone` so that probe sequences passing through it stay intact.
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never written since the bucket array was allocated
    Empty,
    /// Holds a live entry
    Occupied(Entry<V>),
    /// Held the given key until it was removed; reusable by `put`
    Tombstone(String),
}

/// Outcome of looking for a place to store a key
enum Placement {
    /// The key is live at this index
    Existing(usize),
    /// The key is absent and can be written at this index
    Vacant(usize),
    /// Every probed slot holds some other live key
    Exhausted,
}

/// A string-keyed hash table resolving collisions by quadratic probing.
///
/// Removed entries are tombstoned rather than cleared, and the table doubles
/// its capacity before any insertion that would bring the load factor to
/// [`MAX_LOAD_FACTOR`].
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenAddressingMap<V> {
    /// The slots of the bucket array
    buckets: Vec<Slot<V>>,
    /// Current number of live entries
    size: usize,
    /// Hash function supplied at construction
    hash_function: HashFunction,
}

impl<V> Extend<(String, V)> for OpenAddressingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> OpenAddressingMap<V> {
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
        buckets.resize_with(capacity, || Slot::Empty);
        Self { buckets, size: 0, hash_function }
    }

    /// Probe sequence for a key in the current table
    fn probe(&self, key: &str) -> QuadraticProbe {
        QuadraticProbe::new((self.hash_function)(key), self.buckets.len())
    }

    /// Finds the slot holding `key` as a live entry
    ///
    /// The whole probe cycle is scanned: an empty slot does not end the
    /// search, since a match may still sit further along the sequence.
    fn find_index(&self, key: &str) -> Option<usize> {
        self.probe(key).find(|&index| {
            matches!(self.buckets.get(index), Some(Slot::Occupied(entry)) if entry.has_key(key))
        })
    }

    /// Chooses the slot `put` writes to
    ///
    /// A live match wins over any free slot. Otherwise the first tombstone or
    /// empty slot on the sequence is used. The scan may stop at an empty slot
    /// because every key was stored before the first empty slot of its own
    /// sequence, and slots never become empty again.
    fn placement(&self, key: &str) -> Placement {
        let mut vacant = None;
        for index in self.probe(key) {
            match self.buckets.get(index) {
                Some(Slot::Occupied(entry)) if entry.has_key(key) => {
                    return Placement::Existing(index);
                }
                Some(Slot::Empty) => return Placement::Vacant(vacant.unwrap_or(index)),
                Some(Slot::Tombstone(_)) if vacant.is_none() => vacant = Some(index),
                Some(_) | None => {}
            }
        }
        vacant.map_or(Placement::Exhausted, Placement::Vacant)
    }

    /// Returns true if one more live entry would bring the load factor to
    /// [`MAX_LOAD_FACTOR`] or beyond
    #[allow(clippy::cast_precision_loss)]
    fn must_grow(&self) -> bool {
        self.size.saturating_add(1) as f64 / self.buckets.len() as f64 >= MAX_LOAD_FACTOR
    }

    /// Doubles the bucket count, rehashing every live entry
    fn grow(&mut self) {
        self.resize_table(self.buckets.len().saturating_mul(2));
    }

    /// Inserts or updates a key-value pair, returning the replaced value
    ///
    /// Updating a live key never resizes. A new key doubles the table first
    /// whenever storing it would reach [`MAX_LOAD_FACTOR`], so the new
    /// capacity is already in effect for this insertion and the load factor
    /// stays below the ceiling once `put` returns.
    ///
    /// This grows one insertion earlier than a check of the current load
    /// alone: a 50-bucket map already has 100 buckets after its 25th key.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        loop {
            match self.placement(&key) {
                Placement::Existing(index) => {
                    if let Some(Slot::Occupied(entry)) = self.buckets.get_mut(index) {
                        return Some(mem::replace(&mut entry.value, value));
                    }
                    return None;
                }
                Placement::Vacant(_) if self.must_grow() => self.grow(),
                Placement::Vacant(index) => {
                    if let Some(slot) = self.buckets.get_mut(index) {
                        if let Slot::Tombstone(previous) = slot {
                            log::trace!("reusing slot {index} left by {previous:?} for {key:?}");
                        }
                        *slot = Slot::Occupied(Entry::new(key, value));
                        self.size = self.size.saturating_add(1);
                    }
                    return None;
                }
                Placement::Exhausted => {
                    // Quadratic probing reaches only some of the slots for
                    // capacities that are not prime; grow until it finds one.
                    log::trace!(
                        "probe sequence for {key:?} exhausted at capacity {}, growing",
                        self.buckets.len()
                    );
                    self.grow();
                }
            }
        }
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        match self.buckets.get(self.find_index(key)?) {
            Some(Slot::Occupied(entry)) => Some(&entry.value),
            _ => None,
        }
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find_index(key)?;
        match self.buckets.get_mut(index) {
            Some(Slot::Occupied(entry)) => Some(&mut entry.value),
            _ => None,
        }
    }

    /// Returns true if `key` is stored as a live entry
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.size > 0 && self.find_index(key).is_some()
    }

    /// Tombstones the entry for `key` and returns its value
    ///
    /// Removing an absent key leaves the map untouched.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.find_index(key)?;
        let slot = self.buckets.get_mut(index)?;
        match mem::replace(slot, Slot::Empty) {
            Slot::Occupied(entry) => {
                *slot = Slot::Tombstone(entry.key);
                self.size = self.size.saturating_sub(1);
                Some(entry.value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Rehashes every live entry into a table of `new_capacity` buckets
    ///
    /// Targets below one bucket or below the current size are ignored. The
    /// resulting capacity can exceed `new_capacity` when the rehash itself
    /// crosses the load factor ceiling.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 || new_capacity < self.size {
            log::debug!(
                "ignoring resize to {new_capacity} buckets with {} live entries",
                self.size
            );
            return;
        }

        let old_capacity = self.buckets.len();
        let mut new_table = Self::allocate(new_capacity, self.hash_function);

        // Move all live key-value pairs to the new table in bucket order
        for slot in mem::take(&mut self.buckets) {
            if let Slot::Occupied(entry) = slot {
                new_table.put(entry.key, entry.value);
            }
        }

        log::debug!(
            "resized table from {old_capacity} to {} buckets, {} live entries",
            new_table.buckets.len(),
            new_table.size
        );

        // Replace the current table with the new one
        *self = new_table;
    }

    /// Returns the ratio of live entries to buckets
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of buckets not holding a live entry
    ///
    /// Computed as `capacity - size`, so tombstones count as empty.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.len().saturating_sub(self.size)
    }

    /// Clears the hash map, keeping its capacity
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }

    /// Most probe steps any successful lookup takes, or 0 when empty
    #[must_use]
    pub fn longest_probe(&self) -> usize {
        self.buckets
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied(entry) => self.probe(&entry.key).position(|step| step == index),
                Slot::Empty | Slot::Tombstone(_) => None,
            })
            .max()
            .map_or(0, |steps| steps.saturating_add(1))
    }

    /// Returns the live keys in bucket order
    #[must_use]
    pub fn get_keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Returns the number of live entries
    #[must_use]
    pub const fn get_size(&self) -> usize {
        self.size
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of live entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entry
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns an iterator over the live key-value pairs in bucket order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, index: 0, _marker: PhantomData }
    }
}

/// Iterator over the live key-value pairs of an [`OpenAddressingMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Reference to the buckets in the hash map
    buckets: &'a [Slot<V>],
    /// Current position in the iteration
    index: usize,
    /// Phantom data to hold the lifetime and type parameters
    _marker: PhantomData<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.buckets.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Slot::Occupied(entry) = slot {
                return Some((entry.key.as_str(), &entry.value));
            }
        }
        None
    }
}
