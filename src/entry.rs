//! Key-value pair stored by both map implementations

/// A key together with its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<V> {
    /// The key in the key-value pair
    pub(crate) key: String,
    /// The value associated with the key
    pub(crate) value: V,
}

impl<V> Entry<V> {
    /// Creates an entry from its parts
    pub(crate) const fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    /// Returns true if this entry is stored under `key`
    pub(crate) fn has_key(&self, key: &str) -> bool {
        self.key == key
    }
}
