//! Singly linked list backing each bucket of a [`ChainingMap`](crate::ChainingMap)

use crate::entry::Entry;

/// A node in the chain
#[derive(Debug, Clone)]
struct Node<V> {
    /// The entry held by this node
    entry: Entry<V>,
    /// The rest of the chain
    next: Option<Box<Node<V>>>,
}

/// Singly linked list of entries; new entries go in at the head
#[derive(Debug, Clone)]
pub(crate) struct Chain<V> {
    /// First node, if any
    head: Option<Box<Node<V>>>,
    /// Number of nodes in the chain
    len: usize,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<V> Chain<V> {
    /// Links a new entry in front of the existing nodes
    pub(crate) fn insert(&mut self, key: String, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { entry: Entry::new(key, value), next }));
        self.len = self.len.saturating_add(1);
    }

    /// Finds the entry for `key`
    pub(crate) fn contains(&self, key: &str) -> Option<&Entry<V>> {
        self.iter().find(|entry| entry.has_key(key))
    }

    /// Finds the entry for `key` for in-place update
    pub(crate) fn contains_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.entry.has_key(key) {
                return Some(&mut node.entry);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first node holding `key` and returns its entry
    pub(crate) fn remove(&mut self, key: &str) -> Option<Entry<V>> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| !node.entry.has_key(key)) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len = self.len.saturating_sub(1);
        Some(removed.entry)
    }

    /// Number of entries in the chain
    pub(crate) const fn length(&self) -> usize {
        self.len
    }

    /// Returns true if the chain has no nodes
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the entries from head to tail
    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter { next: self.head.as_deref() }
    }

    /// Drains the chain, yielding owned entries from head to tail
    pub(crate) fn into_entries(mut self) -> IntoEntries<V> {
        self.len = 0;
        IntoEntries { next: self.head.take() }
    }
}

/// Borrowing iterator over a [`Chain`]
#[derive(Debug, Clone)]
pub(crate) struct Iter<'a, V> {
    /// Node to yield next
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.entry)
    }
}

/// Owning iterator over a [`Chain`]
#[derive(Debug)]
pub(crate) struct IntoEntries<V> {
    /// Remaining nodes
    next: Option<Box<Node<V>>>,
}

impl<V> Iterator for IntoEntries<V> {
    type Item = Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        let Node { entry, next } = *node;
        self.next = next;
        Some(entry)
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains do not recurse through Box drops
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
