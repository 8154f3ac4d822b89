//! Quadratic probe sequence over a bucket array

/// Yields `(base + i²) % capacity` for `i` in `0..capacity`
///
/// The square is tracked incrementally as a running sum of odd numbers, each
/// reduced modulo the capacity, so no intermediate value reaches `2 * capacity`.
#[derive(Debug, Clone)]
pub(crate) struct QuadraticProbe {
    /// Bucket the key hashes to
    base: usize,
    /// `i² % capacity` for the next step
    offset: usize,
    /// `(2i + 1) % capacity`, the distance from `i²` to `(i + 1)²`
    odd: usize,
    /// Number of buckets in the table
    capacity: usize,
    /// Steps left before the cycle is exhausted
    remaining: usize,
}

impl QuadraticProbe {
    /// Starts a probe sequence at `hash % capacity`
    ///
    /// A zero capacity produces an empty sequence.
    pub(crate) fn new(hash: usize, capacity: usize) -> Self {
        Self {
            base: hash.checked_rem(capacity).unwrap_or(0),
            offset: 0,
            odd: 1_usize.checked_rem(capacity).unwrap_or(0),
            capacity,
            remaining: capacity,
        }
    }

    /// Adds two values already reduced modulo the capacity
    fn add_mod(&self, lhs: usize, rhs: usize) -> usize {
        let sum = lhs.wrapping_add(rhs);
        if sum >= self.capacity || sum < lhs { sum.wrapping_sub(self.capacity) } else { sum }
    }
}

impl Iterator for QuadraticProbe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);

        let index = self.add_mod(self.base, self.offset);
        self.offset = self.add_mod(self.offset, self.odd);
        self.odd = self.add_mod(self.odd, 2_usize.checked_rem(self.capacity).unwrap_or(0));
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for QuadraticProbe {}
