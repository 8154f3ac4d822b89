//! Most frequent values of a sequence, counted with a hash map

use std::num::NonZeroUsize;

use crate::{
    ChainingMap,
    hash::{HashFunction, hash_function_1},
    utils::StringMap,
};

/// Input length per bucket of the counting map
pub const MODE_CAPACITY_DIVISOR: usize = 3;

/// Returns the most frequent values of `values` and their shared frequency
///
/// Values reaching the running maximum are reported in the order they reach
/// it. An empty input yields an empty set with frequency zero.
#[must_use]
pub fn find_mode<S: AsRef<str>>(values: &[S]) -> (Vec<String>, usize) {
    find_mode_with::<ChainingMap<usize>, S>(values, hash_function_1)
}

/// Same as [`find_mode`], counting in a map of type `M`
#[must_use]
pub fn find_mode_with<M, S>(values: &[S], hash_function: HashFunction) -> (Vec<String>, usize)
where
    M: StringMap<usize>,
    S: AsRef<str>,
{
    let capacity =
        NonZeroUsize::new(values.len() / MODE_CAPACITY_DIVISOR).unwrap_or(NonZeroUsize::MIN);
    let mut counts = M::with_buckets(capacity, hash_function);
    let mut mode = Vec::new();
    let mut frequency = 0_usize;

    for value in values {
        let key = value.as_ref();
        let count = if let Some(count) = counts.get_mut(key) {
            *count = count.saturating_add(1);
            *count
        } else {
            counts.put(key.to_owned(), 1);
            1
        };

        if count > frequency {
            mode.clear();
            mode.push(key.to_owned());
            frequency = count;
        } else if count == frequency {
            mode.push(key.to_owned());
        }
    }

    (mode, frequency)
}
