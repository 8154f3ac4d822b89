//! Hash functions accepted by the maps
//!
//! A map never looks inside its hash function: it only reduces the returned
//! value modulo its capacity. The two functions here are simple enough to make
//! collisions easy to provoke in tests.

/// Signature of a hash function supplied at map construction
pub type HashFunction = fn(&str) -> usize;

/// Sums the code points of the key
#[must_use]
pub fn hash_function_1(key: &str) -> usize {
    key.chars().fold(0_usize, |hash, letter| hash.wrapping_add(code_point(letter)))
}

/// Sums the code points of the key, each weighted by its one-based position
#[must_use]
pub fn hash_function_2(key: &str) -> usize {
    key.chars().zip(1_usize..).fold(0_usize, |hash, (letter, weight)| {
        hash.wrapping_add(weight.wrapping_mul(code_point(letter)))
    })
}

/// Widens a character to its code point
#[allow(clippy::cast_possible_truncation)]
fn code_point(letter: char) -> usize {
    u32::from(letter) as usize
}
