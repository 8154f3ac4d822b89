//! # Probe Map
//!
//! String-keyed hash maps built around two collision-resolution strategies.
//!
//! This crate provides two hash map implementations with the same contract:
//!
//! - `OpenAddressingMap`: quadratic probing over a single bucket array, with
//!   tombstones marking removed entries and automatic doubling below a load
//!   factor of 0.5
//! - `ChainingMap`: one singly linked list per bucket, resized only on request
//!
//! Both take an explicit capacity and a hash function at construction, and
//! both implement [`StringMap`] so code can be written against either. On top
//! of them, [`find_mode`] reports the most frequent values of a sequence.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probemap::{OpenAddressingMap, hash_function_1};
//!
//! // Create a map with 8 buckets
//! let mut map = OpenAddressingMap::new(8, hash_function_1).unwrap();
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//! assert_eq!(map.get_size(), 2);
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Chaining and Resizing
//!
//! ```rust
//! use probemap::{ChainingMap, hash_function_2};
//!
//! let mut map = ChainingMap::new(2, hash_function_2).unwrap();
//! for i in 0..10 {
//!     map.put(format!("key-{i}"), i);
//! }
//!
//! // Chains grow instead of the table
//! assert_eq!(map.get_capacity(), 2);
//! assert!((map.table_load() - 5.0).abs() < f64::EPSILON);
//!
//! map.resize_table(20);
//! assert_eq!(map.get_capacity(), 20);
//! assert_eq!(map.get("key-7"), Some(&7));
//! ```
//!
//! ## Finding the Mode
//!
//! ```rust
//! use probemap::find_mode;
//!
//! let (mode, frequency) = find_mode(&["apple", "apple", "grape", "melon", "melon", "peach"]);
//! assert_eq!(mode, ["apple", "melon"]);
//! assert_eq!(frequency, 2);
//! ```

/// Singly linked list used as a bucket by the chaining map
mod chain;
/// Module implementing the separate chaining hash map
mod chaining;
/// Key-value pair shared by both maps
mod entry;
/// Error type reported at construction
mod error;
/// Hash functions for string keys
mod hash;
/// Most-frequent-value search built on the maps
mod mode;
/// Module implementing the open addressing hash map
mod open_addressing;
/// Quadratic probe sequence
mod probe;
/// Contract shared by both maps
mod utils;

pub use chaining::{ChainingMap, Iter as ChainingIter};
pub use error::{MapError, Result};
pub use hash::{HashFunction, hash_function_1, hash_function_2};
pub use mode::{MODE_CAPACITY_DIVISOR, find_mode, find_mode_with};
pub use open_addressing::{Iter as OpenAddressingIter, MAX_LOAD_FACTOR, OpenAddressingMap};
pub use utils::{StringMap, from_pairs};
