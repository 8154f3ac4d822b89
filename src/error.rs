//! Error type shared by both map implementations

use thiserror::Error;

/// Errors reported when building a map
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The requested bucket count cannot hold any entry
    #[error("invalid capacity {capacity}: a map needs at least one bucket")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },
}

/// Result alias for fallible map construction
pub type Result<T> = std::result::Result<T, MapError>;
