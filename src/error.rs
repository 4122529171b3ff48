//! Error types reported by fallible constructors and bulk operations.
//!
//! Every error is detected before any mutation takes place, so a failed
//! operation leaves the collection exactly as it was.

use thiserror::Error;

/// The error type for this crate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A load factor outside the open interval `(0, 1)` was supplied to a
    /// constructor. NaN is rejected by the same check.
    #[error("load factor must be in (0, 1), got {load_factor}")]
    InvalidLoadFactor {
        /// The rejected load factor.
        load_factor: f32,
    },

    /// The key and value slices of a bulk operation have different lengths.
    #[error("key and value slice lengths differ ({keys} vs {values})")]
    LengthMismatch {
        /// Length of the key slice.
        keys: usize,
        /// Length of the value slice.
        values: usize,
    },

    /// An `offset`/`len` window does not fit within the supplied slices.
    #[error("range {offset}..{offset}+{len} out of bounds for slices of length {actual}")]
    RangeOutOfBounds {
        /// Start of the requested window.
        offset: usize,
        /// Length of the requested window.
        len: usize,
        /// Actual slice length.
        actual: usize,
    },
}
