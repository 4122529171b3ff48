#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;

/// A HashMap implementation using linear probing.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

pub mod hash_table;

/// A hash set implementation using linear probing.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface with configurable hashers.
pub mod hash_set;

/// An insertion-order-preserving hash map.
///
/// This module provides a `LinkedHashMap` that threads a doubly-linked list
/// through the table slots so iteration follows insertion order and entries
/// can be repositioned in O(1).
pub mod linked_hash_map;

pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::DEFAULT_LOAD_FACTOR;
pub use hash_table::HashTable;
pub use linked_hash_map::LinkedHashMap;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default hasher builder used by [`HashMap`], [`HashSet`], and
        /// [`LinkedHashMap`] when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The default hasher builder used by [`HashMap`], [`HashSet`], and
        /// [`LinkedHashMap`] when none is specified.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// Placeholder hasher builder. With neither the `foldhash` nor the
        /// `std` feature enabled there is no default hasher; name the `S`
        /// parameter explicitly.
        pub type DefaultHashBuilder = ();
    }
}
