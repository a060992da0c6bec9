//! # Chained Hash Map
//!
//! A Rust implementation of a hash table resolving collisions by separate chaining.
//!
//! This crate provides two hash map implementations:
//!
//! - `ChainedHashMap`: A single-threaded implementation that owns its buckets outright
//! - `ConcurrentChainedMap`: A thread-safe wrapper guarding the whole table with one lock
//!
//! Every bucket keeps its entries in insertion order. Once the load factor (entries
//! per bucket) goes above 2.0 the table doubles and redistributes its entries.
//! It never shrinks.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map with 4 buckets
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.put("India".to_string(), 135);
//! map.put("China".to_string(), 140);
//!
//! // Retrieve values
//! assert_eq!(map.get("China"), Some(&140));
//! assert!(map.contains_key("India"));
//!
//! // Update values
//! assert_eq!(map.put("India".to_string(), 136), Some(135));
//!
//! // Remove values
//! map.remove("China");
//! assert_eq!(map.get("China"), None);
//! assert_eq!(map.key_set(), vec![&"India".to_string()]);
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::with_capacity(4);
//! for i in 0..9 {
//!     map.put(i, i * i);
//! }
//!
//! // 9 entries over 4 buckets exceeds 2.0, so the table doubled
//! assert_eq!(map.capacity(), 8);
//! assert_eq!(map.get(&3), Some(&9));
//! ```
//!
//! ## Concurrent Usage
//!
//! ```rust
//! use chainmap::ConcurrentChainedMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Create a shared hash map
//! let map = Arc::new(ConcurrentChainedMap::new());
//!
//! // Clone references for different threads
//! let map1 = Arc::clone(&map);
//! let map2 = Arc::clone(&map);
//!
//! // Spawn threads that modify the map concurrently
//! let t1 = thread::spawn(move || {
//!     for i in 0..100 {
//!         map1.put(format!("key-{}", i), i);
//!     }
//! });
//!
//! let t2 = thread::spawn(move || {
//!     for i in 100..200 {
//!         map2.put(format!("key-{}", i), i);
//!     }
//! });
//!
//! // Wait for threads to complete
//! t1.join().unwrap();
//! t2.join().unwrap();
//!
//! // The single lock serialises every write, so no insert is lost
//! assert_eq!(map.len(), 200);
//! ```

/// Module implementing the single-threaded separate-chaining hash map
mod chained_hashmap;
/// Module implementing the lock-guarded thread-safe wrapper
mod concurrent_chained_map;
/// Utility traits for the hash maps
mod utils;

/// Model-based property tests against `std::collections::HashMap`
#[cfg(test)]
mod proptests;

pub use chained_hashmap::{
    ChainedHashMap, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR_THRESHOLD, Iter, Keys, Values,
};
pub use concurrent_chained_map::ConcurrentChainedMap;
pub use utils::HashMapExtensions;
