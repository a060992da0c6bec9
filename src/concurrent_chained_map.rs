use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ChainedHashMap;

/// A thread-safe separate-chaining hash map.
///
/// The whole table sits behind one exclusive lock, so every operation (rehash
/// included) runs to completion before another thread can observe the map.
/// Lookups hand out clones because a reference cannot outlive the lock guard;
/// use [`ConcurrentChainedMap::with_map`] to work with references under the lock.
#[derive(Debug)]
pub struct ConcurrentChainedMap<K, V> {
    /// The map itself, guarded by a single mutex
    inner: Mutex<ChainedHashMap<K, V>>,
}

impl<K, V> Default for ConcurrentChainedMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<ChainedHashMap<K, V>> for ConcurrentChainedMap<K, V> {
    fn from(map: ChainedHashMap<K, V>) -> Self {
        Self { inner: Mutex::new(map) }
    }
}

impl<K, V> ConcurrentChainedMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates a new `ConcurrentChainedMap` with the default initial capacity and threshold
    #[must_use]
    pub fn new() -> Self {
        Self::from(ChainedHashMap::new())
    }

    /// Creates a new `ConcurrentChainedMap` with the given number of buckets
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(ChainedHashMap::with_capacity(capacity))
    }

    /// Acquires the lock.
    ///
    /// A panic in a caller's `Hash` or `Eq` impl poisons the mutex. The map is
    /// never left half-mutated by such a panic, so the guard is recovered.
    fn lock(&self) -> MutexGuard<'_, ChainedHashMap<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the underlying map
    pub fn with_map<R>(&self, f: impl FnOnce(&mut ChainedHashMap<K, V>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Insert a key-value pair, returning the previous value if the key was present
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.lock().put(key, value)
    }

    /// Retrieve a copy of the value for a given key
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    /// Returns true if the map holds an entry for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains_key(key)
    }

    /// Removes a key from the map, returning its value if it was present
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(key)
    }

    /// Returns a snapshot of every key, in bucket order
    #[must_use]
    pub fn key_set(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.lock().keys().cloned().collect()
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the number of buckets in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Returns the current load factor of the map
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.lock().load_factor()
    }

    /// Configures the load factor threshold, growing the table if needed
    pub fn set_load_factor_threshold(&self, threshold: f64) {
        self.lock().set_load_factor_threshold(threshold);
    }

    /// Clears the map, keeping its capacity
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Consumes the wrapper and returns the underlying map
    #[must_use]
    pub fn into_inner(self) -> ChainedHashMap<K, V> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
