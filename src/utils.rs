//! Utility traits shared by `ChainedHashMap` and `ConcurrentChainedMap`

use crate::{ChainedHashMap, ConcurrentChainedMap};
use std::borrow::Borrow;
use std::hash::Hash;

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the hash map as a Vec, in key set order
    fn keys_vec(&self) -> Vec<K>;

    /// Returns the values of the hash map as a Vec, in key set order
    fn values_vec(&self) -> Vec<V>;

    /// Returns true if the hash map contains the given key
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns true if every one of `keys` is present
    fn contains_all<Q>(&self, keys: &[&Q]) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        keys.iter().all(|key| self.contains_key(*key))
    }
}

impl<K, V> HashMapExtensions<K, V> for ChainedHashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn keys_vec(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    fn values_vec(&self) -> Vec<V> {
        self.values().cloned().collect()
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Self::contains_key(self, key)
    }
}

impl<K, V> HashMapExtensions<K, V> for ConcurrentChainedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn keys_vec(&self) -> Vec<K> {
        self.key_set()
    }

    fn values_vec(&self) -> Vec<V> {
        self.with_map(|map| map.values().cloned().collect())
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Self::contains_key(self, key)
    }
}
