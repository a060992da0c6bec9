use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    iter::{self, FusedIterator},
    mem, slice,
};

/// Number of buckets a map starts with when no capacity is given
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Load factor (entries per bucket) above which the table doubles
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 2.0;

/// Smallest threshold accepted by [`ChainedHashMap::set_load_factor_threshold`]
const MIN_LOAD_FACTOR_THRESHOLD: f64 = 0.25;

/// Largest threshold accepted by [`ChainedHashMap::set_load_factor_threshold`]
const MAX_LOAD_FACTOR_THRESHOLD: f64 = 16.0;

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// Hash of the key, computed once on insertion
    hash: u64,
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
}

/// One slot of the table: every entry whose key hashes here, in insertion order
type Bucket<K, V> = Vec<Entry<K, V>>;

/// A hash table resolving collisions by separate chaining.
///
/// Each bucket holds a chain of entries in insertion order. When the number of
/// entries per bucket goes above the load factor threshold (2.0 by default) the
/// table doubles and every entry is redistributed. The table never shrinks.
///
/// Keys are matched with [`Eq`], so two distinct but equal key instances always
/// address the same entry.
///
/// Note: This implementation is not thread-safe. For concurrent access, use
/// `ConcurrentChainedMap`.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V> {
    /// The chains of key-value pairs, one per bucket
    buckets: Vec<Bucket<K, V>>,
    /// Current number of entries across all chains
    size: usize,
    /// Entries per bucket allowed before the table doubles
    load_factor_threshold: f64,
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// Hashes a key with the standard library's default hasher
fn hash_key<Q: ?Sized + Hash>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Maps a hash onto one of `bucket_count` buckets
#[allow(clippy::cast_possible_truncation)]
fn index_for(hash: u64, bucket_count: usize) -> usize {
    (hash as usize).checked_rem(bucket_count).unwrap_or(0)
}

/// Builds a table of `capacity` empty chains
fn empty_table<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    iter::repeat_with(Vec::new).take(capacity).collect()
}

/// Appends an entry to the chain its hash selects, without any duplicate check.
///
/// The table must not be empty.
#[allow(clippy::indexing_slicing)]
fn push_entry<K, V>(buckets: &mut [Bucket<K, V>], entry: Entry<K, V>) {
    // `index_for` is always below `buckets.len()` for a non-empty table
    let index = index_for(entry.hash, buckets.len());
    buckets[index].push(entry);
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty `ChainedHashMap` with 4 buckets and a load factor threshold of 2.0
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty `ChainedHashMap` with the given number of buckets (at least 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: empty_table(capacity.max(1)),
            size: 0,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }

    /// Gets the bucket index for a key
    fn bucket_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        index_for(hash_key(key), self.buckets.len())
    }

    /// Finds the position of `key` inside the chain at `bucket_index`
    fn search<Q>(&self, bucket_index: usize, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(bucket_index)?.iter().position(|entry| entry.key.borrow() == key)
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// An existing entry is updated in place. A new entry goes at the end of its
    /// chain, and the table doubles if the load factor then exceeds the threshold.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_key(&key);
        let bucket_index = index_for(hash, self.buckets.len());

        if let Some(entry) = self
            .buckets
            .get_mut(bucket_index)
            .and_then(|chain| chain.iter_mut().find(|entry| entry.key == key))
        {
            return Some(mem::replace(&mut entry.value, value));
        }

        push_entry(&mut self.buckets, Entry { hash, key, value });
        self.size = self.size.saturating_add(1);

        if self.exceeds_threshold() {
            self.rehash();
        }

        None
    }

    /// Retrieve a value for a given key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let chain = self.buckets.get(self.bucket_index(key))?;
        chain.iter().find(|entry| entry.key.borrow() == key).map(|entry| &entry.value)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket_index = self.bucket_index(key);
        let chain = self.buckets.get_mut(bucket_index)?;
        chain.iter_mut().find(|entry| entry.key.borrow() == key).map(|entry| &mut entry.value)
    }

    /// Returns true if the map holds an entry for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.search(self.bucket_index(key), key).is_some()
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// The remaining entries of the chain keep their relative order. The table
    /// is never shrunk.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket_index = self.bucket_index(key);
        let position = self.search(bucket_index, key)?;
        let chain = self.buckets.get_mut(bucket_index)?;
        let entry = chain.remove(position);
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Returns every key, bucket by bucket and in insertion order within a bucket
    #[must_use]
    pub fn key_set(&self) -> Vec<&K> {
        self.keys().collect()
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the map
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the load factor above which the table doubles
    #[must_use]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Configures the load factor threshold.
    ///
    /// The value is clamped to `0.25..=16.0`. If the map is already above the
    /// new threshold, the table doubles until it is not.
    pub fn set_load_factor_threshold(&mut self, threshold: f64) {
        self.load_factor_threshold =
            threshold.max(MIN_LOAD_FACTOR_THRESHOLD).min(MAX_LOAD_FACTOR_THRESHOLD);
        while self.exceeds_threshold() {
            self.rehash();
        }
    }

    /// Returns the chain length of every bucket, in bucket order
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Clears the map, removing all key-value pairs. The capacity is kept.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.size = 0;
    }

    /// Returns true if the load factor is above the threshold
    fn exceeds_threshold(&self) -> bool {
        self.load_factor() > self.load_factor_threshold
    }

    /// Doubles the table and moves every entry into its new chain.
    ///
    /// Indices come from the cached hashes, so no user `Hash` code runs here.
    fn rehash(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        let mut new_buckets = empty_table(new_capacity);

        for entry in mem::take(&mut self.buckets).into_iter().flatten() {
            push_entry(&mut new_buckets, entry);
        }

        self.buckets = new_buckets;
    }
}

impl<K, V> ChainedHashMap<K, V> {
    /// Returns an iterator over the key-value pairs, in key set order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), chain: slice::Iter::default(), remaining: self.size }
    }

    /// Returns an iterator over the keys, in key set order
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, in key set order
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of the map
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Buckets not visited yet
    buckets: slice::Iter<'a, Bucket<K, V>>,
    /// Rest of the chain currently being walked
    chain: slice::Iter<'a, Entry<K, V>>,
    /// Entries not yielded yet
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&entry.key, &entry.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of the map
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    /// Underlying pair iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of the map
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    /// Underlying pair iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
