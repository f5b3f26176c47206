use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use rustc_hash::FxHasher;

use crate::Result;

/// Bucket count of a table created with [`HashTable::new`]
pub const DEFAULT_BUCKETS: usize = 15;

/// Growth threshold, as a percentage of entries per bucket
pub const MAX_LOAD_PERCENT: usize = 70;

/// Fast non-cryptographic hasher used by default
pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// A separately chained hash table that doubles its bucket array when the
/// load factor would exceed [`MAX_LOAD_PERCENT`].
///
/// Keys are owned by the table. Values are stored as given: when `V` is a
/// reference or an id, the table never owns or drops what it points to.
///
/// Iteration follows the internal bucket order, which changes on growth and
/// has no relation to insertion order.
#[derive(Clone)]
pub struct HashTable<K, V, S = FxBuildHasher> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty table with [`DEFAULT_BUCKETS`] buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Creates an empty table with at least one bucket
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_buckets_and_hasher(buckets, FxBuildHasher::default())
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_buckets_and_hasher(DEFAULT_BUCKETS, hasher)
    }

    pub fn with_buckets_and_hasher(buckets: usize, hasher: S) -> Self {
        let count = buckets.max(1);
        let mut table = Vec::with_capacity(count);
        table.resize_with(count, Vec::new);
        HashTable {
            buckets: table,
            len: 0,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Inserts or updates `key`, returning the previous value on update.
    ///
    /// A new key first grows the table if it would push the load factor past
    /// the threshold. On allocation failure the table keeps every entry it had
    /// and the key is not inserted.
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>> {
        let idx = self.bucket_index(&key);
        if let Some(entry) = self.buckets[idx].iter_mut().find(|(k, _)| *k == key) {
            return Ok(Some(std::mem::replace(&mut entry.1, value)));
        }

        if (self.len + 1) * 100 > self.buckets.len() * MAX_LOAD_PERCENT {
            self.grow()?;
        }

        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];
        bucket.try_reserve(1)?;
        bucket.push((key, value));
        self.len += 1;
        Ok(None)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| key_matches(k, key))
            .map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| key_matches(k, key))
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value. The bucket array never shrinks.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|(k, _)| key_matches(k, key))?;
        let (_, value) = bucket.swap_remove(pos);
        self.len -= 1;
        Some(value)
    }

    /// Visits every entry in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        bucket_for(&self.hasher, key, self.buckets.len())
    }

    /// Doubles the bucket array and rehashes every entry into it.
    ///
    /// Every destination chain is sized before any entry moves, so an
    /// allocation failure leaves the table as it was.
    fn grow(&mut self) -> Result<()> {
        let new_count = self.buckets.len() * 2;
        let mut fresh: Vec<Vec<(K, V)>> = Vec::new();
        fresh.try_reserve_exact(new_count)?;
        fresh.resize_with(new_count, Vec::new);

        let mut sizes = Vec::new();
        sizes.try_reserve_exact(new_count)?;
        sizes.resize(new_count, 0usize);
        for (key, _) in self.buckets.iter().flatten() {
            sizes[bucket_for(&self.hasher, key, new_count)] += 1;
        }
        for (chain, &size) in fresh.iter_mut().zip(&sizes) {
            chain.try_reserve_exact(size)?;
        }

        let old = std::mem::take(&mut self.buckets);
        log::trace!("growing hash table from {} to {} buckets", old.len(), new_count);
        for (key, value) in old.into_iter().flatten() {
            let idx = bucket_for(&self.hasher, &key, new_count);
            fresh[idx].push((key, value));
        }
        self.buckets = fresh;
        Ok(())
    }
}

fn key_matches<K, Q>(stored: &K, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: ?Sized + Eq,
{
    <K as Borrow<Q>>::borrow(stored) == key
}

fn bucket_for<Q, S>(hasher: &S, key: &Q, buckets: usize) -> usize
where
    Q: ?Sized + Hash,
    S: BuildHasher,
{
    (hasher.hash_one(key) % buckets as u64) as usize
}

impl<K: Debug, V: Debug, S> Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}
