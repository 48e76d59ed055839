//! In-memory LRU memo for API lookups that several jobs repeat.
//!
//! A single run of `update-all` asks for the same league's rosters and users
//! from the roster, standings, matchup and transaction exports. The memo keeps
//! the joined lookup for recently used leagues so each is fetched once.

use lru::LruCache;
use std::{
    hash::Hash,
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

/// Default number of leagues kept in memory.
pub const DEFAULT_CAPACITY: usize = 64;

/// Thread-safe LRU cache of cloneable values.
#[derive(Clone)]
pub struct MemoryCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> MemoryCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries (minimum one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    // A panic while holding the lock leaves the LRU itself consistent.
    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<K, V>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K, V> Default for MemoryCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
