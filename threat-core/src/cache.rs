//! Time-expiring in-memory cache
//!
//! Entries expire individually; there is no size bound. Expired entries are
//! dropped when read.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Thread-safe TTL cache
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get a live entry, removing it if it has expired
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if now <= entry.expires_at => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write();
        // Re-check: another writer may have refreshed the entry
        if entries.get(key).is_some_and(|entry| now > entry.expires_at) {
            entries.remove(key);
        }
        None
    }

    /// Insert or replace an entry living for `ttl`
    pub fn insert(&self, key: K, value: V, ttl: Duration) {
        self.entries.write().insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Number of stored entries, including not yet collected expired ones
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let cache = TtlCache::new();
        cache.insert("8.8.8.8".to_string(), 42, Duration::from_secs(60));

        assert_eq!(cache.get(&"8.8.8.8".to_string()), Some(42));
        assert_eq!(cache.get(&"1.1.1.1".to_string()), None);
    }

    #[test]
    fn test_expired_entry_is_removed() {
        let cache = TtlCache::new();
        cache.insert("k", "v", Duration::ZERO);
        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.get(&"k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_replaces_and_refreshes() {
        let cache = TtlCache::new();
        cache.insert("k", 1, Duration::ZERO);
        cache.insert("k", 2, Duration::from_secs(60));
        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.get(&"k"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = TtlCache::new();
        cache.insert(1, 1, Duration::from_secs(60));
        cache.insert(2, 2, Duration::from_secs(60));
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
