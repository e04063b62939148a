//! Digest result cache implementation.

use crate::{Clock, MonotonicClock};
use derive_getters::Getters;
use newsbrief_core::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cache entry with digest text and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    digest: String,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Check if this entry is expired as of `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) > self.ttl
    }

    /// Get remaining time until expiration as of `now`.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.ttl.checked_sub(now.duration_since(self.created_at))
    }
}

/// Cache key for digest results.
///
/// A digest is fully determined by the requested category and story
/// count, so the pair is the whole key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct DigestKey {
    category: Category,
    count: usize,
}

impl DigestKey {
    /// Create a key for a `(category, count)` request.
    pub fn new(category: Category, count: usize) -> Self {
        Self { category, count }
    }
}

/// Configuration for the digest cache.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct DigestCacheConfig {
    /// TTL for cached digests (seconds)
    #[serde(default = "default_ttl")]
    #[builder(default = "default_ttl()")]
    ttl_seconds: u64,

    /// Maximum cache size (number of entries)
    #[serde(default = "default_max_entries")]
    #[builder(default = "default_max_entries()")]
    max_entries: usize,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,
}

fn default_ttl() -> u64 {
    10_800 // 3 hours
}

fn default_max_entries() -> usize {
    1024
}

fn default_enabled() -> bool {
    true
}

impl Default for DigestCacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
            max_entries: default_max_entries(),
            enabled: default_enabled(),
        }
    }
}

/// Cache for rendered story digests.
///
/// Stores digests with TTL-based expiration, keyed by the exact
/// `(category, count)` request pair. Expired entries are treated as
/// absent and purged when observed; when the table is full, the least
/// recently used entry is evicted first.
///
/// # Example
///
/// ```
/// use newsbrief_cache::{DigestCache, DigestCacheConfig, DigestKey};
/// use newsbrief_core::Category;
///
/// let mut cache = DigestCache::new(DigestCacheConfig::default());
/// let key = DigestKey::new(Category::Top, 5);
///
/// cache.insert(key, "Stories from ...".to_string());
/// if let Some(entry) = cache.get(&key) {
///     println!("Cached: {}", entry.digest());
/// }
/// ```
pub struct DigestCache<C: Clock = MonotonicClock> {
    config: DigestCacheConfig,
    clock: C,
    entries: HashMap<DigestKey, CacheEntry>,
    access_order: Vec<DigestKey>,
}

impl DigestCache<MonotonicClock> {
    /// Create a new digest cache on the system monotonic clock.
    pub fn new(config: DigestCacheConfig) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl<C: Clock> DigestCache<C> {
    /// Create a new digest cache with an injected clock.
    pub fn with_clock(config: DigestCacheConfig, clock: C) -> Self {
        tracing::debug!(
            ttl_seconds = config.ttl_seconds,
            max_entries = config.max_entries,
            enabled = config.enabled,
            "Creating new DigestCache"
        );
        Self {
            config,
            clock,
            entries: HashMap::new(),
            access_order: Vec::new(),
        }
    }

    /// Insert a digest into the cache under the given key.
    ///
    /// The entry is stamped with the clock's current instant and the
    /// configured TTL.
    #[tracing::instrument(
        skip(self, digest),
        fields(
            category = %key.category(),
            count = key.count(),
            cache_size = self.entries.len()
        )
    )]
    pub fn insert(&mut self, key: DigestKey, digest: String) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping insert");
            return;
        }

        let ttl = Duration::from_secs(self.config.ttl_seconds);
        let entry = CacheEntry {
            digest,
            created_at: self.clock.now(),
            ttl,
        };

        // Evict if at capacity
        if self.entries.len() >= self.config.max_entries && !self.entries.contains_key(&key) {
            self.evict_lru();
        }

        // Track access order for LRU
        if let Some(pos) = self.access_order.iter().position(|k| k == &key) {
            self.access_order.remove(pos);
        }
        self.access_order.push(key);

        tracing::debug!(ttl = ?ttl, "Inserted digest into cache");

        self.entries.insert(key, entry);
    }

    /// Get a cached digest entry.
    ///
    /// Returns None if:
    /// - Entry doesn't exist
    /// - Entry is expired
    /// - Cache is disabled
    #[tracing::instrument(
        skip(self),
        fields(
            category = %key.category(),
            count = key.count(),
            cache_size = self.entries.len()
        )
    )]
    pub fn get(&mut self, key: &DigestKey) -> Option<&CacheEntry> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, returning None");
            return None;
        }

        let now = self.clock.now();

        // Check if entry exists and is not expired
        let entry = self.entries.get(key)?;
        if entry.is_expired(now) {
            tracing::debug!("Cache entry expired, removing");
            self.entries.remove(key);
            if let Some(pos) = self.access_order.iter().position(|k| k == key) {
                self.access_order.remove(pos);
            }
            return None;
        }

        // Update access order for LRU
        if let Some(pos) = self.access_order.iter().position(|k| k == key) {
            let key = self.access_order.remove(pos);
            self.access_order.push(key);
        }

        tracing::debug!(
            time_remaining = ?self.entries[key].time_remaining(now),
            "Cache hit"
        );

        self.entries.get(key)
    }

    /// Remove expired entries from the cache.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        let now = self.clock.now();

        let access_order = &mut self.access_order;
        self.entries.retain(|key, entry| {
            let keep = !entry.is_expired(now);
            if !keep
                && let Some(pos) = access_order.iter().position(|k| k == key)
            {
                access_order.remove(pos);
            }
            keep
        });

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::info!(
                removed,
                remaining = self.entries.len(),
                "Cleaned up expired cache entries"
            );
        }
        removed
    }

    /// Clear all cache entries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.access_order.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Get number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evict least recently used entry.
    fn evict_lru(&mut self) {
        if let Some(key) = self.access_order.first().copied() {
            tracing::debug!(
                category = %key.category(),
                count = key.count(),
                "Evicting LRU entry"
            );
            self.entries.remove(&key);
            self.access_order.remove(0);
        }
    }
}

impl Default for DigestCache<MonotonicClock> {
    fn default() -> Self {
        Self::new(DigestCacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Test clock driven by hand.
    #[derive(Debug, Clone)]
    struct ManualClock {
        start: Instant,
        offset: Rc<Cell<Duration>>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                start: Instant::now(),
                offset: Rc::new(Cell::new(Duration::ZERO)),
            }
        }

        fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.start + self.offset.get()
        }
    }

    fn small_config(max_entries: usize) -> DigestCacheConfig {
        DigestCacheConfigBuilder::default()
            .max_entries(max_entries)
            .build()
            .unwrap()
    }

    #[test]
    fn hit_within_ttl() {
        let clock = ManualClock::new();
        let mut cache = DigestCache::with_clock(DigestCacheConfig::default(), clock.clone());
        let key = DigestKey::new(Category::Top, 5);

        cache.insert(key, "digest".to_string());
        clock.advance(Duration::from_secs(10_799));

        let entry = cache.get(&key).expect("entry should still be live");
        assert_eq!(entry.digest(), "digest");
    }

    #[test]
    fn miss_after_ttl_elapsed() {
        let clock = ManualClock::new();
        let mut cache = DigestCache::with_clock(DigestCacheConfig::default(), clock.clone());
        let key = DigestKey::new(Category::Top, 5);

        cache.insert(key, "digest".to_string());
        clock.advance(Duration::from_secs(10_801));

        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty(), "expired entry should be purged on get");
    }

    #[test]
    fn distinct_counts_are_distinct_keys() {
        let mut cache = DigestCache::new(DigestCacheConfig::default());
        cache.insert(DigestKey::new(Category::Top, 5), "five".to_string());
        cache.insert(DigestKey::new(Category::Top, 10), "ten".to_string());

        assert_eq!(cache.len(), 2);
        let entry = cache.get(&DigestKey::new(Category::Top, 10)).unwrap();
        assert_eq!(entry.digest(), "ten");
    }

    #[test]
    fn evicts_lru_at_capacity() {
        let mut cache = DigestCache::new(small_config(2));
        let top = DigestKey::new(Category::Top, 5);
        let new = DigestKey::new(Category::New, 5);
        let best = DigestKey::new(Category::Best, 5);

        cache.insert(top, "top".to_string());
        cache.insert(new, "new".to_string());

        // Touch `top` so `new` becomes least recently used.
        assert!(cache.get(&top).is_some());

        cache.insert(best, "best".to_string());
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&new).is_none());
        assert!(cache.get(&top).is_some());
        assert!(cache.get(&best).is_some());
    }

    #[test]
    fn reinsert_refreshes_entry() {
        let clock = ManualClock::new();
        let mut cache = DigestCache::with_clock(DigestCacheConfig::default(), clock.clone());
        let key = DigestKey::new(Category::Ask, 3);

        cache.insert(key, "stale".to_string());
        clock.advance(Duration::from_secs(10_000));
        cache.insert(key, "fresh".to_string());
        clock.advance(Duration::from_secs(5_000));

        let entry = cache.get(&key).expect("refreshed entry should be live");
        assert_eq!(entry.digest(), "fresh");
    }

    #[test]
    fn cleanup_expired_removes_only_stale_entries() {
        let clock = ManualClock::new();
        let mut cache = DigestCache::with_clock(DigestCacheConfig::default(), clock.clone());

        cache.insert(DigestKey::new(Category::Top, 5), "old".to_string());
        clock.advance(Duration::from_secs(10_801));
        cache.insert(DigestKey::new(Category::New, 5), "young".to_string());

        assert_eq!(cache.cleanup_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&DigestKey::new(Category::New, 5)).is_some());
    }

    #[test]
    fn disabled_cache_never_stores() {
        let config = DigestCacheConfig::default().with_enabled(false);
        let mut cache = DigestCache::new(config);
        let key = DigestKey::new(Category::Top, 5);

        cache.insert(key, "digest".to_string());
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = DigestCache::new(DigestCacheConfig::default());
        cache.insert(DigestKey::new(Category::Top, 5), "digest".to_string());
        cache.clear();
        assert!(cache.is_empty());
    }
}
