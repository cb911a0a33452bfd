//! Bounded LRU cache of resolved profile image URLs

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use crate::types::CacheStats;

/// Number of handles kept in memory
pub const CACHE_CAPACITY: usize = 128;

/// Maps normalized handles to base (`_normal`) image URLs.
///
/// Every lookup and insert takes the same lock, since a hit reorders the
/// recency list.
pub struct ProfileImageCache {
    entries: Mutex<LruCache<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl ProfileImageCache {
    /// Create a cache holding [`CACHE_CAPACITY`] entries
    pub fn new() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }

    /// Create a cache with a custom capacity (at least one entry)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Look up a handle, marking it most recently used on a hit
    pub async fn get(&self, handle: &str) -> Option<String> {
        let url = self.entries.lock().await.get(handle).cloned();

        if url.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        url
    }

    /// Store the image URL for a handle, evicting the least recently used entry when full
    pub async fn put(&self, handle: &str, url: &str) {
        let evicted = {
            let mut entries = self.entries.lock().await;
            entries.push(handle.to_string(), url.to_string())
        };

        if let Some((evicted_handle, _)) = evicted {
            if evicted_handle != handle {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(handle = %evicted_handle, "Evicted least recently used cache entry");
            }
        }
    }

    /// Check for a handle without touching its recency
    pub async fn contains(&self, handle: &str) -> bool {
        self.entries.lock().await.contains(handle)
    }

    /// Get current cache statistics
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().await;
        CacheStats {
            entries: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

impl Default for ProfileImageCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn image(n: usize) -> String {
        format!("https://pbs.twimg.com/profile_images/{n}/avatar_normal.jpg")
    }

    #[tokio::test]
    async fn test_get_miss_then_hit() {
        let cache = ProfileImageCache::new();

        assert!(cache.get("charlyx").await.is_none());
        cache.put("charlyx", &image(1)).await;
        assert_eq!(cache.get("charlyx").await, Some(image(1)));

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.capacity, CACHE_CAPACITY);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 0);
    }

    #[tokio::test]
    async fn test_put_overwrites_without_eviction() {
        let cache = ProfileImageCache::with_capacity(2);

        cache.put("charlyx", &image(1)).await;
        cache.put("charlyx", &image(2)).await;

        assert_eq!(cache.get("charlyx").await, Some(image(2)));
        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.evictions, 0);
    }

    #[tokio::test]
    async fn test_evicts_least_recently_inserted() {
        let cache = ProfileImageCache::new();

        for n in 0..=CACHE_CAPACITY {
            cache.put(&format!("user{n}"), &image(n)).await;
        }

        assert!(!cache.contains("user0").await);
        assert!(cache.contains("user1").await);
        assert!(cache.contains(&format!("user{CACHE_CAPACITY}")).await);

        let stats = cache.stats().await;
        assert_eq!(stats.entries, CACHE_CAPACITY);
        assert_eq!(stats.evictions, 1);
    }

    #[tokio::test]
    async fn test_get_refreshes_recency() {
        let cache = ProfileImageCache::with_capacity(3);

        cache.put("a", &image(1)).await;
        cache.put("b", &image(2)).await;
        cache.put("c", &image(3)).await;

        // "a" becomes most recently used, so "b" is next out
        assert!(cache.get("a").await.is_some());
        cache.put("d", &image(4)).await;

        assert!(cache.contains("a").await);
        assert!(!cache.contains("b").await);
        assert!(cache.contains("c").await);
        assert!(cache.contains("d").await);
    }

    #[tokio::test]
    async fn test_contains_does_not_refresh_recency() {
        let cache = ProfileImageCache::with_capacity(2);

        cache.put("a", &image(1)).await;
        cache.put("b", &image(2)).await;
        assert!(cache.contains("a").await);
        cache.put("c", &image(3)).await;

        assert!(!cache.contains("a").await);
    }

    #[tokio::test]
    async fn test_zero_capacity_holds_one_entry() {
        let cache = ProfileImageCache::with_capacity(0);

        cache.put("a", &image(1)).await;
        cache.put("b", &image(2)).await;

        let stats = cache.stats().await;
        assert_eq!(stats.capacity, 1);
        assert_eq!(stats.entries, 1);
        assert!(cache.contains("b").await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_access() {
        let cache = Arc::new(ProfileImageCache::with_capacity(64));

        let tasks: Vec<_> = (0..16)
            .map(|worker| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move {
                    for n in 0..100 {
                        let handle = format!("user{}", (worker * 100 + n) % 80);
                        if cache.get(&handle).await.is_none() {
                            cache.put(&handle, &image(n)).await;
                        }
                    }
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            result.unwrap();
        }

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 64);
        assert_eq!(stats.hits + stats.misses, 1600);
    }
}
