//! Moka in-memory cache backend
//!
//! Concurrent in-process cache built on Moka. Moka has no notion of tags,
//! so a side index maps each tag to the keys saved with it. Entries that
//! Moka evicts, expires or replaces are pruned from the index through an
//! eviction listener.
//!
//! ## Example
//!
//! ```
//! use eavo_providers::cache::MokaCacheBackend;
//! use std::time::Duration;
//!
//! let backend = MokaCacheBackend::with_config(1_000, Some(Duration::from_secs(300)));
//! assert_eq!(backend.max_capacity(), 1_000);
//! ```

use crate::constants::CACHE_DEFAULT_MAX_CAPACITY;
use async_trait::async_trait;
use dashmap::DashMap;
use eavo_application::ports::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};
use eavo_domain::error::Result;
use eavo_domain::ports::{CacheBackend, CacheEntryConfig, CacheStats};
use moka::Expiry;
use moka::future::Cache;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Tag → (key → generation of the entry that indexed it)
type TagIndex = DashMap<String, HashMap<String, u64>>;

#[derive(Debug, Clone)]
struct StoredEntry {
    bytes: Arc<Vec<u8>>,
    ttl: Option<Duration>,
    tags: Arc<[String]>,
    generation: u64,
}

/// Expires each entry after its own TTL, or never
struct EntryTtl;

impl Expiry<String, StoredEntry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Drop `key` from the tag sets of `entry`
///
/// A set member written by a later save of the same key carries a newer
/// generation and is left alone.
fn unindex(index: &TagIndex, key: &str, entry: &StoredEntry) {
    for tag in entry.tags.iter() {
        let emptied = match index.get_mut(tag) {
            Some(mut keys) => {
                if keys.get(key) == Some(&entry.generation) {
                    keys.remove(key);
                }
                keys.is_empty()
            }
            None => false,
        };
        if emptied {
            index.remove_if(tag, |_, keys| keys.is_empty());
        }
    }
}

/// Moka-based in-memory cache backend
#[derive(Clone)]
pub struct MokaCacheBackend {
    cache: Cache<String, StoredEntry>,
    tags: Arc<TagIndex>,
    default_ttl: Option<Duration>,
    max_capacity: u64,
    generations: Arc<AtomicU64>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl Default for MokaCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheBackend {
    /// Create a backend with default capacity and no TTL
    pub fn new() -> Self {
        Self::with_config(CACHE_DEFAULT_MAX_CAPACITY, None)
    }

    /// Create a backend with the given entry capacity
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self::with_config(max_capacity, None)
    }

    /// Create a backend with capacity and a default TTL
    ///
    /// The default TTL applies to entries saved without one of their own.
    pub fn with_config(max_capacity: u64, default_ttl: Option<Duration>) -> Self {
        let tags: Arc<TagIndex> = Arc::new(DashMap::new());

        // Entries leaving the cache for any reason leave the tag index too
        let listener_tags = Arc::clone(&tags);
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryTtl)
            .eviction_listener(move |key: Arc<String>, entry: StoredEntry, _cause| {
                unindex(&listener_tags, &key, &entry);
            })
            .build();

        Self {
            cache,
            tags,
            default_ttl,
            max_capacity,
            generations: Arc::new(AtomicU64::new(0)),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a backend from registry configuration
    pub fn from_config(config: &CacheBackendConfig) -> Self {
        let ttl = config
            .ttl_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self::with_config(
            config.max_capacity.unwrap_or(CACHE_DEFAULT_MAX_CAPACITY),
            ttl,
        )
    }

    /// Maximum number of entries
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Number of keys currently indexed under `tag`
    pub fn tagged_keys(&self, tag: &str) -> usize {
        self.tags.get(tag).map_or(0, |keys| keys.len())
    }
}

#[async_trait]
impl CacheBackend for MokaCacheBackend {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.cache.get(key).await {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(entry.bytes.as_ref().clone()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn save(&self, value: &[u8], key: &str, config: CacheEntryConfig) -> Result<()> {
        let generation = self.generations.fetch_add(1, Ordering::Relaxed);
        let entry = StoredEntry {
            bytes: Arc::new(value.to_vec()),
            ttl: config.ttl.or(self.default_ttl),
            tags: config.tags.into(),
            generation,
        };

        for tag in entry.tags.iter() {
            self.tags
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string(), generation);
        }
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn invalidate_tags(&self, tags: &[String]) -> Result<usize> {
        let mut keys = HashSet::new();
        for tag in tags {
            if let Some((_, tagged)) = self.tags.remove(tag) {
                keys.extend(tagged.into_keys());
            }
        }

        let mut removed = 0;
        for key in keys {
            if self.cache.remove(&key).await.is_some() {
                removed += 1;
            }
        }
        tracing::debug!(?tags, removed, "Invalidated tagged cache entries");
        Ok(removed)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        match self.cache.remove(key).await {
            Some(entry) => {
                unindex(&self.tags, key, &entry);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        self.tags.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        // Run pending tasks so entry_count is accurate
        self.cache.run_pending_tasks().await;

        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
            hit_rate: 0.0,
        };
        stats.hit_rate = stats.calculate_hit_rate();
        Ok(stats)
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheBackend")
            .field("max_capacity", &self.max_capacity)
            .field("default_ttl", &self.default_ttl)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[linkme::distributed_slice(CACHE_BACKENDS)]
static MOKA_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "moka",
    description: "Moka in-memory cache with tag index",
    factory: |config: &CacheBackendConfig| Ok(Arc::new(MokaCacheBackend::from_config(config))),
};
