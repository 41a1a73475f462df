//! Cache Backend Port
//!
//! Port for the shared cache the resolver persists loaded options into.
//! Values are opaque byte strings; entries carry invalidation tags so that
//! related data changes can drop them in bulk.
//!
//! ## Implementations
//!
//! - **Moka**: in-process cache with a tag index
//! - **Redis**: distributed cache with per-tag key sets
//! - **Null**: disabled backend, every read misses

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// How a single entry is stored: its invalidation tags and an optional TTL.
/// Without a TTL the entry lives until its tags are invalidated.
///
/// # Example
///
/// ```
/// use eavo_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::new()
///     .with_tag("EAV")
///     .with_ttl(Duration::from_secs(600));
/// assert_eq!(config.tags, vec!["EAV".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the entry
    pub ttl: Option<Duration>,
    /// Invalidation tags attached to the entry
    pub tags: Vec<String>,
}

impl CacheEntryConfig {
    /// Create an untagged entry config without TTL
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the TTL for the entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Add one invalidation tag
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replace the invalidation tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Cache Operation Statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of reads that found a value
    pub hits: u64,
    /// Number of reads that found nothing
    pub misses: u64,
    /// Number of live entries
    pub entries: u64,
    /// Hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Backend Port
///
/// Key-value store with byte-string values and tag-based bulk
/// invalidation. Reads and writes are I/O and may fail; the resolver
/// degrades such failures to misses.
#[async_trait]
pub trait CacheBackend: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key` with the tags and TTL from `config`
    async fn save(&self, value: &[u8], key: &str, config: CacheEntryConfig) -> Result<()>;

    /// Remove every entry carrying any of `tags`
    ///
    /// Returns the number of entries removed.
    async fn invalidate_tags(&self, tags: &[String]) -> Result<usize>;

    /// Remove a single entry, returning whether it existed
    async fn remove(&self, key: &str) -> Result<bool>;

    /// Remove all entries
    async fn clear(&self) -> Result<()>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Whether the backend cache system is switched on
    fn is_enabled(&self) -> bool;

    /// Name of this backend implementation (e.g., "moka", "redis", "null")
    fn provider_name(&self) -> &str;
}
