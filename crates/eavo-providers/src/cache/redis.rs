//! Redis distributed cache backend
//!
//! Values are plain Redis strings. Every tag owns a set
//! (`eavo:tag:<tag>`) listing the keys saved with it; invalidating a tag
//! deletes those keys and then the set itself.
//!
//! ## Example
//!
//! ```ignore
//! use eavo_providers::cache::RedisCacheBackend;
//!
//! let backend = RedisCacheBackend::new("redis://localhost:6379")?;
//! ```

use crate::constants::REDIS_TAG_SET_PREFIX;
use async_trait::async_trait;
use eavo_application::ports::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};
use eavo_domain::error::{Error, Result};
use eavo_domain::ports::{CacheBackend, CacheEntryConfig, CacheStats};
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::sync::{Arc, RwLock};

/// Redis cache backend
#[derive(Clone)]
pub struct RedisCacheBackend {
    client: Client,
    stats: Arc<RwLock<CacheStats>>,
}

impl RedisCacheBackend {
    /// Create a backend from a connection URL (e.g. "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::cache_with_source("Failed to create Redis client", e))?;

        Ok(Self {
            client,
            stats: Arc::new(RwLock::new(CacheStats::new())),
        })
    }

    /// Name of the set tracking the keys of `tag`
    pub fn tag_set_key(tag: &str) -> String {
        format!("{REDIS_TAG_SET_PREFIX}{tag}")
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::cache_with_source("Failed to get Redis connection", e))
    }

    fn record(&self, hit: bool) {
        if let Ok(mut stats) = self.stats.write() {
            if hit {
                stats.hits += 1;
            } else {
                stats.misses += 1;
            }
            stats.hit_rate = stats.calculate_hit_rate();
        }
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;

        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| Error::cache_with_source("Redis GET failed", e))?;
        self.record(value.is_some());
        Ok(value)
    }

    async fn save(&self, value: &[u8], key: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.connection().await?;

        let ttl_seconds = config.ttl.map_or(0, |ttl| ttl.as_secs());
        let result: redis::RedisResult<()> = if ttl_seconds > 0 {
            conn.set_ex(key, value, ttl_seconds).await
        } else {
            conn.set(key, value).await
        };
        result.map_err(|e| Error::cache_with_source("Redis SET failed", e))?;

        for tag in &config.tags {
            let _: () = conn
                .sadd(Self::tag_set_key(tag), key)
                .await
                .map_err(|e| Error::cache_with_source("Redis SADD failed", e))?;
        }
        Ok(())
    }

    async fn invalidate_tags(&self, tags: &[String]) -> Result<usize> {
        let mut conn = self.connection().await?;

        let mut removed = 0;
        for tag in tags {
            let set_key = Self::tag_set_key(tag);
            let keys: Vec<String> = conn
                .smembers(&set_key)
                .await
                .map_err(|e| Error::cache_with_source("Redis SMEMBERS failed", e))?;

            if !keys.is_empty() {
                let count: usize = conn
                    .del(&keys)
                    .await
                    .map_err(|e| Error::cache_with_source("Redis DEL failed", e))?;
                removed += count;
            }
            let _: () = conn
                .del(&set_key)
                .await
                .map_err(|e| Error::cache_with_source("Redis DEL failed", e))?;
        }
        Ok(removed)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let count: usize = conn
            .del(key)
            .await
            .map_err(|e| Error::cache_with_source("Redis DEL failed", e))?;
        Ok(count > 0)
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(|e| Error::cache_with_source("Redis FLUSHDB failed", e))
    }

    async fn stats(&self) -> Result<CacheStats> {
        let mut conn = self.connection().await?;

        let dbsize: usize = redis::cmd("DBSIZE")
            .query_async(&mut conn)
            .await
            .map_err(|e| Error::cache_with_source("Redis DBSIZE failed", e))?;

        let mut stats = self
            .stats
            .read()
            .map_err(|_| Error::cache("Failed to read cache stats"))?
            .clone();
        stats.entries = dbsize as u64;
        Ok(stats)
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheBackend").finish_non_exhaustive()
    }
}

fn redis_backend_factory(
    config: &CacheBackendConfig,
) -> std::result::Result<Arc<dyn CacheBackend>, String> {
    let uri = config
        .uri
        .as_deref()
        .ok_or_else(|| "Redis backend requires a connection URI".to_string())?;
    let backend = RedisCacheBackend::new(uri).map_err(|e| e.to_string())?;
    Ok(Arc::new(backend))
}

#[linkme::distributed_slice(CACHE_BACKENDS)]
static REDIS_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "redis",
    description: "Redis distributed cache with tag sets",
    factory: redis_backend_factory,
};
