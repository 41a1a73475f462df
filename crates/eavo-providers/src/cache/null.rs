//! Null cache backend
//!
//! Stands in when the cache system is switched off. Reports itself as
//! disabled so the resolver never reaches it.

use async_trait::async_trait;
use eavo_application::ports::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};
use eavo_domain::error::Result;
use eavo_domain::ports::{CacheBackend, CacheEntryConfig, CacheStats};
use std::sync::Arc;

/// Cache backend that stores nothing
#[derive(Debug, Clone, Default)]
pub struct NullCacheBackend;

impl NullCacheBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheBackend for NullCacheBackend {
    async fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn save(&self, _value: &[u8], _key: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn invalidate_tags(&self, _tags: &[String]) -> Result<usize> {
        Ok(0)
    }

    async fn remove(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(CACHE_BACKENDS)]
static NULL_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "null",
    description: "Disabled cache, every read misses",
    factory: |_config: &CacheBackendConfig| Ok(Arc::new(NullCacheBackend::new())),
};
