//! Cache Backend Registry

use std::sync::Arc;

use eavo_domain::ports::CacheBackend;

/// Configuration for cache backend creation
///
/// Backends use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CacheBackendConfig {
    /// Backend name (e.g., "moka", "redis", "null")
    pub provider: String,
    /// Connection URI (for distributed caches)
    pub uri: Option<String>,
    /// Maximum number of entries
    pub max_capacity: Option<u64>,
    /// Entry TTL in seconds
    pub ttl_secs: Option<u64>,
}

impl CacheBackendConfig {
    /// Create a new config with the given backend name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the max capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Set the TTL in seconds
    pub fn with_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = Some(ttl_secs);
        self
    }
}

/// Registry entry for cache backends
pub struct CacheBackendEntry {
    /// Unique backend name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(&CacheBackendConfig) -> Result<Arc<dyn CacheBackend>, String>,
}

#[linkme::distributed_slice]
pub static CACHE_BACKENDS: [CacheBackendEntry] = [..];

/// Resolve a cache backend by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn CacheBackend>)` - Created backend instance
/// * `Err(String)` - Backend not found or creation failed
pub fn resolve_cache_backend(
    config: &CacheBackendConfig,
) -> Result<Arc<dyn CacheBackend>, String> {
    for entry in CACHE_BACKENDS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CACHE_BACKENDS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown cache backend '{}'. Available backends: {:?}",
        config.provider, available
    ))
}

/// List all registered cache backends as (name, description) pairs
pub fn list_cache_backends() -> Vec<(&'static str, &'static str)> {
    CACHE_BACKENDS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
