//! Configuration types

use crate::constants::*;
use eavo_application::ports::registry::CacheBackendConfig;
use eavo_application::use_cases::{DuplicatePolicy, ResolverOptions};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Cache backend settings
    pub cache: CacheConfig,
    /// Option resolution settings
    pub options: OptionCacheConfig,
}

impl AppConfig {
    /// Resolver options derived from this configuration
    pub fn resolver_options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::default()
            .with_duplicate_policy(self.options.duplicate_policy)
            .with_single_flight(self.options.single_flight)
            .with_cache_timeout(Duration::from_millis(self.cache.timeout_ms));
        if self.cache.ttl_secs > 0 {
            options = options.with_entry_ttl(Duration::from_secs(self.cache.ttl_secs));
        }
        options
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rotated file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Cache backend configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend cache system switch; off means the null backend
    pub enabled: bool,

    /// Registered backend name
    pub provider: String,

    /// Maximum number of entries (in-process backends)
    pub max_capacity: u64,

    /// Entry TTL in seconds; 0 keeps entries until tag invalidation
    pub ttl_secs: u64,

    /// Redis URL (for the Redis backend)
    pub redis_url: Option<String>,

    /// Deadline for each cache read or write, in milliseconds
    pub timeout_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            max_capacity: DEFAULT_CACHE_MAX_CAPACITY,
            ttl_secs: 0,
            redis_url: None,
            timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
        }
    }
}

impl CacheConfig {
    /// Registry configuration for the selected backend
    pub fn backend_config(&self) -> CacheBackendConfig {
        let mut config = CacheBackendConfig::new(self.provider.clone())
            .with_max_capacity(self.max_capacity)
            .with_ttl_secs(self.ttl_secs);
        if let Some(url) = &self.redis_url {
            config = config.with_uri(url.clone());
        }
        config
    }
}

/// Option resolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionCacheConfig {
    /// Cache option values (`dev/caching/cache_option_values`)
    ///
    /// Accepts booleans as well as `1`/`0`; only `1` (or true) switches it on.
    #[serde(deserialize_with = "deserialize_switch")]
    pub cache_option_values: bool,

    /// Repeated-ID handling within one request
    pub duplicate_policy: DuplicatePolicy,

    /// Collapse concurrent loads of the same option set
    pub single_flight: bool,
}

impl Default for OptionCacheConfig {
    fn default() -> Self {
        Self {
            cache_option_values: false,
            duplicate_policy: DuplicatePolicy::Dedupe,
            single_flight: true,
        }
    }
}

fn deserialize_switch<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Switch {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Switch::deserialize(deserializer)? {
        Switch::Bool(enabled) => enabled,
        Switch::Int(value) => value == 1,
        Switch::Text(value) => matches!(value.trim(), "1" | "true"),
    })
}
