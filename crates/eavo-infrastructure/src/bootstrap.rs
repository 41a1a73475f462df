//! Resolver wiring
//!
//! Turns an [`AppConfig`] into a ready [`OptionResolver`]: the cache backend
//! comes from the link-time registry, the caching switch from
//! [`ConfigFeatureFlag`].

use crate::config::{AppConfig, CacheConfig};
use crate::feature_flag::ConfigFeatureFlag;
use eavo_application::ports::registry::{CacheBackendConfig, resolve_cache_backend};
use eavo_application::use_cases::OptionResolver;
use eavo_domain::constants::CACHE_OPTION_VALUES_CONFIG_PATH;
use eavo_domain::error::{Error, Result};
use eavo_domain::ports::{BatchLoader, CacheBackend, FeatureFlag};
use std::sync::Arc;
use tracing::info;

/// Backend used when the cache system is switched off
const DISABLED_CACHE_PROVIDER: &str = "null";

/// Resolve the configured cache backend
///
/// A disabled cache resolves to the null backend regardless of `provider`.
pub fn build_cache_backend(config: &CacheConfig) -> Result<Arc<dyn CacheBackend>> {
    let backend_config = if config.enabled {
        config.backend_config()
    } else {
        CacheBackendConfig::new(DISABLED_CACHE_PROVIDER)
    };

    let backend = resolve_cache_backend(&backend_config).map_err(Error::config)?;
    info!(
        provider = backend.provider_name(),
        enabled = backend.is_enabled(),
        "Cache backend ready"
    );
    Ok(backend)
}

/// Build a resolver whose caching switch comes from configuration
pub fn build_resolver(config: &AppConfig, loader: Arc<dyn BatchLoader>) -> Result<OptionResolver> {
    let flag = Arc::new(ConfigFeatureFlag::from_config(&config.options));
    build_resolver_with_flag(config, loader, flag)
}

/// Build a resolver around an externally owned feature flag
pub fn build_resolver_with_flag(
    config: &AppConfig,
    loader: Arc<dyn BatchLoader>,
    flag: Arc<dyn FeatureFlag>,
) -> Result<OptionResolver> {
    let cache = build_cache_backend(&config.cache)?;
    let resolver = OptionResolver::new(cache, loader, flag).with_options(config.resolver_options());
    info!(
        switch = CACHE_OPTION_VALUES_CONFIG_PATH,
        caching_enabled = resolver.caching_enabled(),
        duplicate_policy = ?config.options.duplicate_policy,
        "Option resolver ready"
    );
    Ok(resolver)
}
