//! Tests for resolver wiring from configuration

use eavo_domain::error::Error;
use eavo_domain::value_objects::{AttributeId, AttributeOption, OptionScope, StoreId};
use eavo_infrastructure::bootstrap::{build_cache_backend, build_resolver, build_resolver_with_flag};
use eavo_infrastructure::config::{AppConfig, CacheConfig};
use eavo_infrastructure::feature_flag::ConfigFeatureFlag;
use eavo_domain::ports::FeatureFlag;
use eavo_providers::loader::InMemoryOptionSource;
use std::sync::Arc;

const ATTRIBUTE: AttributeId = AttributeId(5);
const STORE: StoreId = StoreId(1);

fn source() -> Arc<InMemoryOptionSource> {
    Arc::new(InMemoryOptionSource::new().with_options(
        OptionScope::new(STORE, ATTRIBUTE),
        vec![
            AttributeOption::new("10", "Red"),
            AttributeOption::new("11", "Blue"),
        ],
    ))
}

fn caching_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.options.cache_option_values = true;
    config
}

#[test]
fn test_enabled_cache_resolves_configured_provider() {
    let backend = build_cache_backend(&CacheConfig::default()).unwrap();
    assert_eq!(backend.provider_name(), "moka");
    assert!(backend.is_enabled());
}

#[test]
fn test_disabled_cache_resolves_null_backend() {
    let config = CacheConfig {
        enabled: false,
        ..CacheConfig::default()
    };

    let backend = build_cache_backend(&config).unwrap();
    assert_eq!(backend.provider_name(), "null");
    assert!(!backend.is_enabled());
}

#[test]
fn test_unknown_provider_is_a_configuration_error() {
    let config = CacheConfig {
        provider: "memcached".to_string(),
        ..CacheConfig::default()
    };

    let err = build_cache_backend(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("memcached"));
}

#[test]
fn test_flag_off_by_default_disables_caching() {
    let resolver = build_resolver(&AppConfig::default(), source()).unwrap();
    assert!(!resolver.caching_enabled());
}

#[tokio::test]
async fn test_configured_resolver_reads_through_moka() {
    let loader = source();
    let resolver = build_resolver(&caching_config(), loader.clone()).unwrap();
    assert!(resolver.caching_enabled());

    let options = resolver
        .resolve_options(ATTRIBUTE, STORE, vec![11u32, 10], true)
        .await
        .unwrap();

    assert_eq!(
        options,
        vec![
            AttributeOption::empty(),
            AttributeOption::new("10", "Red"),
            AttributeOption::new("11", "Blue"),
        ]
    );
    assert_eq!(loader.load_count(), 1);

    let stats = resolver.stats();
    assert_eq!(stats.cache_misses, 1);
    assert_eq!(stats.loader_calls, 1);
    assert_eq!(stats.cache_errors, 0);

    // Served from the memo
    resolver
        .resolve_options(ATTRIBUTE, STORE, 10u32, false)
        .await
        .unwrap();
    assert_eq!(loader.load_count(), 1);
    assert_eq!(resolver.stats().memo_hits, 1);
}

#[tokio::test]
async fn test_runtime_flag_toggle() {
    let flag = Arc::new(ConfigFeatureFlag::new(true));
    let resolver = build_resolver_with_flag(&AppConfig::default(), source(), flag.clone()).unwrap();
    assert!(resolver.caching_enabled());

    flag.set(false);
    assert!(!flag.is_enabled());
    assert!(!resolver.caching_enabled());

    resolver
        .resolve_options(ATTRIBUTE, STORE, 10u32, false)
        .await
        .unwrap();
    let stats = resolver.stats();
    assert_eq!(stats.cache_misses, 0);
    assert_eq!(stats.loader_calls, 1);
}

#[test]
fn test_flag_from_config() {
    assert!(ConfigFeatureFlag::from_config(&caching_config().options).is_enabled());
    assert!(!ConfigFeatureFlag::from_config(&AppConfig::default().options).is_enabled());
}
