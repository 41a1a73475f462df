//! Failure handling: cache faults degrade to misses, loader faults propagate

use crate::support::{RecordingCache, RecordingLoader, colour_catalog};
use eavo_application::use_cases::{OptionResolver, ResolverOptions};
use eavo_domain::error::Error;
use eavo_domain::value_objects::{AttributeId, AttributeOption, OptionScope, StoreId};
use eavo_providers::flags::StaticFeatureFlag;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const ATTRIBUTE: AttributeId = AttributeId(5);
const STORE: StoreId = StoreId(1);
const KEY: &str = "ATTRIBUTE_OPTION_TEXT-5-1-10";

fn cached_resolver(cache: &Arc<RecordingCache>, loader: &Arc<RecordingLoader>) -> OptionResolver {
    OptionResolver::new(
        cache.clone(),
        loader.clone(),
        Arc::new(StaticFeatureFlag::enabled()),
    )
}

fn loader() -> Arc<RecordingLoader> {
    Arc::new(RecordingLoader::with_catalog(&colour_catalog()))
}

#[tokio::test]
async fn test_corrupt_entry_is_a_miss_and_gets_rewritten() {
    let cache = Arc::new(RecordingCache::default());
    cache.insert_raw(KEY, b"{\"truncated");
    let loader = loader();
    let resolver = cached_resolver(&cache, &loader);

    let options = resolver
        .resolve_options(ATTRIBUTE, STORE, 10u32, false)
        .await
        .unwrap();

    assert_eq!(options, vec![AttributeOption::new("10", "Red")]);
    assert_eq!(loader.call_count(), 1);
    assert_eq!(cache.save_count(), 1);
    assert_eq!(
        cache.raw(KEY).unwrap(),
        br#"[{"value":"10","label":"Red"}]"#.to_vec()
    );
    assert_eq!(resolver.stats().cache_errors, 1);
}

#[tokio::test]
async fn test_unreadable_cache_falls_back_to_loader() {
    let cache = Arc::new(RecordingCache::default());
    cache.set_fail_reads(true);
    let loader = loader();
    let resolver = cached_resolver(&cache, &loader);

    let options = resolver
        .resolve_options(ATTRIBUTE, STORE, 10u32, false)
        .await
        .unwrap();

    assert_eq!(options, vec![AttributeOption::new("10", "Red")]);
    assert_eq!(loader.call_count(), 1);
    assert_eq!(cache.save_count(), 1);
}

#[tokio::test]
async fn test_unwritable_cache_still_returns_options() {
    let cache = Arc::new(RecordingCache::default());
    cache.set_fail_writes(true);
    let loader = loader();
    let resolver = cached_resolver(&cache, &loader);

    let options = resolver
        .resolve_options(ATTRIBUTE, STORE, 10u32, true)
        .await
        .unwrap();

    assert_eq!(
        options,
        vec![AttributeOption::empty(), AttributeOption::new("10", "Red")]
    );
    assert_eq!(cache.save_count(), 0);
    assert_eq!(resolver.stats().cache_errors, 1);
    assert!(resolver.memo().contains(&OptionScope::new(1, 5), "10"));
}

#[tokio::test]
async fn test_loader_failure_propagates_without_caching() {
    let cache = Arc::new(RecordingCache::default());
    let loader = loader();
    loader.set_failing(true);
    let resolver = cached_resolver(&cache, &loader);

    let err = resolver
        .resolve_options(ATTRIBUTE, STORE, vec![10u32, 11], true)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Load { .. }));
    assert_eq!(cache.save_count(), 0);
    assert!(resolver.memo().is_empty());

    // Nothing was poisoned: the next call loads normally
    loader.set_failing(false);
    let options = resolver
        .resolve_options(ATTRIBUTE, STORE, vec![10u32, 11], false)
        .await
        .unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(loader.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_slow_cache_read_times_out_as_miss() {
    let cache = Arc::new(RecordingCache::default().with_read_delay(Duration::from_secs(30)));
    cache.insert_raw(
        KEY,
        br#"[{"value":"10","label":"Cached"}]"#,
    );
    let loader = loader();
    let resolver = cached_resolver(&cache, &loader).with_options(
        ResolverOptions::default().with_cache_timeout(Duration::from_millis(50)),
    );

    let options = resolver
        .resolve_options(ATTRIBUTE, STORE, 10u32, false)
        .await
        .unwrap();

    assert_eq!(options, vec![AttributeOption::new("10", "Red")]);
    assert_eq!(loader.call_count(), 1);
    assert_eq!(resolver.stats().cache_errors, 1);
}

#[tokio::test]
async fn test_cancelled_token_skips_cache_io() {
    let cache = Arc::new(RecordingCache::default());
    cache.insert_raw(
        KEY,
        br#"[{"value":"10","label":"Cached"}]"#,
    );
    let loader = loader();
    let resolver = cached_resolver(&cache, &loader);
    let token = CancellationToken::new();
    token.cancel();

    let options = resolver
        .resolve_options_cancellable(ATTRIBUTE, STORE, 10u32, false, &token)
        .await
        .unwrap();

    assert_eq!(options, vec![AttributeOption::new("10", "Red")]);
    assert_eq!(loader.call_count(), 1);
    assert_eq!(cache.save_count(), 0);
    assert_eq!(resolver.stats().cache_errors, 2);
}

#[tokio::test]
async fn test_live_token_behaves_like_plain_resolution() {
    let cache = Arc::new(RecordingCache::default());
    let loader = loader();
    let resolver = cached_resolver(&cache, &loader);
    let token = CancellationToken::new();

    resolver
        .resolve_options_cancellable(ATTRIBUTE, STORE, 10u32, false, &token)
        .await
        .unwrap();

    assert_eq!(cache.save_count(), 1);
    assert_eq!(resolver.stats().cache_errors, 0);
}
