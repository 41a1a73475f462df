//! Option Resolver Use Case
//!
//! Two-layer read-through cache in front of a [`BatchLoader`]:
//!
//! 1. IDs already in the [`OptionMemo`] are served from memory.
//! 2. The remaining IDs are looked up in the [`CacheBackend`] under one key
//!    built from the attribute, the store and the missing IDs.
//! 3. On a cache miss the loader fetches them (always without the empty
//!    option) and the result is written back to the cache, tagged for
//!    bulk invalidation.
//! 4. Loaded options enter the memo; the empty option is prepended last.
//!
//! Cache failures of any kind degrade to a miss. Loader failures propagate
//! and nothing is cached for them.

use crate::domain_services::{OptionKeyBuilder, OptionMemo, decode_options, encode_options};
use crate::use_cases::single_flight::SingleFlight;
use eavo_domain::constants::option_cache_tags;
use eavo_domain::error::{Error, Result};
use eavo_domain::ports::{BatchLoader, CacheBackend, CacheEntryConfig, FeatureFlag};
use eavo_domain::value_objects::{
    AttributeId, AttributeOption, OptionId, OptionScope, RequestedIds, StoreId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default deadline for a single cache read or write
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_millis(250);

/// How repeated IDs within one request are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Drop repeated IDs at entry, keeping the first occurrence
    #[default]
    Dedupe,
    /// Keep repeated IDs: memo hits repeat in the output and duplicates
    /// reach the cache key and the loader
    Preserve,
}

/// Resolver tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Repeated-ID handling
    pub duplicate_policy: DuplicatePolicy,
    /// Deadline for each cache read or write
    pub cache_timeout: Duration,
    /// TTL attached to written cache entries
    pub entry_ttl: Option<Duration>,
    /// Collapse concurrent loads of the same cache key
    pub single_flight: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
            entry_ttl: None,
            single_flight: true,
        }
    }
}

impl ResolverOptions {
    /// Set the duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the cache deadline
    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self
    }

    /// Set the entry TTL
    pub fn with_entry_ttl(mut self, ttl: Duration) -> Self {
        self.entry_ttl = Some(ttl);
        self
    }

    /// Enable or disable single-flight loading
    pub fn with_single_flight(mut self, enabled: bool) -> Self {
        self.single_flight = enabled;
        self
    }
}

#[derive(Debug, Default)]
struct ResolverStats {
    memo_hits: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    cache_errors: AtomicU64,
    loader_calls: AtomicU64,
}

impl ResolverStats {
    fn bump(counter: &AtomicU64, by: u64) {
        counter.fetch_add(by, Ordering::Relaxed);
    }

    fn snapshot(&self) -> ResolverStatsSnapshot {
        ResolverStatsSnapshot {
            memo_hits: self.memo_hits.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            cache_errors: self.cache_errors.load(Ordering::Relaxed),
            loader_calls: self.loader_calls.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the resolver counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolverStatsSnapshot {
    /// Options served from the memo
    pub memo_hits: u64,
    /// Cache reads that produced a usable entry
    pub cache_hits: u64,
    /// Cache reads that found nothing usable
    pub cache_misses: u64,
    /// Cache reads or writes that failed and were degraded
    pub cache_errors: u64,
    /// Calls made to the batch loader
    pub loader_calls: u64,
}

/// Read-through resolver for attribute option labels
pub struct OptionResolver {
    cache: Arc<dyn CacheBackend>,
    loader: Arc<dyn BatchLoader>,
    feature_flag: Arc<dyn FeatureFlag>,
    memo: Arc<OptionMemo>,
    key_builder: OptionKeyBuilder,
    options: ResolverOptions,
    flights: SingleFlight,
    stats: ResolverStats,
}

// Construction
impl OptionResolver {
    /// Create a resolver with its own memo and default options
    pub fn new(
        cache: Arc<dyn CacheBackend>,
        loader: Arc<dyn BatchLoader>,
        feature_flag: Arc<dyn FeatureFlag>,
    ) -> Self {
        Self {
            cache,
            loader,
            feature_flag,
            memo: Arc::new(OptionMemo::new()),
            key_builder: OptionKeyBuilder::default(),
            options: ResolverOptions::default(),
            flights: SingleFlight::new(),
            stats: ResolverStats::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a memo supplied by the caller, e.g. one scoped to a request
    pub fn with_memo(mut self, memo: Arc<OptionMemo>) -> Self {
        self.memo = memo;
        self
    }

    /// Replace the key builder
    pub fn with_key_builder(mut self, key_builder: OptionKeyBuilder) -> Self {
        self.key_builder = key_builder;
        self
    }

    /// The memo this resolver fills
    pub fn memo(&self) -> Arc<OptionMemo> {
        Arc::clone(&self.memo)
    }

    /// Current options
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> ResolverStatsSnapshot {
        self.stats.snapshot()
    }

    /// Whether option caching is on: feature flag and backend both enabled
    pub fn caching_enabled(&self) -> bool {
        self.feature_flag.is_enabled() && self.cache.is_enabled()
    }
}

// Resolution
impl OptionResolver {
    /// Resolve option labels, taking the caching switch from the collaborators
    pub async fn resolve_options(
        &self,
        attribute_id: AttributeId,
        store_id: StoreId,
        ids: impl Into<RequestedIds>,
        with_empty: bool,
    ) -> Result<Vec<AttributeOption>> {
        let caching_enabled = self.caching_enabled();
        self.resolve(attribute_id, store_id, ids.into(), with_empty, caching_enabled, None)
            .await
    }

    /// Resolve option labels with an explicit caching switch
    pub async fn resolve_options_with(
        &self,
        attribute_id: AttributeId,
        store_id: StoreId,
        ids: impl Into<RequestedIds>,
        with_empty: bool,
        caching_enabled: bool,
    ) -> Result<Vec<AttributeOption>> {
        self.resolve(attribute_id, store_id, ids.into(), with_empty, caching_enabled, None)
            .await
    }

    /// Resolve option labels, abandoning cache I/O when `token` fires
    ///
    /// An abandoned read counts as a miss and an abandoned write is skipped.
    /// The loader call itself is never abandoned.
    pub async fn resolve_options_cancellable(
        &self,
        attribute_id: AttributeId,
        store_id: StoreId,
        ids: impl Into<RequestedIds>,
        with_empty: bool,
        token: &CancellationToken,
    ) -> Result<Vec<AttributeOption>> {
        let caching_enabled = self.caching_enabled();
        self.resolve(
            attribute_id,
            store_id,
            ids.into(),
            with_empty,
            caching_enabled,
            Some(token),
        )
        .await
    }

    async fn resolve(
        &self,
        attribute_id: AttributeId,
        store_id: StoreId,
        ids: RequestedIds,
        with_empty: bool,
        caching_enabled: bool,
        token: Option<&CancellationToken>,
    ) -> Result<Vec<AttributeOption>> {
        let scope = OptionScope::new(store_id, attribute_id);
        let ids = self.normalize(ids);

        let (mut resolved, missing) = self.memo.partition(&scope, &ids);
        ResolverStats::bump(&self.stats.memo_hits, resolved.len() as u64);

        if !missing.is_empty() {
            let key = self.key_builder.build_key(attribute_id, store_id, &missing);
            // Held until the memo is filled
            let flight = if self.options.single_flight {
                Some(self.flights.acquire(&key).await)
            } else {
                None
            };

            if flight.is_some() {
                let (hits, still_missing) = self.memo.partition(&scope, &missing);
                if still_missing.is_empty() {
                    debug!(%scope, key = %key, "Options filled by a concurrent resolution");
                    ResolverStats::bump(&self.stats.memo_hits, hits.len() as u64);
                    resolved.extend(hits);
                    return Ok(Self::finish(resolved, with_empty));
                }
            }

            let loaded = self
                .fetch(&scope, &key, &missing, caching_enabled, token)
                .await?;
            self.absorb(scope, loaded, &mut resolved);
        }

        Ok(Self::finish(resolved, with_empty))
    }

    fn absorb(
        &self,
        scope: OptionScope,
        loaded: Vec<AttributeOption>,
        resolved: &mut Vec<AttributeOption>,
    ) {
        for option in loaded {
            if option.is_empty_value() {
                warn!(%scope, "Loaded option carries the reserved empty value; not memoized");
            } else {
                self.memo
                    .put(scope, OptionId::from(option.value.clone()), option.clone());
            }
            resolved.push(option);
        }
    }

    fn finish(mut resolved: Vec<AttributeOption>, with_empty: bool) -> Vec<AttributeOption> {
        if with_empty {
            resolved.insert(0, AttributeOption::empty());
        }
        resolved
    }

    fn normalize(&self, ids: RequestedIds) -> Vec<OptionId> {
        let ids = ids.into_vec();
        match self.options.duplicate_policy {
            DuplicatePolicy::Preserve => ids,
            DuplicatePolicy::Dedupe => {
                let mut seen = HashSet::with_capacity(ids.len());
                ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
            }
        }
    }

    /// Cache first, loader on miss; writes the loader result back
    async fn fetch(
        &self,
        scope: &OptionScope,
        key: &str,
        missing: &[OptionId],
        caching_enabled: bool,
        token: Option<&CancellationToken>,
    ) -> Result<Vec<AttributeOption>> {
        if caching_enabled {
            if let Some(options) = self.read_cache(key, token).await {
                debug!(%scope, key, count = options.len(), "Option cache hit");
                ResolverStats::bump(&self.stats.cache_hits, 1);
                return Ok(options);
            }
            ResolverStats::bump(&self.stats.cache_misses, 1);
        }

        ResolverStats::bump(&self.stats.loader_calls, 1);
        info!(%scope, missing = missing.len(), "Loading options from source");
        let loaded = self.loader.load(scope, missing, false).await?;

        if caching_enabled {
            self.write_cache(key, &loaded, token).await;
        }
        Ok(loaded)
    }

    async fn read_cache(
        &self,
        key: &str,
        token: Option<&CancellationToken>,
    ) -> Option<Vec<AttributeOption>> {
        let read = self.guarded("cache load", token, self.cache.load(key)).await;
        let outcome = match read {
            Ok(Some(bytes)) => decode_options(key, &bytes).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(options) => options,
            Err(e) => {
                warn!(key, error = %e, "Option cache read degraded to miss");
                ResolverStats::bump(&self.stats.cache_errors, 1);
                None
            }
        }
    }

    async fn write_cache(
        &self,
        key: &str,
        options: &[AttributeOption],
        token: Option<&CancellationToken>,
    ) {
        let bytes = match encode_options(options) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key, error = %e, "Could not encode options for cache");
                ResolverStats::bump(&self.stats.cache_errors, 1);
                return;
            }
        };

        let mut config = CacheEntryConfig::new().with_tags(option_cache_tags());
        config.ttl = self.options.entry_ttl;

        let save = self
            .guarded("cache save", token, self.cache.save(&bytes, key, config))
            .await;
        if let Err(e) = save {
            warn!(key, error = %e, "Option cache write skipped");
            ResolverStats::bump(&self.stats.cache_errors, 1);
        }
    }

    /// Run a cache call under the configured deadline and the caller's token
    async fn guarded<T, F>(
        &self,
        operation: &'static str,
        token: Option<&CancellationToken>,
        call: F,
    ) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let timed = tokio::time::timeout(self.options.cache_timeout, call);
        match token {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::cancelled(operation)),
                result = timed => result.unwrap_or_else(|_| Err(Error::timeout(operation))),
            },
            None => timed
                .await
                .unwrap_or_else(|_| Err(Error::timeout(operation))),
        }
    }
}

impl std::fmt::Debug for OptionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionResolver")
            .field("cache", &self.cache.provider_name())
            .field("loader", &self.loader)
            .field("options", &self.options)
            .field("memoized", &self.memo.len())
            .finish()
    }
}
