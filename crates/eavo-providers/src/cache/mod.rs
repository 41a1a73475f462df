//! Cache Backend Implementations
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`NullCacheBackend`] | Disabled | Every read misses, writes are dropped |
//! | [`MokaCacheBackend`] | Local | In-memory cache with a tag index |
//! | [`RedisCacheBackend`] | Distributed | Redis values plus per-tag key sets |

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheBackend;
pub use null::NullCacheBackend;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheBackend;
