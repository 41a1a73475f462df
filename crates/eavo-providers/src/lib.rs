//! # Provider Implementations
//!
//! Concrete collaborators for the option resolver.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Moka, Redis and Null cache backends |
//! | [`loader`] | In-memory option source |
//! | [`flags`] | Fixed feature flags |
//!
//! Backends register themselves in the `eavo-application` registry at link
//! time, so depending on this crate is enough to make them resolvable.

pub mod cache;
pub mod constants;
pub mod flags;
pub mod loader;

pub use cache::NullCacheBackend;
#[cfg(feature = "cache-moka")]
pub use cache::MokaCacheBackend;
#[cfg(feature = "cache-redis")]
pub use cache::RedisCacheBackend;
pub use flags::StaticFeatureFlag;
pub use loader::InMemoryOptionSource;
