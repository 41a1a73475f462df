//! Application ports
//!
//! Provider traits live in `eavo-domain`; this layer adds the registry
//! through which backends are discovered by name.

pub mod registry;

pub use eavo_domain::ports::{BatchLoader, CacheBackend, CacheEntryConfig, CacheStats, FeatureFlag};
