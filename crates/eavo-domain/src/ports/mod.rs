//! Ports
//!
//! Contracts for the collaborators the option resolver consumes.
//! Implementations live in `eavo-providers`.

pub mod providers;

pub use providers::{BatchLoader, CacheBackend, CacheEntryConfig, CacheStats, FeatureFlag};
