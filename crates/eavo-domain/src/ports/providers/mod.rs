//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CacheBackend`] | Shared key-value store with tag invalidation |
//! | [`BatchLoader`] | Source of truth for option records |
//! | [`FeatureFlag`] | Boolean switch for option-value caching |

pub mod cache;
pub mod feature_flag;
pub mod loader;

pub use cache::{CacheBackend, CacheEntryConfig, CacheStats};
pub use feature_flag::FeatureFlag;
pub use loader::BatchLoader;
