//! # Application Layer
//!
//! Read-through option resolution in front of an expensive batch loader.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain_services`] | Key building, the option memo and the cache-entry codec |
//! | [`use_cases`] | [`OptionResolver`], the two-layer read-through cache |
//! | [`ports::registry`] | Compile-time registry of cache backends |
//!
//! ```text
//! resolve_options → OptionMemo ─hit→ result
//!                        │miss
//!                        ↓
//!                   CacheBackend ─hit→ memo ← result
//!                        │miss
//!                        ↓
//!                   BatchLoader → CacheBackend + memo ← result
//! ```

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::{OptionKeyBuilder, OptionMemo};
pub use use_cases::{DuplicatePolicy, OptionResolver, ResolverOptions, ResolverStatsSnapshot};
