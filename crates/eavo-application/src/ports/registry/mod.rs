//! Provider Registry System
//!
//! Compile-time registration of cache backends through `linkme`
//! distributed slices.
//!
//! ```text
//! 1. Backend defines:  #[linkme::distributed_slice(CACHE_BACKENDS)]
//!                      static ENTRY: CacheBackendEntry = ...
//! 2. Registry declares the slice
//! 3. Resolver scans CACHE_BACKENDS
//! 4. Config selects:   provider = "moka" → MokaCacheBackend
//! ```
//!
//! ### Registering a backend (in eavo-providers)
//!
//! ```ignore
//! use eavo_application::ports::registry::{CacheBackendEntry, CACHE_BACKENDS};
//!
//! #[linkme::distributed_slice(CACHE_BACKENDS)]
//! static MOKA_BACKEND: CacheBackendEntry = CacheBackendEntry {
//!     name: "moka",
//!     description: "Moka in-memory cache",
//!     factory: |config| Ok(Arc::new(MokaCacheBackend::from_config(config))),
//! };
//! ```

pub mod cache;

pub use cache::{
    CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry, list_cache_backends,
    resolve_cache_backend,
};
