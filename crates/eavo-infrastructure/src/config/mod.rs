//! Configuration
//!
//! Layered configuration built with Figment: compiled defaults, then an
//! optional TOML file, then `EAVO_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheConfig, LoggingConfig, OptionCacheConfig};
