//! # Infrastructure Layer
//!
//! Cross-cutting concerns around the option resolver.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`feature_flag`] | Runtime-togglable caching switch |
//! | [`bootstrap`] | Builds a resolver from configuration |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`constants`] | Configuration constants |

// Linked for cache backend registration
extern crate eavo_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod feature_flag;
pub mod logging;

pub use bootstrap::{build_cache_backend, build_resolver, build_resolver_with_flag};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use feature_flag::ConfigFeatureFlag;
