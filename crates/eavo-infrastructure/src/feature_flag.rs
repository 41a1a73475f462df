//! Configuration-backed caching switch

use crate::config::OptionCacheConfig;
use eavo_domain::ports::FeatureFlag;
use std::sync::atomic::{AtomicBool, Ordering};

/// The `dev/caching/cache_option_values` switch
///
/// Seeded from configuration; [`set`](Self::set) flips it at runtime, e.g.
/// after a configuration reload.
#[derive(Debug, Default)]
pub struct ConfigFeatureFlag {
    enabled: AtomicBool,
}

impl ConfigFeatureFlag {
    /// Create a flag with an explicit state
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Create a flag from the option cache configuration
    pub fn from_config(config: &OptionCacheConfig) -> Self {
        Self::new(config.cache_option_values)
    }

    /// Switch the flag on or off
    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

impl FeatureFlag for ConfigFeatureFlag {
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}
