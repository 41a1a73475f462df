//! Fixed feature flags

use eavo_domain::ports::FeatureFlag;

/// Feature flag with a value fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFeatureFlag(bool);

impl StaticFeatureFlag {
    /// Create a flag with the given state
    pub fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    /// A flag that is always on
    pub fn enabled() -> Self {
        Self(true)
    }

    /// A flag that is always off
    pub fn disabled() -> Self {
        Self(false)
    }
}

impl FeatureFlag for StaticFeatureFlag {
    fn is_enabled(&self) -> bool {
        self.0
    }
}
