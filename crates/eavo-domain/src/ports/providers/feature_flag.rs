//! Feature Flag Port

/// Boolean configuration switch, sourced externally
pub trait FeatureFlag: Send + Sync + std::fmt::Debug {
    /// Whether the feature is switched on
    fn is_enabled(&self) -> bool;
}
