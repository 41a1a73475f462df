//! Domain Constants
//!
//! Values shared by the key builder, the resolver and the cache backends.

/// Namespace prefix for option-text cache keys
pub const ATTRIBUTE_OPTION_TEXT: &str = "ATTRIBUTE_OPTION_TEXT";

/// Separator between the segments of a cache key
pub const CACHE_KEY_SEPARATOR: &str = "-";

/// Separator between option IDs inside the last key segment
pub const OPTION_ID_SEPARATOR: &str = ",";

/// Invalidation tag of the EAV cache type
pub const EAV_CACHE_TAG: &str = "EAV";

/// Invalidation tag of entity attributes
pub const EAV_ATTRIBUTE_CACHE_TAG: &str = "EAV_ATTRIBUTE";

/// Value of the synthetic "no selection" option. Never a real option ID.
pub const EMPTY_OPTION_VALUE: &str = "";

/// Label of the synthetic "no selection" option (a single space)
pub const EMPTY_OPTION_LABEL: &str = " ";

/// Configuration path of the option-value caching switch
pub const CACHE_OPTION_VALUES_CONFIG_PATH: &str = "dev/caching/cache_option_values";

/// Tags attached to every option cache entry
pub fn option_cache_tags() -> Vec<String> {
    vec![
        EAV_CACHE_TAG.to_string(),
        EAV_ATTRIBUTE_CACHE_TAG.to_string(),
    ]
}
