//! Cache key construction
//!
//! Keys have the shape `namespace-attribute-store-id1,id2,...`. The ID list
//! keeps the caller's order, so the same set requested in a different order
//! maps to a different key.

use eavo_domain::constants::{ATTRIBUTE_OPTION_TEXT, CACHE_KEY_SEPARATOR, OPTION_ID_SEPARATOR};
use eavo_domain::value_objects::{AttributeId, OptionId, StoreId};

/// Build the cache key for a set of option IDs
pub fn build_key(
    namespace: &str,
    attribute_id: AttributeId,
    store_id: StoreId,
    option_ids: &[OptionId],
) -> String {
    let ids = option_ids
        .iter()
        .map(OptionId::as_str)
        .collect::<Vec<_>>()
        .join(OPTION_ID_SEPARATOR);

    [
        namespace.to_string(),
        attribute_id.to_string(),
        store_id.to_string(),
        ids,
    ]
    .join(CACHE_KEY_SEPARATOR)
}

/// Deterministic cache-key builder bound to one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionKeyBuilder {
    namespace: String,
}

impl OptionKeyBuilder {
    /// Create a builder for a custom namespace
    pub fn new<S: Into<String>>(namespace: S) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Namespace used as the first key segment
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Build the key for `option_ids` in the given attribute and store
    pub fn build_key(
        &self,
        attribute_id: AttributeId,
        store_id: StoreId,
        option_ids: &[OptionId],
    ) -> String {
        build_key(&self.namespace, attribute_id, store_id, option_ids)
    }
}

impl Default for OptionKeyBuilder {
    fn default() -> Self {
        Self::new(ATTRIBUTE_OPTION_TEXT)
    }
}
