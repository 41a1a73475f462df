//! Cache entry codec
//!
//! Entries are JSON arrays of `{"value", "label"}` objects, so the load
//! order of the options survives the round trip.

use eavo_domain::error::{Error, Result};
use eavo_domain::value_objects::AttributeOption;

/// Serialize options into a cache entry
pub fn encode_options(options: &[AttributeOption]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(options)?)
}

/// Deserialize a cache entry read from `key`
pub fn decode_options(key: &str, bytes: &[u8]) -> Result<Vec<AttributeOption>> {
    serde_json::from_slice(bytes).map_err(|source| Error::CorruptCacheEntry {
        key: key.to_string(),
        source,
    })
}
