//! Provider Constants

/// Default maximum number of entries held by the Moka backend
pub const CACHE_DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// Key prefix of the Redis sets tracking which keys carry a tag
pub const REDIS_TAG_SET_PREFIX: &str = "eavo:tag:";
