//! Infrastructure Constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "EAVO";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "eavo.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "EAVO_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default cache backend
pub const DEFAULT_CACHE_PROVIDER: &str = "moka";

/// Default maximum number of cache entries
pub const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;

/// Default cache operation timeout in milliseconds
pub const DEFAULT_CACHE_TIMEOUT_MS: u64 = 250;
