//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the EAV option cache
#[derive(Error, Debug)]
pub enum Error {
    /// The batch loader could not produce option records
    #[error("Option load failed: {message}")]
    Load {
        /// Description of the load failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The cache backend could not serve a read or write
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A cache entry could not be deserialized
    #[error("Corrupt cache entry '{key}': {source}")]
    CorruptCacheEntry {
        /// The cache key holding the corrupt value
        key: String,
        /// The decoding error
        #[source]
        source: serde_json::Error,
    },

    /// A collaborator call exceeded its deadline
    #[error("Operation timed out: {operation}")]
    Timeout {
        /// The operation that timed out
        operation: String,
    },

    /// A collaborator call was cancelled by the caller
    #[error("Operation cancelled: {operation}")]
    Cancelled {
        /// The operation that was cancelled
        operation: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

// Error creation methods
impl Error {
    /// Create a load failure
    pub fn load<S: Into<String>>(message: S) -> Self {
        Self::Load {
            message: message.into(),
            source: None,
        }
    }

    /// Create a load failure with source
    pub fn load_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Load {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache error with source
    pub fn cache_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Cache {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// Create a cancellation error
    pub fn cancelled<S: Into<String>>(operation: S) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// Error classification
impl Error {
    /// Whether the resolver may degrade this error to a cache miss
    pub fn is_cache_degradable(&self) -> bool {
        matches!(
            self,
            Self::Cache { .. }
                | Self::CorruptCacheEntry { .. }
                | Self::Timeout { .. }
                | Self::Cancelled { .. }
        )
    }

    /// Whether this error came from the batch loader
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}
