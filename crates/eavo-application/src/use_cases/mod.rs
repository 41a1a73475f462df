//! Application use cases

pub mod option_resolver;
pub mod single_flight;

pub use option_resolver::{
    DEFAULT_CACHE_TIMEOUT, DuplicatePolicy, OptionResolver, ResolverOptions, ResolverStatsSnapshot,
};
pub use single_flight::SingleFlight;
