//! Value Objects
//!
//! Immutable types describing attribute options and the scopes they live in.

pub mod ids;
pub mod option;

pub use ids::{AttributeId, OptionId, OptionScope, RequestedIds, StoreId};
pub use option::AttributeOption;
