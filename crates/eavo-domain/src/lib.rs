//! # Domain Layer
//!
//! Core types and provider ports for the EAV option cache.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Options, identifiers and scopes |
//! | [`ports`] | Collaborator contracts (cache backend, batch loader, feature flag) |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Cache namespace, tags and sentinel values |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{AttributeId, AttributeOption, OptionId, OptionScope, RequestedIds, StoreId};
