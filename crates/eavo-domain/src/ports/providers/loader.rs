//! Batch Loader Port
//!
//! The expensive source of truth the resolver sits in front of.

use crate::error::Result;
use crate::value_objects::{AttributeOption, OptionId, OptionScope};
use async_trait::async_trait;

/// Loads full option records for a set of option IDs
///
/// Implementations return records in their own order; the resolver keeps
/// that order. IDs unknown to the store are simply absent from the result.
/// Failures surface as [`crate::Error::Load`] and reach the resolver's caller.
#[async_trait]
pub trait BatchLoader: Send + Sync + std::fmt::Debug {
    /// Load the options for `ids` in `scope`
    ///
    /// When `with_empty` is set the loader prepends its own empty option.
    /// The resolver always passes `false` and injects the empty option itself.
    async fn load(
        &self,
        scope: &OptionScope,
        ids: &[OptionId],
        with_empty: bool,
    ) -> Result<Vec<AttributeOption>>;
}
