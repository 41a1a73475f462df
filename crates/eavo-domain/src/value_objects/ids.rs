//! Identifiers and scopes

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of an option within one (store, attribute) scope
///
/// Backing stores hand out integer IDs, callers sometimes pass strings;
/// both normalize to the string form used in cache keys and memo lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    /// Create an option ID from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The string form of this ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the reserved empty-string ID
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for OptionId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for OptionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for OptionId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Attribute identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(pub u32);

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AttributeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Store identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub u32);

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StoreId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The (store, attribute) pair partitioning all option data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionScope {
    /// Store the labels belong to
    pub store_id: StoreId,
    /// Attribute the options belong to
    pub attribute_id: AttributeId,
}

impl OptionScope {
    /// Create a scope from store and attribute identifiers
    pub fn new(store_id: impl Into<StoreId>, attribute_id: impl Into<AttributeId>) -> Self {
        Self {
            store_id: store_id.into(),
            attribute_id: attribute_id.into(),
        }
    }
}

impl fmt::Display for OptionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store={} attribute={}", self.store_id, self.attribute_id)
    }
}

/// Option IDs requested by a caller: one ID or an ordered sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedIds {
    /// A single option ID
    Single(OptionId),
    /// An ordered sequence of option IDs
    Many(Vec<OptionId>),
}

impl RequestedIds {
    /// Normalize into an ordered sequence
    pub fn into_vec(self) -> Vec<OptionId> {
        match self {
            Self::Single(id) => vec![id],
            Self::Many(ids) => ids,
        }
    }

    /// Number of requested IDs, duplicates included
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(ids) => ids.len(),
        }
    }

    /// Whether no ID was requested
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<OptionId> for RequestedIds {
    fn from(id: OptionId) -> Self {
        Self::Single(id)
    }
}

impl From<&str> for RequestedIds {
    fn from(id: &str) -> Self {
        Self::Single(id.into())
    }
}

impl From<u32> for RequestedIds {
    fn from(id: u32) -> Self {
        Self::Single(id.into())
    }
}

impl<T: Into<OptionId>> From<Vec<T>> for RequestedIds {
    fn from(ids: Vec<T>) -> Self {
        Self::Many(ids.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<OptionId> + Clone> From<&[T]> for RequestedIds {
    fn from(ids: &[T]) -> Self {
        Self::Many(ids.iter().cloned().map(Into::into).collect())
    }
}
