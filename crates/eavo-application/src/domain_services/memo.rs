//! Option Memo
//!
//! Process-local table of options already resolved, partitioned by
//! [`OptionScope`]. Entries are only ever added; an entry present for a
//! scope and ID is authoritative and is never fetched again.
//!
//! Each scope lives in its own `DashMap` slot, so resolutions for different
//! scopes do not contend on the same lock.

use dashmap::DashMap;
use eavo_domain::value_objects::{AttributeOption, OptionId, OptionScope};
use std::collections::HashMap;

/// Append-only memo of resolved options
#[derive(Debug, Default)]
pub struct OptionMemo {
    scopes: DashMap<OptionScope, HashMap<OptionId, AttributeOption>>,
}

impl OptionMemo {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a resolved option
    pub fn get(&self, scope: &OptionScope, id: &str) -> Option<AttributeOption> {
        self.scopes
            .get(scope)
            .and_then(|options| options.get(id).cloned())
    }

    /// Record a resolved option. Last write wins.
    pub fn put(&self, scope: OptionScope, id: OptionId, option: AttributeOption) {
        self.scopes.entry(scope).or_default().insert(id, option);
    }

    /// Whether an option is memoized
    pub fn contains(&self, scope: &OptionScope, id: &str) -> bool {
        self.scopes
            .get(scope)
            .is_some_and(|options| options.contains_key(id))
    }

    /// Split `ids` into memoized options and IDs still to load
    ///
    /// Both halves keep the order of `ids`. A repeated ID shows up once per
    /// occurrence in whichever half it falls into.
    pub fn partition(
        &self,
        scope: &OptionScope,
        ids: &[OptionId],
    ) -> (Vec<AttributeOption>, Vec<OptionId>) {
        let Some(options) = self.scopes.get(scope) else {
            return (Vec::new(), ids.to_vec());
        };

        let mut hits = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();
        for id in ids {
            match options.get(id.as_str()) {
                Some(option) => hits.push(option.clone()),
                None => missing.push(id.clone()),
            }
        }
        (hits, missing)
    }

    /// Number of options memoized for one scope
    pub fn scope_len(&self, scope: &OptionScope) -> usize {
        self.scopes.get(scope).map_or(0, |options| options.len())
    }

    /// Number of options memoized across all scopes
    pub fn len(&self) -> usize {
        self.scopes.iter().map(|entry| entry.value().len()).sum()
    }

    /// Whether nothing has been memoized yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
