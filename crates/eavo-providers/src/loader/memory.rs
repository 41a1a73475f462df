//! In-memory option source
//!
//! Holds option tables per scope and answers batch loads from them. Serves
//! embedded deployments and tests; production hosts plug their own store
//! behind [`BatchLoader`].

use async_trait::async_trait;
use dashmap::DashMap;
use eavo_domain::error::Result;
use eavo_domain::ports::BatchLoader;
use eavo_domain::value_objects::{AttributeOption, OptionId, OptionScope};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Option tables keyed by scope
#[derive(Debug, Default)]
pub struct InMemoryOptionSource {
    tables: DashMap<OptionScope, Vec<AttributeOption>>,
    loads: AtomicU64,
}

impl InMemoryOptionSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::insert_options`]
    pub fn with_options(self, scope: OptionScope, options: Vec<AttributeOption>) -> Self {
        self.insert_options(scope, options);
        self
    }

    /// Replace the option table of `scope`
    ///
    /// Table order is the order loads answer in.
    pub fn insert_options(&self, scope: OptionScope, options: Vec<AttributeOption>) {
        self.tables.insert(scope, options);
    }

    /// Number of loads served so far
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BatchLoader for InMemoryOptionSource {
    async fn load(
        &self,
        scope: &OptionScope,
        ids: &[OptionId],
        with_empty: bool,
    ) -> Result<Vec<AttributeOption>> {
        self.loads.fetch_add(1, Ordering::Relaxed);

        let wanted: HashSet<&str> = ids.iter().map(OptionId::as_str).collect();
        let mut options: Vec<AttributeOption> = self
            .tables
            .get(scope)
            .map(|table| {
                table
                    .iter()
                    .filter(|option| wanted.contains(option.value.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if with_empty {
            options.insert(0, AttributeOption::empty());
        }
        Ok(options)
    }
}
