//! Recording collaborators for resolver tests

#![allow(dead_code)]

use async_trait::async_trait;
use eavo_domain::error::{Error, Result};
use eavo_domain::ports::{BatchLoader, CacheBackend, CacheEntryConfig, CacheStats};
use eavo_domain::value_objects::{AttributeOption, OptionId, OptionScope};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// One recorded loader invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCall {
    pub scope: OptionScope,
    pub ids: Vec<String>,
    pub with_empty: bool,
}

/// Loader over a fixed catalog; answers in catalog order
#[derive(Debug, Default)]
pub struct RecordingLoader {
    catalog: Vec<AttributeOption>,
    calls: Mutex<Vec<LoadCall>>,
    fail: AtomicBool,
    delay: Option<Duration>,
}

impl RecordingLoader {
    pub fn with_catalog(pairs: &[(&str, &str)]) -> Self {
        Self {
            catalog: pairs
                .iter()
                .map(|(value, label)| AttributeOption::new(*value, *label))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<LoadCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BatchLoader for RecordingLoader {
    async fn load(
        &self,
        scope: &OptionScope,
        ids: &[OptionId],
        with_empty: bool,
    ) -> Result<Vec<AttributeOption>> {
        self.calls.lock().unwrap().push(LoadCall {
            scope: *scope,
            ids: ids.iter().map(ToString::to_string).collect(),
            with_empty,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::load("option table unavailable"));
        }

        let wanted: HashSet<&str> = ids.iter().map(OptionId::as_str).collect();
        Ok(self
            .catalog
            .iter()
            .filter(|option| wanted.contains(option.value.as_str()))
            .cloned()
            .collect())
    }
}

/// One recorded cache write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCall {
    pub key: String,
    pub tags: Vec<String>,
    pub ttl: Option<Duration>,
}

/// In-memory cache that records every call and can be told to fail
#[derive(Debug)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    loads: AtomicUsize,
    saves: Mutex<Vec<SaveCall>>,
    enabled: bool,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    read_delay: Option<Duration>,
}

impl Default for RecordingCache {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            loads: AtomicUsize::new(0),
            saves: Mutex::new(Vec::new()),
            enabled: true,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            read_delay: None,
        }
    }
}

impl RecordingCache {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = Some(delay);
        self
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn insert_raw(&self, key: &str, value: &[u8]) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> Vec<SaveCall> {
        self.saves.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheBackend for RecordingCache {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::cache("connection reset"));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn save(&self, value: &[u8], key: &str, config: CacheEntryConfig) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::cache("read-only replica"));
        }
        self.saves.lock().unwrap().push(SaveCall {
            key: key.to_string(),
            tags: config.tags,
            ttl: config.ttl,
        });
        self.insert_raw(key, value);
        Ok(())
    }

    async fn invalidate_tags(&self, _tags: &[String]) -> Result<usize> {
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats {
            entries: self.entries.lock().unwrap().len() as u64,
            ..CacheStats::default()
        })
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// The colour attribute used throughout the tests
pub fn colour_catalog() -> Vec<(&'static str, &'static str)> {
    vec![("10", "Red"), ("11", "Blue"), ("12", "Green")]
}
