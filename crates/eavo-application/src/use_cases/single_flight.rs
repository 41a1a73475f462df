//! Per-key async locks collapsing concurrent identical loads
//!
//! Callers racing on the same cache key queue behind one lock. The first
//! holder loads and fills the memo; the ones behind it re-check the memo
//! once they get the lock and find nothing left to load.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of in-flight loads keyed by cache key
#[derive(Debug, Default)]
pub struct SingleFlight {
    flights: DashMap<String, Arc<Mutex<()>>>,
}

impl SingleFlight {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other caller holds `key`, then hold it
    pub async fn acquire(&self, key: &str) -> FlightGuard<'_> {
        let lock = self
            .flights
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let guard = lock.lock_owned().await;
        FlightGuard {
            owner: self,
            key: key.to_string(),
            guard: Some(guard),
        }
    }

    /// Number of keys with a holder or waiters
    pub fn in_flight(&self) -> usize {
        self.flights.len()
    }
}

/// Held while a caller owns a key; releases and cleans up on drop
#[derive(Debug)]
pub struct FlightGuard<'a> {
    owner: &'a SingleFlight,
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Only the map still references the lock once nobody waits on it
        self.owner
            .flights
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}
