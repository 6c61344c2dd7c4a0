//! Per-fingerprint single-flight gate.
//!
//! When coalescing is enabled, concurrent calls for the same fingerprint run
//! one at a time. The first caller does the network work and populates the
//! cache; the others then resolve from the cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Default)]
pub(crate) struct InflightGate {
    slots: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

pub(crate) struct InflightGuard<'a> {
    gate: &'a InflightGate,
    key: String,
    _permit: OwnedMutexGuard<()>,
}

impl InflightGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, Arc<AsyncMutex<()>>>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub async fn acquire(&self, key: &str) -> InflightGuard<'_> {
        let slot = self
            .slots()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone();
        let permit = slot.lock_owned().await;
        InflightGuard {
            gate: self,
            key: key.to_string(),
            _permit: permit,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots().len()
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        let mut slots = self.gate.slots();
        // One reference in the map, one held by our permit; anything more is a waiter.
        if let Some(slot) = slots.get(&self.key) {
            if Arc::strong_count(slot) <= 2 {
                slots.remove(&self.key);
            }
        }
    }
}
