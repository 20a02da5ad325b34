//! Minute-granularity expiring cache.
//!
//! An entry stays readable up to and including its expiry instant. Reading an
//! expired entry evicts it.

use parking_lot::Mutex;
use showcase_shared::Clock;
use std::collections::HashMap;

const MS_PER_MINUTE: u64 = 60_000;

#[derive(Debug)]
struct Entry<V> {
    value: V,
    expires_at_ms: u64,
}

/// Keyed cache with a per-entry lifetime.
#[derive(Debug)]
pub struct TtlCache<V, C> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    clock: C,
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Returns the value under `key` if present and not expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if now <= entry.expires_at_ms => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                tracing::trace!("Cache entry {key} expired");
                None
            }
            None => None,
        }
    }

    /// Stores `value` under `key` for `ttl_minutes`, replacing any entry.
    pub fn set(&self, key: impl Into<String>, value: V, ttl_minutes: u32) {
        let expires_at_ms = self
            .clock
            .now_ms()
            .saturating_add(u64::from(ttl_minutes) * MS_PER_MINUTE);
        self.entries.lock().insert(
            key.into(),
            Entry {
                value,
                expires_at_ms,
            },
        );
    }

    /// Drops `key`.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.entries.lock().remove(key).map(|entry| entry.value)
    }

    /// Drops every expired entry. Returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| now <= entry.expires_at_ms);
        before - entries.len()
    }

    /// Number of stored entries, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops everything.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
