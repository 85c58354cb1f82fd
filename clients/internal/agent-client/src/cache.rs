// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Thread-safe cache of decoded `GET` response bodies.
//!
//! Entries are keyed by the fully resolved request URL and stay valid until
//! their age exceeds the TTL. An entry exactly TTL old is still served.
//! Invalidation is explicit: writes through the client never evict
//! anything, callers use [`ResponseCache::clear`].
//!
//! Time comes from a [`Clock`] so tests can move it by hand.

use indexmap::IndexMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::response::ResponseBody;

/// Default freshness window for cached responses (5 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Source of the current time for cache expiry.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.origin + *offset
    }
}

struct CacheEntry {
    body: ResponseBody,
    captured_at: Instant,
}

/// URL-keyed cache of response bodies with a fixed TTL.
///
/// Cloning yields a handle to the same underlying entries.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<Mutex<IndexMap<String, CacheEntry>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}

impl ResponseCache {
    /// Create a cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(IndexMap::new())),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn entries(&self) -> MutexGuard<'_, IndexMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::error!("Response cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Look up a fresh entry, dropping it if it has expired.
    pub fn get(&self, key: &str) -> Option<ResponseBody> {
        let now = self.clock.now();
        let mut entries = self.entries();

        let expired = match entries.get(key) {
            None => return None,
            Some(entry) => now.saturating_duration_since(entry.captured_at) > self.ttl,
        };

        if expired {
            entries.shift_remove(key);
            return None;
        }

        entries.get(key).map(|entry| entry.body.clone())
    }

    /// Store a body, replacing any previous entry for the key.
    pub fn insert(&self, key: impl Into<String>, body: ResponseBody) {
        let captured_at = self.clock.now();
        self.entries()
            .insert(key.into(), CacheEntry { body, captured_at });
    }

    /// Remove every entry, or only those whose key contains `pattern`.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&self, pattern: Option<&str>) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        match pattern {
            Some(pattern) => entries.retain(|key, _| !key.contains(pattern)),
            None => entries.clear(),
        }
        before - entries.len()
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cache_with_clock(ttl: Duration) -> (ResponseCache, ManualClock) {
        let clock = ManualClock::new();
        let cache = ResponseCache::with_clock(ttl, Arc::new(clock.clone()));
        (cache, clock)
    }

    #[test]
    fn test_store_and_retrieve() {
        let (cache, _clock) = cache_with_clock(DEFAULT_CACHE_TTL);
        let body = ResponseBody::Json(json!({"agents": []}));

        cache.insert("http://api/agent/", body.clone());

        assert_eq!(cache.get("http://api/agent/"), Some(body));
        assert_eq!(cache.get("http://api/other"), None);
    }

    #[test]
    fn test_entry_fresh_until_ttl_exceeded() {
        let ttl = Duration::from_secs(300);
        let (cache, clock) = cache_with_clock(ttl);
        cache.insert("k", ResponseBody::Text("v".to_string()));

        clock.advance(ttl - Duration::from_millis(1));
        assert!(cache.get("k").is_some());

        clock.advance(Duration::from_millis(1));
        assert!(cache.get("k").is_some(), "entry exactly TTL old is still fresh");

        clock.advance(Duration::from_millis(1));
        assert!(cache.get("k").is_none());
        assert!(cache.is_empty(), "expired entry is dropped on lookup");
    }

    #[test]
    fn test_reinsert_refreshes_timestamp() {
        let ttl = Duration::from_secs(10);
        let (cache, clock) = cache_with_clock(ttl);
        cache.insert("k", ResponseBody::Text("old".to_string()));

        clock.advance(Duration::from_secs(8));
        cache.insert("k", ResponseBody::Text("new".to_string()));
        clock.advance(Duration::from_secs(8));

        assert_eq!(cache.get("k"), Some(ResponseBody::Text("new".to_string())));
    }

    #[test]
    fn test_clear_with_pattern() {
        let (cache, _clock) = cache_with_clock(DEFAULT_CACHE_TTL);
        cache.insert("http://api/agent/1", ResponseBody::Text("a".to_string()));
        cache.insert("http://api/agent/2", ResponseBody::Text("b".to_string()));
        cache.insert("http://api/tickets/1", ResponseBody::Text("c".to_string()));

        assert_eq!(cache.clear(Some("/agent/")), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("http://api/tickets/1").is_some());

        assert_eq!(cache.clear(None), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let (cache, _clock) = cache_with_clock(DEFAULT_CACHE_TTL);
        let other = cache.clone();
        cache.insert("k", ResponseBody::Text("v".to_string()));
        assert!(other.get("k").is_some());
    }
}
