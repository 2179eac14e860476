//! Opportunistic byte cache with expiry
//!
//! Boundary contract only: store bytes under a key with an expiry
//! instant, read them back while unexpired. Expired and absent entries
//! are identical misses. No locking beyond the map's own mutex; the
//! system runs single-consumer per session.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Opaque expiring byte store.
pub trait Cache: Send + Sync {
    /// Unexpired bytes for `key`, or `None` on miss.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store bytes under `key` until `expires_at`.
    fn put(&self, key: &str, bytes: Vec<u8>, expires_at: DateTime<Utc>);
}

/// In-memory cache implementation.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (Vec<u8>, DateTime<Utc>)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.lock().unwrap();
        let (bytes, expires_at) = entries.get(key)?;
        if Utc::now() < *expires_at {
            Some(bytes.clone())
        } else {
            None
        }
    }

    fn put(&self, key: &str, bytes: Vec<u8>, expires_at: DateTime<Utc>) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (bytes, expires_at));
    }
}

/// Cache that never hits and never stores; used when caching is off.
pub struct NoopCache;

impl Cache for NoopCache {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn put(&self, _key: &str, _bytes: Vec<u8>, _expires_at: DateTime<Utc>) {}
}

/// Expiry instant `hours` from now.
pub fn expiry_in_hours(hours: u64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours as i64)
}
