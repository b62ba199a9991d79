//! Cache store seam for knowledge base content.
//!
//! The loader only needs get/put/remove; TTL is advisory to the store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::CacheError;

/// Key/value cache shared between loader instances.
pub trait CacheStore: Send + Sync {
    /// Fetch a live entry.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `content` under `key` for `ttl_secs` seconds.
    fn put(&self, key: &str, content: &str, ttl_secs: u64) -> Result<(), CacheError>;

    /// Remove a single entry.
    fn remove(&self, key: &str);

    /// Remove several entries in one operation.
    fn remove_all(&self, keys: &[&str]);
}

/// A stored value and its expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub content: String,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// In-process cache with TTL expiry and an optional per-value size limit.
///
/// Expired entries are dropped lazily on `get`.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    max_value_bytes: Option<usize>,
}

impl MemoryCache {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that rejects values larger than `max` bytes.
    pub fn with_max_value_bytes(max: usize) -> Self {
        Self {
            entries: RwLock::default(),
            max_value_bytes: Some(max),
        }
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().expect("Cache lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().expect("Cache lock poisoned")
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.write();
        let entry = entries.get(key)?;
        if !entry.is_expired() {
            return Some(entry.content.clone());
        }
        debug!(key, "Cache entry expired");
        entries.remove(key);
        None
    }

    fn put(&self, key: &str, content: &str, ttl_secs: u64) -> Result<(), CacheError> {
        if let Some(max) = self.max_value_bytes {
            if content.len() > max {
                return Err(CacheError::ValueTooLarge {
                    key: key.to_string(),
                    size: content.len(),
                    max,
                });
            }
        }

        let expires_at = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.write().insert(
            key.to_string(),
            CacheEntry {
                content: content.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.write().remove(key);
    }

    fn remove_all(&self, keys: &[&str]) {
        let mut entries = self.write();
        for key in keys {
            entries.remove(*key);
        }
    }
}
