use std::collections::HashMap;

use tracing::debug;

use crate::dashboard::domain::{CacheKey, CollectionData};

#[derive(Debug, Clone)]
struct CacheEntry {
    data: CollectionData,
    stale: bool,
}

/// Last fetched data per collection plus a stale flag.
///
/// Mutations never touch cached data; they only mark the slot stale so the
/// next read goes back to the backend.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached data for `key`, unless missing or stale.
    pub fn fresh(&self, key: CacheKey) -> Option<&CollectionData> {
        self.entries
            .get(&key)
            .filter(|entry| !entry.stale)
            .map(|entry| &entry.data)
    }

    /// Cached data for `key` regardless of staleness.
    pub fn peek(&self, key: CacheKey) -> Option<&CollectionData> {
        self.entries.get(&key).map(|entry| &entry.data)
    }

    /// Stores a fetch result under the key it belongs to.
    pub fn put(&mut self, data: CollectionData) {
        self.entries
            .insert(data.key(), CacheEntry { data, stale: false });
    }

    pub fn invalidate(&mut self, key: CacheKey) {
        if let Some(entry) = self.entries.get_mut(&key) {
            debug!(key = %key, "Cache entry invalidated");
            entry.stale = true;
        }
    }

    /// Missing entries count as stale.
    pub fn is_stale(&self, key: CacheKey) -> bool {
        self.entries.get(&key).map_or(true, |entry| entry.stale)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
