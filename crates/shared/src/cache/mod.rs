mod memory;
mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::abstract_trait::DynKeyValueStore;

/// Typed JSON facade over the key-value backing. Serialization problems
/// degrade to cache misses, matching the best-effort contract of the
/// store itself.
#[derive(Clone)]
pub struct CacheStore {
    store: DynKeyValueStore,
}

impl CacheStore {
    pub fn new(store: DynKeyValueStore) -> Self {
        Self { store }
    }

    pub fn get_from_cache<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Discarding undecodable cache entry {key}: {err}");
                self.store.delete(key);
                None
            }
        }
    }

    pub fn set_to_cache<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set(key, &raw, Some(ttl)),
            Err(err) => warn!("Failed to serialize cache entry {key}: {err}"),
        }
    }

    pub fn delete_from_cache(&self, key: &str) {
        self.store.delete(key);
    }
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore").finish()
    }
}
