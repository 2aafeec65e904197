use std::{sync::Arc, time::Duration};

pub type DynKeyValueStore = Arc<dyn KeyValueStoreTrait + Send + Sync>;

/// Best-effort key-value backing for referral codes and cached config.
/// Implementations swallow backend failures: a broken store degrades to
/// cache misses, never to errors at the call site.
pub trait KeyValueStoreTrait {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>);
    fn delete(&self, key: &str);
}
