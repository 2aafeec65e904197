use anyhow::Result;
use shared::{
    abstract_trait::{DynJwtService, DynKeyValueStore},
    cache::{MemoryStore, RedisStore},
    config::{Config, JwtConfig},
    utils::DependenciesInject,
};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;

        let store = Self::open_store(&config.redis_url);
        let di_container = DependenciesInject::new(config, store);

        Ok(Self {
            di_container,
            jwt_config,
        })
    }

    /// Redis when reachable, in-process otherwise. Losing the shared
    /// store degrades referral attribution and caching, not the app.
    fn open_store(redis_url: &str) -> DynKeyValueStore {
        match RedisStore::new(redis_url) {
            Ok(store) => {
                if let Err(err) = store.ping() {
                    warn!("Redis unavailable, using in-memory store: {err}");
                    return Arc::new(MemoryStore::new());
                }
                Arc::new(store)
            }
            Err(err) => {
                warn!("Invalid Redis configuration, using in-memory store: {err}");
                Arc::new(MemoryStore::new())
            }
        }
    }
}
