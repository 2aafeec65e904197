use std::time::Duration;

use redis::{Client, Commands};
use tracing::warn;

use crate::{abstract_trait::KeyValueStoreTrait, utils::AppError};

/// Redis-backed store. Connection or command failures are logged and
/// reported as misses; the cabinet keeps serving without its cache.
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn new(url: &str) -> Result<Self, AppError> {
        let client = Client::open(url)
            .map_err(|err| AppError::InternalError(format!("Invalid Redis URL: {err}")))?;
        Ok(Self { client })
    }

    pub fn ping(&self) -> Result<(), AppError> {
        let mut conn = self
            .client
            .get_connection()
            .map_err(|err| AppError::InternalError(format!("Redis connection failed: {err}")))?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|err| AppError::InternalError(format!("Redis ping failed: {err}")))?;
        Ok(())
    }
}

impl KeyValueStoreTrait for RedisStore {
    fn get(&self, key: &str) -> Option<String> {
        let mut conn = match self.client.get_connection() {
            Ok(conn) => conn,
            Err(err) => {
                warn!("Redis connection failed on get {key}: {err}");
                return None;
            }
        };

        match conn.get::<_, Option<String>>(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("Redis GET {key} failed: {err}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        let mut conn = match self.client.get_connection() {
            Ok(conn) => conn,
            Err(err) => {
                warn!("Redis connection failed on set {key}: {err}");
                return;
            }
        };

        let result = match ttl {
            Some(ttl) => conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1)),
            None => conn.set::<_, _, ()>(key, value),
        };

        if let Err(err) = result {
            warn!("Redis SET {key} failed: {err}");
        }
    }

    fn delete(&self, key: &str) {
        let mut conn = match self.client.get_connection() {
            Ok(conn) => conn,
            Err(err) => {
                warn!("Redis connection failed on delete {key}: {err}");
                return;
            }
        };

        if let Err(err) = conn.del::<_, ()>(key) {
            warn!("Redis DEL {key} failed: {err}");
        }
    }
}
