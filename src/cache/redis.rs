use super::{CacheError, TokenStore};
use crate::auth::AccessToken;
use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use std::time::Duration;
use tracing::error;

#[derive(Clone)]
pub struct RedisStore {
    conn_manager: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis and verify the connection with a PING
    pub async fn new(redis_url: &str) -> Result<Self, CacheError> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Config(format!("Invalid Redis URL: {}", e)))?;

        let conn_manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Redis(format!("Failed to create Redis connection manager: {}", e)))?;

        let mut conn = conn_manager.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| CacheError::Redis(format!("Failed to ping Redis: {}", e)))?;

        Ok(Self { conn_manager })
    }
}

#[async_trait]
impl TokenStore for RedisStore {
    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn_manager.clone();

        conn.exists::<_, bool>(key).await.map_err(|err| {
            error!("Redis error while checking key {}: {}", key, err);
            CacheError::Redis(err.to_string())
        })
    }

    async fn get(&self, key: &str) -> Result<Option<AccessToken>, CacheError> {
        let mut conn = self.conn_manager.clone();

        let result: Option<String> = match conn.get(key).await {
            Ok(value) => value,
            Err(err) => {
                if err.kind() == redis::ErrorKind::TypeError {
                    return Ok(None);
                }
                error!("Redis error while getting key {}: {}", key, err);
                return Err(CacheError::Redis(err.to_string()));
            }
        };

        match result {
            Some(value) => serde_json::from_str(&value)
                .map_err(|e| CacheError::Deserialization(e.to_string()))
                .map(Some),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, token: &AccessToken, ttl: Duration) -> Result<(), CacheError> {
        let serialized = serde_json::to_string(token)?;
        let mut conn = self.conn_manager.clone();

        // SETEX rejects a zero expiry
        let seconds = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, serialized, seconds)
            .await
            .map_err(|err| {
                error!("Redis error while setting key {}: {}", key, err);
                CacheError::Redis(err.to_string())
            })
    }

    async fn forget(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn_manager.clone();

        conn.del::<_, ()>(key).await.map_err(|err| {
            error!("Redis error while deleting key {}: {}", key, err);
            CacheError::Redis(err.to_string())
        })
    }
}
