//! Token cache stores
//!
//! The client-credentials gate keeps tokens in a store shared between
//! providers (and possibly processes). The backend is picked by name from the
//! configuration; every backend speaks [`TokenStore`].

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::auth::AccessToken;
use crate::config::{CacheConfig, StoreKind};

pub mod memory;
pub mod null;
pub mod redis;

pub use memory::InMemoryStore;
pub use null::NullStore;
pub use redis::RedisStore;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to serialize value: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to parse value: {0}")]
    Deserialization(String),
    #[error("Redis error: {0}")]
    Redis(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Key-value store for access tokens with per-entry TTL
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Whether a live entry exists under `key`
    async fn has(&self, key: &str) -> Result<bool, CacheError>;

    /// Load the token stored under `key`
    async fn get(&self, key: &str) -> Result<Option<AccessToken>, CacheError>;

    /// Store `token` under `key` for `ttl`
    async fn put(&self, key: &str, token: &AccessToken, ttl: Duration) -> Result<(), CacheError>;

    /// Remove the entry under `key`
    async fn forget(&self, key: &str) -> Result<(), CacheError>;
}

/// Store selected at runtime from [`CacheConfig::store`]
#[derive(Clone)]
pub enum CacheStore {
    /// In-process store backed by moka
    Memory(InMemoryStore),
    /// Shared store backed by Redis
    Redis(RedisStore),
    /// Stores nothing
    Null(NullStore),
}

#[async_trait]
impl TokenStore for CacheStore {
    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        match self {
            Self::Memory(store) => store.has(key).await,
            Self::Redis(store) => store.has(key).await,
            Self::Null(store) => store.has(key).await,
        }
    }

    async fn get(&self, key: &str) -> Result<Option<AccessToken>, CacheError> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::Redis(store) => store.get(key).await,
            Self::Null(store) => store.get(key).await,
        }
    }

    async fn put(&self, key: &str, token: &AccessToken, ttl: Duration) -> Result<(), CacheError> {
        match self {
            Self::Memory(store) => store.put(key, token, ttl).await,
            Self::Redis(store) => store.put(key, token, ttl).await,
            Self::Null(store) => store.put(key, token, ttl).await,
        }
    }

    async fn forget(&self, key: &str) -> Result<(), CacheError> {
        match self {
            Self::Memory(store) => store.forget(key).await,
            Self::Redis(store) => store.forget(key).await,
            Self::Null(store) => store.forget(key).await,
        }
    }
}

/// Create the store named by the cache configuration
///
/// A disabled cache always yields the null store.
pub async fn create_store(config: &CacheConfig) -> Result<CacheStore, CacheError> {
    if !config.enabled {
        return Ok(CacheStore::Null(NullStore));
    }

    match config.store {
        StoreKind::Memory => Ok(CacheStore::Memory(InMemoryStore::new(
            config.memory.capacity,
        ))),
        StoreKind::Redis => {
            if config.redis.url.is_empty() {
                return Err(CacheError::Config(
                    "redis store selected but cache.redis.url is empty".to_string(),
                ));
            }
            let store = RedisStore::new(&config.redis.url).await?;
            Ok(CacheStore::Redis(store))
        }
        StoreKind::None => Ok(CacheStore::Null(NullStore)),
    }
}
