use super::{CacheError, TokenStore};
use crate::auth::AccessToken;
use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use moka::Expiry;
use std::time::{Duration, Instant};

#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expires each entry after the TTL it was written with
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

#[derive(Clone)]
pub struct InMemoryStore {
    cache: MokaCache<String, Entry>,
}

impl InMemoryStore {
    /// Initialize a new in-memory store holding at most `capacity` tokens
    pub fn new(capacity: u64) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache }
    }
}

#[async_trait]
impl TokenStore for InMemoryStore {
    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.cache.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Option<AccessToken>, CacheError> {
        if let Some(entry) = self.cache.get(key).await {
            serde_json::from_str(&entry.value)
                .map_err(|e| CacheError::Deserialization(e.to_string()))
                .map(Some)
        } else {
            Ok(None)
        }
    }

    async fn put(&self, key: &str, token: &AccessToken, ttl: Duration) -> Result<(), CacheError> {
        let value = serde_json::to_string(token)?;
        self.cache.insert(key.to_string(), Entry { value, ttl }).await;
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), CacheError> {
        self.cache.remove(key).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_operations() {
        let store = InMemoryStore::new(16);
        let token = AccessToken::new("abc", 4_102_444_800);

        assert!(!store.has("sc2_token").await.unwrap());

        store
            .put("sc2_token", &token, Duration::from_secs(60))
            .await
            .unwrap();
        assert!(store.has("sc2_token").await.unwrap());
        assert_eq!(store.get("sc2_token").await.unwrap(), Some(token));

        store.forget("sc2_token").await.unwrap();
        assert!(store.get("sc2_token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entries_expire_after_their_own_ttl() {
        let store = InMemoryStore::new(16);
        let token = AccessToken::new("abc", 4_102_444_800);

        store
            .put("short", &token, Duration::from_millis(50))
            .await
            .unwrap();
        store
            .put("long", &token, Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(store.get("short").await.unwrap().is_none());
        assert!(store.get("long").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_keys_are_isolated_per_game() {
        let store = InMemoryStore::new(16);

        store
            .put("sc2_token", &AccessToken::new("a", 4_102_444_800), Duration::from_secs(60))
            .await
            .unwrap();
        store
            .put("wow_token", &AccessToken::new("b", 4_102_444_800), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(store.get("sc2_token").await.unwrap().unwrap().token, "a");
        assert_eq!(store.get("wow_token").await.unwrap().unwrap().token, "b");
    }
}
