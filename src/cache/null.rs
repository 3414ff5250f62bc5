use super::{CacheError, TokenStore};
use crate::auth::AccessToken;
use async_trait::async_trait;
use std::time::Duration;

/// Store that never holds anything; every lookup misses
#[derive(Clone, Debug, Default)]
pub struct NullStore;

#[async_trait]
impl TokenStore for NullStore {
    async fn has(&self, _key: &str) -> Result<bool, CacheError> {
        Ok(false)
    }

    async fn get(&self, _key: &str) -> Result<Option<AccessToken>, CacheError> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _token: &AccessToken, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    async fn forget(&self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }
}
