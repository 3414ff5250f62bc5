//! Cache-first client-credentials tokens
//!
//! The token endpoint is rate limited, so client-credentials tokens are kept
//! in a [`TokenStore`] under `{game}{name}` and reused until they expire. The
//! store is best effort: when it is disabled, empty, stale or failing, the gate
//! falls through to a live exchange.

use std::sync::Arc;
use tracing::{debug, warn};

use super::dtos::ClientCredentialsOptions;
use super::engine::OAuthEngine;
use super::token::{unix_now, AccessToken};
use crate::cache::TokenStore;
use crate::config::CacheConfig;
use crate::errors::BattleNetError;
use crate::Game;

/// Wraps client-credentials exchanges with a cache lookup and refill
#[derive(Clone)]
pub struct TokenCacheGate {
    game: Game,
    config: CacheConfig,
    store: Arc<dyn TokenStore>,
}

impl TokenCacheGate {
    pub fn new(game: Game, config: CacheConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            game,
            config,
            store,
        }
    }

    /// Several games share one store, so the game prefixes the key
    pub fn cache_key(&self) -> String {
        format!("{}{}", self.game, self.config.name)
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Return a usable client-credentials token, fetching one only when needed
    ///
    /// Exchange errors propagate untouched and nothing is cached for them.
    pub async fn client_access_token(
        &self,
        engine: &dyn OAuthEngine,
        options: &ClientCredentialsOptions,
    ) -> Result<AccessToken, BattleNetError> {
        if !self.config.enabled {
            return engine.exchange_client_credentials(options).await;
        }

        let key = self.cache_key();

        if let Some(token) = self.cached_token(&key).await {
            return Ok(token);
        }

        let token = engine.exchange_client_credentials(options).await?;
        self.store_token(&key, &token).await;

        Ok(token)
    }

    async fn cached_token(&self, key: &str) -> Option<AccessToken> {
        match self.store.get(key).await {
            Ok(Some(token)) if !token.has_expired() => {
                debug!("Using cached client token {}", key);
                Some(token)
            }
            Ok(Some(_)) => {
                debug!("Cached client token {} has expired", key);
                None
            }
            Ok(None) => {
                debug!("No cached client token under {}", key);
                None
            }
            Err(error) => {
                warn!("Unable to read client token {} from cache: {}", key, error);
                None
            }
        }
    }

    async fn store_token(&self, key: &str, token: &AccessToken) {
        // TTL is taken at write time; a token with no time left is not written
        let Some(ttl) = token.remaining_ttl_at(unix_now()) else {
            debug!("Client token for {} expired before it could be cached", key);
            return;
        };

        match self.store.put(key, token, ttl).await {
            Ok(()) => debug!("Cached client token {} for {}s", key, ttl.as_secs()),
            Err(error) => warn!("Unable to cache client token {}: {}", key, error),
        }
    }
}
