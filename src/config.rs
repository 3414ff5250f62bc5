//! Provider configuration
//!
//! [`BattleNetConfig`] is what sits in the HCL configuration file and the
//! environment. [`ProviderConfig`] is the validated value a provider is built
//! from.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::ConfigurationError;
use crate::region::Region;
use crate::Game;

const DEFAULT_CACHE_NAME: &str = "_battlenet_client_token";
const DEFAULT_MEMORY_CAPACITY: u64 = 64;

/// Backend used for cached client tokens
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    Redis,
    #[serde(other)]
    None,
}

/// Client-credentials token cache configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// `memory`, `redis` or `none`
    pub store: StoreKind,
    /// Key suffix; the full key is `{game}{name}`
    pub name: String,
    pub memory: MemoryStoreConfig,
    pub redis: RedisStoreConfig,
}

/// In-memory store options
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MemoryStoreConfig {
    /// Maximum number of tokens held
    pub capacity: u64,
}

/// Redis store options
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RedisStoreConfig {
    pub url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            store: StoreKind::Memory,
            name: String::from(DEFAULT_CACHE_NAME),
            memory: MemoryStoreConfig::default(),
            redis: RedisStoreConfig::default(),
        }
    }
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

/// Battle.net configuration as described in the HCL configuration file
///
/// `client_id`, `client_secret` and `redirect_uri` can be found at
/// https://develop.battle.net/access/clients.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BattleNetConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Where users are sent back to after signing in on Battle.net
    pub redirect_uri: String,
    pub region: String,
    pub cache: CacheConfig,
}

impl Default for BattleNetConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            region: Region::default().to_string(),
            cache: CacheConfig::default(),
        }
    }
}

impl fmt::Debug for BattleNetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleNetConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("region", &self.region)
            .field("cache", &self.cache)
            .finish()
    }
}

impl BattleNetConfig {
    /// Reads the HCL configuration file, then applies environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| anyhow!("Unable to read configuration file {}: {}", path.display(), e))?;

        Ok(Self::from_hcl(&source)?.with_env_overrides())
    }

    /// Parses HCL configuration without consulting the environment
    pub fn from_hcl(source: &str) -> Result<Self, anyhow::Error> {
        let hcl = hcl::from_str::<Value>(source)
            .map_err(|e| anyhow!("Unable to parse configuration: {}", e))?;

        serde_json::from_value(hcl).map_err(|e| anyhow!("Invalid configuration: {}", e))
    }

    /// `BNET_CLIENT_ID`, `BNET_CLIENT_SECRET`, `BNET_CLIENT_REDIRECT_URI` and
    /// `BNET_REGION` take precedence over the file
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(client_id) = lookup("BNET_CLIENT_ID") {
            self.client_id = client_id;
        }
        if let Some(client_secret) = lookup("BNET_CLIENT_SECRET") {
            self.client_secret = client_secret;
        }
        if let Some(redirect_uri) = lookup("BNET_CLIENT_REDIRECT_URI") {
            self.redirect_uri = redirect_uri;
        }
        if let Some(region) = lookup("BNET_REGION") {
            self.region = region;
        }
        self
    }
}

/// Validated, immutable provider settings
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub region: Region,
    pub cache: CacheConfig,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("region", &self.region)
            .field("cache", &self.cache)
            .finish()
    }
}

impl TryFrom<&BattleNetConfig> for ProviderConfig {
    type Error = ConfigurationError;

    fn try_from(config: &BattleNetConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            region: config.region.parse()?,
            cache: config.cache.clone(),
        })
    }
}

/// The `sea` region only serves StarCraft II
pub fn validate(game: Game, region: Region) -> Result<(), ConfigurationError> {
    if region == Region::Sea && game != Game::StarCraft {
        return Err(ConfigurationError::UnsupportedRegion { region, game });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_every_pair_except_non_sc2_sea_is_valid() {
        for game in Game::ALL {
            for region in Region::ALL {
                let result = validate(game, region);
                if region == Region::Sea && game != Game::StarCraft {
                    assert_eq!(
                        result,
                        Err(ConfigurationError::UnsupportedRegion { region, game })
                    );
                } else {
                    assert!(result.is_ok(), "{} / {} should be valid", game, region);
                }
            }
        }
    }

    #[test]
    fn test_unsupported_region_message() {
        let err = validate(Game::Warcraft, Region::Sea).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sea region is only available for sc2, given: wow"
        );
    }

    #[test]
    fn test_parse_hcl_configuration() {
        let config = BattleNetConfig::from_hcl(
            r#"
            client_id     = "my-client"
            client_secret = "my-secret"
            redirect_uri  = "https://example.com/callback"
            region        = "eu"

            cache {
              enabled = true
              store   = "redis"
              name    = "_token"

              redis {
                url = "redis://127.0.0.1:6379/0"
              }
            }
            "#,
        )
        .unwrap();

        assert_eq!(config.client_id, "my-client");
        assert_eq!(config.region, "eu");
        assert_eq!(config.cache.store, StoreKind::Redis);
        assert_eq!(config.cache.name, "_token");
        assert_eq!(config.cache.redis.url, "redis://127.0.0.1:6379/0");
        assert_eq!(config.cache.memory.capacity, DEFAULT_MEMORY_CAPACITY);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = BattleNetConfig::from_hcl(r#"client_id = "only-id""#).unwrap();

        assert_eq!(config.region, "us");
        assert!(config.cache.enabled);
        assert_eq!(config.cache.store, StoreKind::Memory);
        assert_eq!(config.cache.name, "_battlenet_client_token");
    }

    #[test]
    fn test_unknown_store_falls_back_to_none() {
        let config = BattleNetConfig::from_hcl(
            r#"
            cache {
              store = "file"
            }
            "#,
        )
        .unwrap();

        assert_eq!(config.cache.store, StoreKind::None);
    }

    #[test]
    fn test_environment_takes_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("BNET_CLIENT_ID", "env-id"),
            ("BNET_CLIENT_REDIRECT_URI", "https://env.example.com/cb"),
        ]);

        let config = BattleNetConfig {
            client_id: "file-id".to_string(),
            client_secret: "file-secret".to_string(),
            ..BattleNetConfig::default()
        }
        .with_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.client_id, "env-id");
        assert_eq!(config.client_secret, "file-secret");
        assert_eq!(config.redirect_uri, "https://env.example.com/cb");
    }

    #[test]
    fn test_provider_config_rejects_unknown_region() {
        let config = BattleNetConfig {
            region: "oce".to_string(),
            ..BattleNetConfig::default()
        };

        let err = ProviderConfig::try_from(&config).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidRegion { .. }));
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let config = BattleNetConfig {
            client_secret: "hunter2".to_string(),
            ..BattleNetConfig::default()
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
