//! Battle.net OAuth2 client
//!
//! Provides the authorization-code and client-credentials grants against
//! Battle.net, resolves the regional authorization and game-data hosts, and
//! decodes the authenticated resource owner per game:
//! - **StarCraft II** (`sc2`): the resource owner is the first character on the account
//! - **World of Warcraft** (`wow`): the resource owner is the account itself
//!
//! # Example
//! ```ignore
//! use oauth2_battlenet::{cache, BattleNetConfig, BattleNetProvider, Warcraft};
//!
//! let config = BattleNetConfig::from_file("battlenet.hcl")?;
//! let store = cache::create_store(&config.cache).await?;
//! let provider = BattleNetProvider::from_config(&config, Warcraft, store)?;
//!
//! let token = provider.get_client_access_token(&Default::default()).await?;
//! let races = provider.race_index(&token).await?;
//! ```

pub mod auth;
pub mod cache;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod games;
pub mod owners;
pub mod provider;
pub mod region;
pub mod transport;

#[cfg(test)]
mod test_utils;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use auth::{AccessToken, ClientCredentialsOptions, HttpOAuthEngine, OAuthEngine};
pub use cache::{CacheStore, TokenStore};
pub use config::{BattleNetConfig, CacheConfig, ProviderConfig};
pub use endpoints::{EndpointBuilder, Namespace};
pub use errors::{BattleNetError, ConfigurationError, IdentityProviderError};
pub use games::{GameSpecialization, StarCraft, Warcraft};
pub use owners::{ResourceOwner, StarCraftUser, WarcraftUser};
pub use provider::BattleNetProvider;
pub use region::{Region, RegionEndpoints};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

/// Games exposed through the Battle.net OAuth2 API
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum Game {
    #[serde(rename = "sc2")]
    StarCraft,
    #[serde(rename = "wow")]
    Warcraft,
}

impl Game {
    /// All supported games
    pub const ALL: [Game; 2] = [Game::StarCraft, Game::Warcraft];

    /// The identifier Battle.net uses for scopes and cache namespacing
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::StarCraft => "sc2",
            Game::Warcraft => "wow",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sc2" => Ok(Game::StarCraft),
            "wow" => Ok(Game::Warcraft),
            _ => Err(ConfigurationError::InvalidGame {
                given: s.to_string(),
            }),
        }
    }
}
