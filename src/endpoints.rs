//! Endpoint construction
//!
//! Composes a region's hosts with the game identifier and a resource path into
//! absolute URLs for the OAuth and game-data APIs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::region::{Region, RegionEndpoints};
use crate::Game;

/// Battle.net separates scopes with a single space, not a comma
pub const SCOPE_SEPARATOR: &str = " ";

/// Dataset a namespaced game-data call reads from
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// Data that only changes with game patches
    Static,
    /// Data that changes while the game is live (realms, auctions, tokens)
    Dynamic,
    /// Player-owned data
    Profile,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Static => "static",
            Namespace::Dynamic => "dynamic",
            Namespace::Profile => "profile",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds URLs for a fixed game and region
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndpointBuilder {
    game: Game,
    region: Region,
    endpoints: RegionEndpoints,
}

impl EndpointBuilder {
    pub fn new(game: Game, region: Region) -> Self {
        Self {
            game,
            region,
            endpoints: region.endpoints(),
        }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn endpoints(&self) -> &RegionEndpoints {
        &self.endpoints
    }

    /// Host serving the OAuth endpoints
    pub fn base_url(&self) -> &str {
        &self.endpoints.auth_base_url
    }

    /// Host serving the game-data APIs
    pub fn game_data_base_url(&self) -> &str {
        &self.endpoints.game_data_base_url
    }

    pub fn authorization_url(&self) -> String {
        format!("{}/oauth/authorize", self.base_url())
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.base_url())
    }

    pub fn resource_owner_url(&self, token: &str) -> String {
        format!("{}/oauth/userinfo?access_token={}", self.base_url(), token)
    }

    /// URL for a legacy, un-namespaced game-data endpoint
    pub fn game_data_url(&self, path: &str) -> String {
        format!("{}{}", self.game_data_base_url(), path)
    }

    /// URL for a namespaced game-data endpoint, e.g. `?namespace=static-eu`
    pub fn namespaced_url(&self, path: &str, namespace: Namespace) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}namespace={}-{}",
            self.game_data_base_url(),
            path,
            separator,
            namespace,
            self.region
        )
    }

    /// `{game}.profile`
    pub fn default_scopes(&self) -> Vec<String> {
        vec![format!("{}.profile", self.game)]
    }
}

/// Join scopes with the Battle.net separator
pub fn format_scopes<S: AsRef<str>>(scopes: &[S]) -> String {
    scopes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SCOPE_SEPARATOR)
}
