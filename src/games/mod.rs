//! Per-game specializations
//!
//! The provider is generic over a [`GameSpecialization`], which decides where
//! the resource owner lives and how its response is decoded. Game-data calls
//! are added as inherent methods on `BattleNetProvider<StarCraft>` and
//! `BattleNetProvider<Warcraft>`.

pub mod starcraft;
pub mod warcraft;

pub use starcraft::{starcraft_region_id, StarCraft};
pub use warcraft::Warcraft;

use serde_json::Value;

use crate::endpoints::EndpointBuilder;
use crate::errors::BattleNetError;
use crate::owners::ResourceOwner;
use crate::region::Region;
use crate::Game;

/// What differs between games on top of the shared provider core
pub trait GameSpecialization: Send + Sync {
    type Owner: ResourceOwner;

    fn game(&self) -> Game;

    /// Where the owner of `token` is looked up; the OAuth user-info URL unless overridden
    fn resource_owner_url(&self, endpoints: &EndpointBuilder, token: &str) -> String {
        endpoints.resource_owner_url(token)
    }

    /// Build the owner from a successful resource-owner response
    fn decode_resource_owner(
        &self,
        response: Value,
        region: Region,
    ) -> Result<Self::Owner, BattleNetError>;
}
