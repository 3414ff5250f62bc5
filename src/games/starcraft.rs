//! StarCraft II
//!
//! The resource owner is the first character on the account, read from the
//! SC2 profile API rather than the OAuth user-info endpoint.

use serde::Deserialize;
use serde_json::Value;

use super::GameSpecialization;
use crate::endpoints::EndpointBuilder;
use crate::errors::BattleNetError;
use crate::owners::StarCraftUser;
use crate::provider::BattleNetProvider;
use crate::region::Region;
use crate::Game;

// ============================================================================
// Specialization
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct StarCraft;

impl GameSpecialization for StarCraft {
    type Owner = StarCraftUser;

    fn game(&self) -> Game {
        Game::StarCraft
    }

    fn resource_owner_url(&self, endpoints: &EndpointBuilder, token: &str) -> String {
        format!(
            "https://{}.api.battle.net/sc2/profile/user?access_token={}",
            endpoints.region(),
            token
        )
    }

    fn decode_resource_owner(
        &self,
        response: Value,
        region: Region,
    ) -> Result<StarCraftUser, BattleNetError> {
        let profile: ProfileUserResponse = serde_json::from_value(response)
            .map_err(|e| BattleNetError::InvalidResponse(e.to_string()))?;

        let mut user = profile
            .characters
            .into_iter()
            .next()
            .ok_or(BattleNetError::ProfileNotFound)?;
        user.region = region;

        Ok(user)
    }
}

/// Numeric region id used in SC2 API paths
///
/// `sea` shares the US id; `kr` and `tw` share one.
pub fn starcraft_region_id(region: Region) -> u8 {
    match region {
        Region::Us | Region::Sea => 1,
        Region::Eu => 2,
        Region::Kr | Region::Tw => 3,
        Region::Cn => 5,
    }
}

// ============================================================================
// Game data
// ============================================================================

impl BattleNetProvider<StarCraft> {
    fn sc2_url(&self, path: &str) -> String {
        self.endpoints().game_data_url(path)
    }

    fn region_id(&self) -> u8 {
        starcraft_region_id(self.region())
    }

    /// Static data (achievements, rewards) for the region
    pub async fn static_profile(&self, token: impl AsRef<str>) -> Result<Value, BattleNetError> {
        let url = self.sc2_url(&format!("/sc2/static/profile/{}", self.region_id()));
        self.get_authenticated(&url, token).await
    }

    pub async fn metadata_profile(
        &self,
        token: impl AsRef<str>,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, BattleNetError> {
        let url = self.sc2_url(&format!(
            "/sc2/metadata/profile/{}/{}/{}",
            self.region_id(),
            realm_id,
            profile_id
        ));
        self.get_authenticated(&url, token).await
    }

    pub async fn profile(
        &self,
        token: impl AsRef<str>,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, BattleNetError> {
        let url = self.sc2_url(&format!(
            "/sc2/profile/{}/{}/{}",
            self.region_id(),
            realm_id,
            profile_id
        ));
        self.get_authenticated(&url, token).await
    }

    pub async fn ladder_summary(
        &self,
        token: impl AsRef<str>,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, BattleNetError> {
        let url = self.sc2_url(&format!(
            "/sc2/profile/{}/{}/{}/ladder/summary",
            self.region_id(),
            realm_id,
            profile_id
        ));
        self.get_authenticated(&url, token).await
    }

    pub async fn grandmaster_leaderboard(
        &self,
        token: impl AsRef<str>,
    ) -> Result<Value, BattleNetError> {
        let url = self.sc2_url(&format!("/sc2/ladder/grandmaster/{}", self.region_id()));
        self.get_authenticated(&url, token).await
    }

    /// Current ladder season
    pub async fn season(&self, token: impl AsRef<str>) -> Result<Value, BattleNetError> {
        let url = self.sc2_url(&format!("/sc2/ladder/season/{}", self.region_id()));
        self.get_authenticated(&url, token).await
    }

    pub async fn league_data(
        &self,
        token: impl AsRef<str>,
        season_id: u32,
        queue_id: u32,
        team_type: u32,
        league_id: u32,
    ) -> Result<Value, BattleNetError> {
        let url = self.sc2_url(&format!(
            "/data/sc2/league/{}/{}/{}/{}",
            season_id, queue_id, team_type, league_id
        ));
        self.get_authenticated(&url, token).await
    }
}

// ============================================================================
// Private Types
// ============================================================================

#[derive(Deserialize)]
struct ProfileUserResponse {
    #[serde(default)]
    characters: Vec<StarCraftUser>,
}
