//! World of Warcraft
//!
//! The resource owner is the Battle.net account behind the token, as reported
//! by the OAuth user-info endpoint.

use serde_json::Value;

use super::GameSpecialization;
use crate::endpoints::Namespace;
use crate::errors::BattleNetError;
use crate::owners::WarcraftUser;
use crate::provider::BattleNetProvider;
use crate::region::Region;
use crate::Game;

#[derive(Debug, Clone, Copy, Default)]
pub struct Warcraft;

impl GameSpecialization for Warcraft {
    type Owner = WarcraftUser;

    fn game(&self) -> Game {
        Game::Warcraft
    }

    fn decode_resource_owner(
        &self,
        response: Value,
        region: Region,
    ) -> Result<WarcraftUser, BattleNetError> {
        let mut user: WarcraftUser = serde_json::from_value(response)
            .map_err(|e| BattleNetError::InvalidResponse(e.to_string()))?;
        user.region = region;

        Ok(user)
    }
}

impl BattleNetProvider<Warcraft> {
    async fn namespaced(
        &self,
        token: impl AsRef<str>,
        path: &str,
        namespace: Namespace,
    ) -> Result<Value, BattleNetError> {
        let url = self.endpoints().namespaced_url(path, namespace);
        self.get_authenticated(&url, token).await
    }

    /// Characters on the account, from the legacy community API
    pub async fn characters(&self, token: impl AsRef<str>) -> Result<Value, BattleNetError> {
        let url = self.endpoints().game_data_url("/wow/user/characters");
        self.get_authenticated(&url, token).await
    }

    /// Account profile; needs a user token with `wow.profile`
    pub async fn account_profile(&self, token: impl AsRef<str>) -> Result<Value, BattleNetError> {
        self.namespaced(token, "/profile/user/wow", Namespace::Profile)
            .await
    }

    pub async fn character_profile(
        &self,
        token: impl AsRef<str>,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, BattleNetError> {
        let path = format!(
            "/profile/wow/character/{}/{}",
            realm_slug,
            character_name.to_lowercase()
        );
        self.namespaced(token, &path, Namespace::Profile).await
    }

    pub async fn race_index(&self, token: impl AsRef<str>) -> Result<Value, BattleNetError> {
        self.namespaced(token, "/data/wow/race/index", Namespace::Static)
            .await
    }

    pub async fn playable_class_index(
        &self,
        token: impl AsRef<str>,
    ) -> Result<Value, BattleNetError> {
        self.namespaced(token, "/data/wow/playable-class/index", Namespace::Static)
            .await
    }

    pub async fn item(&self, token: impl AsRef<str>, item_id: u64) -> Result<Value, BattleNetError> {
        let path = format!("/data/wow/item/{}", item_id);
        self.namespaced(token, &path, Namespace::Static).await
    }

    pub async fn realm_index(&self, token: impl AsRef<str>) -> Result<Value, BattleNetError> {
        self.namespaced(token, "/data/wow/realm/index", Namespace::Dynamic)
            .await
    }

    /// Current WoW Token price
    pub async fn token_index(&self, token: impl AsRef<str>) -> Result<Value, BattleNetError> {
        self.namespaced(token, "/data/wow/token/index", Namespace::Dynamic)
            .await
    }
}
