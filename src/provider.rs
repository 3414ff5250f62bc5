//! Provider core
//!
//! A single [`BattleNetProvider`] serves every game; what differs per game is
//! injected as a [`GameSpecialization`].

use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::header::HeaderMap;
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;

use crate::auth::{
    self, AccessToken, ClientCredentialsOptions, HttpOAuthEngine, OAuthEngine, ResponseData,
    TokenCacheGate,
};
use crate::cache::TokenStore;
use crate::config::{self, BattleNetConfig, ProviderConfig};
use crate::endpoints::{format_scopes, EndpointBuilder, SCOPE_SEPARATOR};
use crate::errors::{BattleNetError, ConfigurationError, IdentityProviderError};
use crate::games::GameSpecialization;
use crate::region::Region;
use crate::transport::{ApiRequest, ReqwestTransport, Transport};
use crate::Game;

const STATE_LENGTH: usize = 32;

/// Battle.net OAuth2 provider for one game and region
pub struct BattleNetProvider<G: GameSpecialization> {
    config: ProviderConfig,
    game: G,
    endpoints: EndpointBuilder,
    transport: Arc<dyn Transport>,
    engine: Arc<dyn OAuthEngine>,
    token_gate: TokenCacheGate,
}

impl<G: GameSpecialization> BattleNetProvider<G> {
    /// Create a provider that talks to Battle.net over reqwest
    pub fn new(
        config: ProviderConfig,
        game: G,
        store: impl TokenStore + 'static,
    ) -> Result<Self, BattleNetError> {
        config::validate(game.game(), config.region)?;

        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new()?);
        let token_url = EndpointBuilder::new(game.game(), config.region).token_url();
        let engine: Arc<dyn OAuthEngine> =
            Arc::new(HttpOAuthEngine::new(&config, token_url, transport.clone()));

        Ok(Self::with_collaborators(
            config,
            game,
            Arc::new(store),
            transport,
            engine,
        )?)
    }

    /// Create a provider from file/environment configuration
    pub fn from_config(
        config: &BattleNetConfig,
        game: G,
        store: impl TokenStore + 'static,
    ) -> Result<Self, BattleNetError> {
        let config = ProviderConfig::try_from(config)?;
        Self::new(config, game, store)
    }

    /// Create a provider with explicit collaborators
    pub fn with_collaborators(
        config: ProviderConfig,
        game: G,
        store: Arc<dyn TokenStore>,
        transport: Arc<dyn Transport>,
        engine: Arc<dyn OAuthEngine>,
    ) -> Result<Self, ConfigurationError> {
        config::validate(game.game(), config.region)?;

        let endpoints = EndpointBuilder::new(game.game(), config.region);
        let token_gate = TokenCacheGate::new(game.game(), config.cache.clone(), store);

        Ok(Self {
            config,
            game,
            endpoints,
            transport,
            engine,
            token_gate,
        })
    }

    pub fn game(&self) -> Game {
        self.game.game()
    }

    pub fn region(&self) -> Region {
        self.config.region
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &EndpointBuilder {
        &self.endpoints
    }

    /// Base URL for authenticating with the API in this region
    pub fn base_url(&self) -> &str {
        self.endpoints.base_url()
    }

    pub fn base_authorization_url(&self) -> String {
        self.endpoints.authorization_url()
    }

    pub fn base_access_token_url(&self) -> String {
        self.endpoints.token_url()
    }

    /// URL of the token owner's details
    pub fn resource_owner_details_url(&self, token: impl AsRef<str>) -> String {
        self.game.resource_owner_url(&self.endpoints, token.as_ref())
    }

    /// `wow.profile` or `sc2.profile`
    pub fn default_scopes(&self) -> Vec<String> {
        self.endpoints.default_scopes()
    }

    pub fn scope_separator(&self) -> &'static str {
        SCOPE_SEPARATOR
    }

    /// Full authorize URL to send the user to
    ///
    /// An empty `scopes` slice requests the default scopes.
    pub fn authorization_url(&self, state: &str, scopes: &[String]) -> Result<Url, BattleNetError> {
        let scope = if scopes.is_empty() {
            format_scopes(&self.default_scopes())
        } else {
            format_scopes(scopes)
        };

        Url::parse_with_params(
            &self.base_authorization_url(),
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| BattleNetError::InvalidUrl(e.to_string()))
    }

    /// Random value for the `state` parameter of the authorize URL
    pub fn generate_state(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(STATE_LENGTH)
            .map(char::from)
            .collect()
    }

    /// `Authorization: Bearer {token}` for a raw token string or an [`AccessToken`]
    pub fn authorization_headers(&self, token: impl AsRef<str>) -> Result<HeaderMap, BattleNetError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            format!("Bearer {}", token.as_ref())
                .parse()
                .map_err(|_| BattleNetError::InvalidResponse("Invalid access token".to_string()))?,
        );
        Ok(headers)
    }

    /// Fail with the upstream error details on any status other than 200
    pub fn check_response(
        &self,
        status: u16,
        data: impl Into<ResponseData>,
    ) -> Result<(), IdentityProviderError> {
        auth::check_response(status, data)
    }

    /// Exchange an authorization code; never cached
    pub async fn get_access_token(&self, code: &str) -> Result<AccessToken, BattleNetError> {
        self.engine.exchange_authorization_code(code).await
    }

    /// Client-credentials token, served from cache while it is still valid
    pub async fn get_client_access_token(
        &self,
        options: &ClientCredentialsOptions,
    ) -> Result<AccessToken, BattleNetError> {
        self.token_gate
            .client_access_token(self.engine.as_ref(), options)
            .await
    }

    /// Fetch and decode the owner of `token`
    pub async fn get_resource_owner(&self, token: &AccessToken) -> Result<G::Owner, BattleNetError> {
        let url = self.resource_owner_details_url(token);
        let body = self.get_authenticated(&url, token).await?;

        self.game.decode_resource_owner(body, self.config.region)
    }

    /// Authenticated GET returning the decoded JSON body
    pub async fn get_authenticated(
        &self,
        url: &str,
        token: impl AsRef<str>,
    ) -> Result<Value, BattleNetError> {
        let request = ApiRequest::get(url).with_headers(self.authorization_headers(token)?);
        let response = self.transport.send(request).await?;

        auth::parse_json(response)
    }
}
