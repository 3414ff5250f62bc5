//! Token endpoint exchanges
//!
//! The provider hands both grants to an [`OAuthEngine`]. [`HttpOAuthEngine`]
//! posts the standard OAuth2 form to the region's token URL.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::dtos::{ClientCredentialsOptions, TokenResponse};
use super::response::parse_json;
use super::token::{unix_now, AccessToken};
use crate::config::ProviderConfig;
use crate::endpoints::format_scopes;
use crate::errors::BattleNetError;
use crate::transport::{ApiRequest, Transport};

/// Performs the token exchanges for the OAuth2 grants
#[async_trait]
pub trait OAuthEngine: Send + Sync {
    /// Exchange the application's own credentials for a token
    async fn exchange_client_credentials(
        &self,
        options: &ClientCredentialsOptions,
    ) -> Result<AccessToken, BattleNetError>;

    /// Exchange an authorization code returned to the redirect URI
    async fn exchange_authorization_code(&self, code: &str) -> Result<AccessToken, BattleNetError>;
}

/// [`OAuthEngine`] that talks to the Battle.net token endpoint
pub struct HttpOAuthEngine {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    token_url: String,
    transport: Arc<dyn Transport>,
}

impl HttpOAuthEngine {
    pub fn new(config: &ProviderConfig, token_url: String, transport: Arc<dyn Transport>) -> Self {
        Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            token_url,
            transport,
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    async fn request_token(
        &self,
        grant_type: &str,
        params: Vec<(String, String)>,
    ) -> Result<AccessToken, BattleNetError> {
        let mut form = vec![
            ("grant_type".to_string(), grant_type.to_string()),
            ("client_id".to_string(), self.client_id.clone()),
            ("client_secret".to_string(), self.client_secret.clone()),
        ];
        form.extend(params);

        debug!("Requesting {} token from {}", grant_type, self.token_url);

        let response = self
            .transport
            .send(ApiRequest::post(&self.token_url).with_form(form))
            .await?;

        let body = parse_json(response)?;
        let token: TokenResponse =
            serde_json::from_value(body).map_err(|e| BattleNetError::InvalidResponse(e.to_string()))?;

        Ok(token.into_access_token(unix_now()))
    }
}

#[async_trait]
impl OAuthEngine for HttpOAuthEngine {
    async fn exchange_client_credentials(
        &self,
        options: &ClientCredentialsOptions,
    ) -> Result<AccessToken, BattleNetError> {
        let mut params = Vec::new();
        if !options.scopes.is_empty() {
            params.push(("scope".to_string(), format_scopes(&options.scopes)));
        }
        params.extend(options.extra.iter().cloned());

        self.request_token("client_credentials", params).await
    }

    async fn exchange_authorization_code(&self, code: &str) -> Result<AccessToken, BattleNetError> {
        let params = vec![
            ("code".to_string(), code.to_string()),
            ("redirect_uri".to_string(), self.redirect_uri.clone()),
        ];

        self.request_token("authorization_code", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use crate::region::Region;
    use crate::transport::ReqwestTransport;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn engine_for(server: &MockServer) -> HttpOAuthEngine {
        let config = ProviderConfig {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "https://example.com/callback".to_string(),
            region: Region::Us,
            cache: CacheConfig::default(),
        };
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new().unwrap());
        HttpOAuthEngine::new(&config, format!("{}/oauth/token", server.uri()), transport)
    }

    #[tokio::test]
    async fn test_client_credentials_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=client"))
            .and(body_string_contains("scope=wow.profile+openid"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"access_token":"cc-token","token_type":"bearer","expires_in":3600}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let before = unix_now();
        let token = engine_for(&server)
            .exchange_client_credentials(&ClientCredentialsOptions::with_scopes([
                "wow.profile",
                "openid",
            ]))
            .await
            .unwrap();

        assert_eq!(token.token, "cc-token");
        assert!(token.expires_at >= before + 3600);
        assert!(!token.has_expired());
    }

    #[tokio::test]
    async fn test_authorization_code_exchange_sends_redirect_uri() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=the-code"))
            .and(body_string_contains("redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"access_token":"user-token","expires_in":86399,"scope":"wow.profile"}"#,
            ))
            .mount(&server)
            .await;

        let token = engine_for(&server)
            .exchange_authorization_code("the-code")
            .await
            .unwrap();

        assert_eq!(token.token, "user-token");
        assert_eq!(token.scope.as_deref(), Some("wow.profile"));
    }

    #[tokio::test]
    async fn test_rejected_credentials_surface_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"error_description":"invalid_client"}"#),
            )
            .mount(&server)
            .await;

        let err = engine_for(&server)
            .exchange_client_credentials(&ClientCredentialsOptions::default())
            .await
            .unwrap_err();

        match err {
            BattleNetError::IdentityProvider(err) => {
                assert_eq!(err.status, 401);
                assert_eq!(err.description.as_deref(), Some("invalid_client"));
            }
            other => panic!("Expected identity provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_body_without_access_token_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"expires_in":3600}"#))
            .mount(&server)
            .await;

        let err = engine_for(&server)
            .exchange_client_credentials(&ClientCredentialsOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, BattleNetError::InvalidResponse(_)));
    }
}
