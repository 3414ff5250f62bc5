//! HTTP transport
//!
//! Every request the provider makes goes through a [`Transport`], so the
//! network can be swapped out in tests or routed through a caller's own client.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::errors::BattleNetError;

/// A request to a Battle.net endpoint
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// Form-encoded body; empty for GET requests
    pub form: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            form: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = form;
        self
    }
}

/// Status and raw body of a Battle.net response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues HTTP requests on behalf of the provider
///
/// Implementations return every response regardless of status; status
/// checking is done by the provider.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BattleNetError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, BattleNetError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| BattleNetError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Use an existing client (timeouts, proxies, TLS settings)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BattleNetError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/wow/race/index"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"races":[]}"#))
            .mount(&server)
            .await;

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Bearer abc".parse().unwrap());

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .send(
                ApiRequest::get(format!("{}/data/wow/race/index", server.uri()))
                    .with_headers(headers),
            )
            .await
            .unwrap();

        assert_eq!(response, ApiResponse::new(200, r#"{"races":[]}"#));
    }

    #[tokio::test]
    async fn test_error_statuses_are_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"unauthorized"}"#))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .send(
                ApiRequest::post(format!("{}/oauth/token", server.uri())).with_form(vec![(
                    "grant_type".to_string(),
                    "client_credentials".to_string(),
                )]),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert_eq!(response.body, r#"{"error":"unauthorized"}"#);
    }
}
