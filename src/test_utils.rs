//! Test doubles for the provider's collaborators

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::auth::{AccessToken, ClientCredentialsOptions, OAuthEngine};
use crate::errors::BattleNetError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Transport that records every request and replays queued responses
///
/// With nothing queued it answers `200 {}`.
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ApiResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push(&self, response: ApiResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BattleNetError> {
        self.requests.lock().unwrap().push(request);

        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ApiResponse::new(200, "{}")))
    }
}

/// Engine that issues hour-long tokens and counts each grant
pub struct StaticEngine {
    client_exchanges: AtomicUsize,
    code_exchanges: AtomicUsize,
}

impl StaticEngine {
    pub fn new() -> Self {
        Self {
            client_exchanges: AtomicUsize::new(0),
            code_exchanges: AtomicUsize::new(0),
        }
    }

    pub fn client_exchanges(&self) -> usize {
        self.client_exchanges.load(Ordering::SeqCst)
    }

    pub fn code_exchanges(&self) -> usize {
        self.code_exchanges.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OAuthEngine for StaticEngine {
    async fn exchange_client_credentials(
        &self,
        _options: &ClientCredentialsOptions,
    ) -> Result<AccessToken, BattleNetError> {
        let call = self.client_exchanges.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AccessToken::expiring_in(format!("client-{}", call), 3600))
    }

    async fn exchange_authorization_code(&self, code: &str) -> Result<AccessToken, BattleNetError> {
        self.code_exchanges.fetch_add(1, Ordering::SeqCst);
        Ok(AccessToken::expiring_in(format!("user-{}", code), 3600))
    }
}
