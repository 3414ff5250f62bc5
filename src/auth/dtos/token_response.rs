//! Token response from the Battle.net OAuth API

use serde::Deserialize;

use crate::auth::AccessToken;

/// Successful token response
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Anchor `expires_in` to `now`; a missing lifetime yields a token that is
    /// already expired and will never be cached
    pub fn into_access_token(self, now: i64) -> AccessToken {
        AccessToken {
            token: self.access_token,
            expires_at: now + self.expires_in.unwrap_or(0),
            token_type: self.token_type,
            scope: self.scope,
        }
    }
}
