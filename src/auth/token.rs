use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch
pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// A bearer token issued by Battle.net
///
/// Tokens are never mutated once issued; expiry is checked, not updated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    /// Unix timestamp (seconds) at which the token stops being valid
    pub expires_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            expires_at,
            token_type: None,
            scope: None,
        }
    }

    /// Create a token valid for `expires_in` seconds from now
    pub fn expiring_in(token: impl Into<String>, expires_in: i64) -> Self {
        Self::new(token, unix_now() + expires_in)
    }

    pub fn has_expired(&self) -> bool {
        self.has_expired_at(unix_now())
    }

    /// A token is expired from the second it reaches `expires_at`
    pub fn has_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, `None` once expired
    pub fn remaining_ttl(&self) -> Option<Duration> {
        self.remaining_ttl_at(unix_now())
    }

    pub fn remaining_ttl_at(&self, now: i64) -> Option<Duration> {
        let remaining = self.expires_at - now;
        (remaining > 0).then(|| Duration::from_secs(remaining as u64))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.token)
    }
}
