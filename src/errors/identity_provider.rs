//! Errors returned by Battle.net endpoints

use serde_json::Value;

/// A non-200 response from any Battle.net endpoint
///
/// Carries the upstream `error_description` (when there is one), the status
/// code, and the response body for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("identity provider returned {status}: {}", .description.as_deref().unwrap_or("no description"))]
pub struct IdentityProviderError {
    pub status: u16,
    pub description: Option<String>,
    pub body: Value,
}

impl IdentityProviderError {
    pub fn new(status: u16, description: Option<String>, body: Value) -> Self {
        Self {
            status,
            description,
            body,
        }
    }
}
