//! Error types for the Battle.net provider

mod configuration;
mod identity_provider;

pub use configuration::ConfigurationError;
pub use identity_provider::IdentityProviderError;

use crate::cache::CacheError;
use thiserror::Error;

/// Errors surfaced by the provider and its collaborators
#[derive(Debug, Error)]
pub enum BattleNetError {
    /// The provider was configured with an invalid game or region
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Battle.net answered with a non-200 status
    #[error(transparent)]
    IdentityProvider(#[from] IdentityProviderError),

    /// Network/HTTP request failed
    #[error("Network error: {0}")]
    Network(String),

    /// Resource owner response had no profile to decode
    #[error("Profile not found")]
    ProfileNotFound,

    /// Response from Battle.net was malformed or unexpected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A URL could not be built from the configured values
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Underlying HTTP client error
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Cache backend error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl BattleNetError {
    /// Upstream status code, when the error came from Battle.net itself
    pub fn status(&self) -> Option<u16> {
        match self {
            BattleNetError::IdentityProvider(err) => Some(err.status),
            _ => None,
        }
    }
}
