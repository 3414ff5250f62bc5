//! OAuth2 grants against Battle.net
//!
//! - **Authorization code**: always a live exchange through the [`OAuthEngine`]
//! - **Client credentials**: goes through the [`TokenCacheGate`] so repeated
//!   calls reuse a cached token until it expires

mod cache_gate;
mod dtos;
mod engine;
mod response;
mod token;

pub use cache_gate::TokenCacheGate;
pub use dtos::ClientCredentialsOptions;
pub use engine::{HttpOAuthEngine, OAuthEngine};
pub use response::{check_response, parse_json, ResponseData};
pub use token::AccessToken;

pub(crate) use token::unix_now;
