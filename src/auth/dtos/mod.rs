//! Data Transfer Objects for the Battle.net token endpoint

mod token_request;
mod token_response;

pub use token_request::ClientCredentialsOptions;

pub(super) use token_response::TokenResponse;
