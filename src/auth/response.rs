//! Response validation shared by every Battle.net call

use serde_json::Value;
use tracing::debug;

use crate::errors::{BattleNetError, IdentityProviderError};
use crate::transport::ApiResponse;

/// Response body as handed to [`check_response`]
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// Body text that has not been decoded yet
    Raw(String),
    /// Body already decoded as JSON
    Parsed(Value),
}

impl From<&str> for ResponseData {
    fn from(raw: &str) -> Self {
        ResponseData::Raw(raw.to_string())
    }
}

impl From<String> for ResponseData {
    fn from(raw: String) -> Self {
        ResponseData::Raw(raw)
    }
}

impl From<Value> for ResponseData {
    fn from(value: Value) -> Self {
        ResponseData::Parsed(value)
    }
}

/// Fail on any status other than 200
///
/// Raw bodies are decoded as JSON unless empty; a body that is not JSON is kept
/// as a string. A missing `error_description` yields `None`.
pub fn check_response(
    status: u16,
    data: impl Into<ResponseData>,
) -> Result<(), IdentityProviderError> {
    if status == 200 {
        return Ok(());
    }

    let body = match data.into() {
        ResponseData::Parsed(value) => value,
        ResponseData::Raw(raw) if raw.trim().is_empty() => Value::Null,
        ResponseData::Raw(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(_) => Value::String(raw),
        },
    };

    let description = body
        .get("error_description")
        .and_then(Value::as_str)
        .map(str::to_string);

    debug!("Battle.net responded with {}", status);

    Err(IdentityProviderError::new(status, description, body))
}

/// Validate a transport response and decode its JSON body
pub fn parse_json(response: ApiResponse) -> Result<Value, BattleNetError> {
    check_response(response.status, response.body.as_str())?;

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&response.body).map_err(|e| BattleNetError::InvalidResponse(e.to_string()))
}
