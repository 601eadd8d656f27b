//! Inbound `/api/generate` body.

use axum::http::HeaderValue;
use mime_guess::mime::{self, Mime};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

pub const MISSING_API_KEY: &str = "API key is required";
pub const MISSING_PROMPT: &str = "Prompt is required";
pub const NOT_JSON_CONTENT_TYPE: &str =
    "Unsupported Media Type: request Content-Type was not 'application/json'";
pub const NOT_AN_OBJECT: &str = "request body must be a JSON object";

/// `application/json` or any `application/*+json`, parameters ignored.
pub fn is_json_content_type(value: Option<&HeaderValue>) -> bool {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Mime>().ok())
        .is_some_and(|m| {
            m.type_() == mime::APPLICATION
                && (m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        })
}

/// Body as sent by the browser. Both fields may be absent or null.
#[derive(Debug, Deserialize)]
pub struct GeneratePayload {
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub credential: String,
    pub prompt: String,
}

impl TryFrom<GeneratePayload> for GenerationRequest {
    type Error = ApiError;

    fn try_from(payload: GeneratePayload) -> Result<Self, Self::Error> {
        let credential = payload
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or(ApiError::Validation(MISSING_API_KEY))?;
        let prompt = payload
            .prompt
            .filter(|prompt| !prompt.is_empty())
            .ok_or(ApiError::Validation(MISSING_PROMPT))?;

        Ok(Self { credential, prompt })
    }
}

impl GenerationRequest {
    /// Parse and validate a raw request body.
    ///
    /// A body that is not a JSON object of strings is an unexpected failure,
    /// not a validation one.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ApiError::Unexpected(e.to_string()))?;
        // Serde would otherwise accept `["key", "prompt"]` as a struct.
        if !value.is_object() {
            return Err(ApiError::Unexpected(NOT_AN_OBJECT.to_string()));
        }
        let payload: GeneratePayload =
            serde_json::from_value(value).map_err(|e| ApiError::Unexpected(e.to_string()))?;
        Self::try_from(payload)
    }

    /// Like [`from_body`](Self::from_body), refusing bodies not declared as JSON.
    pub fn from_request(content_type: Option<&HeaderValue>, body: &[u8]) -> Result<Self, ApiError> {
        if !is_json_content_type(content_type) {
            return Err(ApiError::Unexpected(NOT_JSON_CONTENT_TYPE.to_string()));
        }
        Self::from_body(body)
    }
}
