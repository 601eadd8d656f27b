//! Wire types for the Messages API.

use serde::{Deserialize, Serialize};

const UNKNOWN_ERROR_TYPE: &str = "unknown";
const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Outbound request body.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<Message<'a>>,
}

impl<'a> MessagesRequest<'a> {
    /// A one-turn conversation carrying only the user's prompt.
    pub fn single_turn(model: &'a str, max_tokens: u32, prompt: &'a str) -> Self {
        Self {
            model,
            max_tokens,
            messages: vec![Message {
                role: Role::User,
                content: prompt,
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message<'a> {
    pub role: Role,
    pub content: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// `{"error": {"type": ..., "message": ...}}` as returned with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: Option<String>,
}

/// Extract `(type, message)` from an upstream error body.
///
/// Anything missing or unparsable falls back to `"unknown"` and
/// `"API request failed"`.
pub fn parse_error_body(raw: &[u8]) -> (String, String) {
    let (kind, message) = parse_error_detail(raw);
    (
        kind.unwrap_or_else(|| UNKNOWN_ERROR_TYPE.to_string()),
        message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
    )
}

/// `(type, message)` exactly as present in an upstream error body.
pub fn parse_error_detail(raw: &[u8]) -> (Option<String>, Option<String>) {
    let detail = serde_json::from_slice::<ErrorEnvelope>(raw)
        .ok()
        .and_then(|envelope| envelope.error)
        .unwrap_or_default();
    (detail.kind, detail.message)
}
