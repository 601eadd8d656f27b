//! Outbound client for the Messages API.

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::upstream::types::{parse_error_body, MessagesRequest};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_VERSION_HEADER: &str = "anthropic-version";

/// Every way a single upstream call can fail.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status.
    #[error("{kind}: {message}")]
    Rejected {
        status: StatusCode,
        kind: String,
        message: String,
        raw: String,
    },

    /// Connect failure, timeout, or broken body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Upstream answered 2xx with a body that is not JSON.
    #[error("upstream returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The credential cannot be sent as a header value.
    #[error("API key is not a valid header value")]
    InvalidCredential(#[source] InvalidHeaderValue),

    /// The configured protocol version cannot be sent as a header value.
    #[error("upstream.api_version is not a valid header value")]
    InvalidVersion(#[source] InvalidHeaderValue),
}

/// Pooled client bound to one upstream configuration.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    api_version: HeaderValue,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build the client; the timeout bounds the whole call.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let api_version =
            HeaderValue::from_str(&config.api_version).map_err(UpstreamError::InvalidVersion)?;

        Ok(Self {
            http,
            api_version,
            config,
        })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Send `prompt` as a single user message, authenticated with `credential`.
    ///
    /// On success the upstream body is returned untouched once it is known
    /// to be JSON.
    pub async fn complete(&self, credential: &str, prompt: &str) -> Result<Bytes, UpstreamError> {
        let mut headers = HeaderMap::new();
        let mut key =
            HeaderValue::from_str(credential).map_err(UpstreamError::InvalidCredential)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(API_VERSION_HEADER, self.api_version.clone());

        let payload =
            MessagesRequest::single_turn(&self.config.model, self.config.max_tokens, prompt);

        tracing::debug!(
            url = %self.config.url,
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Calling upstream"
        );

        let response = self
            .http
            .post(&self.config.url)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let (kind, message) = parse_error_body(&body);
            return Err(UpstreamError::Rejected {
                status,
                kind,
                message,
                raw: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        Ok(body)
    }
}
