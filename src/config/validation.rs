//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All problems are
//! collected so a bad file can be fixed in one pass.

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("upstream.url `{0}` is not a valid http(s) URL")]
    UpstreamUrl(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("assets.index_file `{0}` must be a relative path")]
    IndexFile(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let upstream = &config.upstream;
    match Url::parse(&upstream.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::UpstreamUrl(upstream.url.clone())),
    }
    if upstream.model.trim().is_empty() {
        errors.push(ValidationError::Empty("upstream.model"));
    }
    if upstream.api_version.trim().is_empty() {
        errors.push(ValidationError::Empty("upstream.api_version"));
    }
    if upstream.max_tokens == 0 {
        errors.push(ValidationError::Zero("upstream.max_tokens"));
    }
    if upstream.timeout_secs == 0 {
        errors.push(ValidationError::Zero("upstream.timeout_secs"));
    }

    let assets = &config.assets;
    if assets.root_dir.is_empty() {
        errors.push(ValidationError::Empty("assets.root_dir"));
    }
    if assets.index_file.is_empty() {
        errors.push(ValidationError::Empty("assets.index_file"));
    } else if Path::new(&assets.index_file).is_absolute() {
        errors.push(ValidationError::IndexFile(assets.index_file.clone()));
    }
    if assets.api_prefix.is_empty() {
        errors.push(ValidationError::Empty("assets.api_prefix"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero("security.max_body_size"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
