//! Error type for the homelab SDK

use thiserror::Error;

/// Errors returned by configuration loading and service API calls
#[derive(Debug, Error)]
pub enum HomelabError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("{url} responded with status {code}")]
    Status { code: u16, url: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("service '{0}' has no detail view")]
    NoDetail(String),
}
