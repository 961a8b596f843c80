//! Dashboard configuration parsing
//!
//! Parses the TOML file listing the monitored services and the dashboard
//! policies (healthcheck interval, probe timeout, detail freshness).

use crate::error::HomelabError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default seconds between two health sweeps
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Default per-request probe timeout in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Default maximum age of a cached detail snapshot in seconds
pub const DEFAULT_DETAIL_FRESHNESS_SECS: u64 = 60;

/// Top-level dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Title shown above the service list
    #[serde(default = "default_title")]
    pub title: String,
    /// Seconds between health sweeps
    #[serde(rename = "interval", default = "default_interval")]
    pub interval_secs: u64,
    /// Seconds a detail snapshot is served from cache
    #[serde(rename = "detail_freshness", default = "default_detail_freshness")]
    pub detail_freshness_secs: u64,
    /// Per-request timeout in seconds
    #[serde(rename = "probe_timeout", default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    /// Monitored services, in display order
    #[serde(default)]
    pub applications: Vec<ServiceDescriptor>,
}

/// Which integration backs a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Plain reachability check, no detail view
    #[default]
    Generic,
    /// Pi-hole DNS sinkhole (summary counters)
    PiHole,
    /// Sonarr media manager (series list)
    Sonarr,
}

impl ServiceKind {
    /// Whether a detail fetcher exists for this kind
    pub fn supports_detail(&self) -> bool {
        !matches!(self, ServiceKind::Generic)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Generic => "Generic",
            ServiceKind::PiHole => "Pi-hole",
            ServiceKind::Sonarr => "Sonarr",
        }
    }
}

/// A single monitored service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    /// Unique display name, also the service identity
    pub name: String,
    /// Endpoint probed by the health sweep
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: ServiceKind,
    /// Header name sent with `auth_key` as its value
    #[serde(default)]
    pub auth_header: Option<String>,
    #[serde(default)]
    pub auth_key: Option<String>,
    #[serde(default)]
    pub basic_auth_username: Option<String>,
    #[serde(default)]
    pub basic_auth_password: Option<String>,
}

fn default_title() -> String {
    "homelab-pilot".to_string()
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_SECS
}

fn default_detail_freshness() -> u64 {
    DEFAULT_DETAIL_FRESHNESS_SECS
}

fn default_probe_timeout() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

impl DashboardConfig {
    /// Load configuration from the default location
    /// (~/.config/homelab-pilot/config.toml)
    pub fn load_default() -> Result<Self, HomelabError> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, HomelabError> {
        if !path.exists() {
            return Err(HomelabError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, HomelabError> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config path
    pub fn default_path() -> Result<PathBuf, HomelabError> {
        let home = dirs_next::home_dir().ok_or(HomelabError::NoHomeDirectory)?;
        Ok(home.join(".config").join("homelab-pilot").join("config.toml"))
    }

    /// Reject configurations the dashboard cannot run with
    pub fn validate(&self) -> Result<(), HomelabError> {
        if self.interval_secs == 0 {
            return Err(HomelabError::ConfigInvalid(
                "interval must be at least 1 second".to_string(),
            ));
        }
        if self.probe_timeout_secs == 0 {
            return Err(HomelabError::ConfigInvalid(
                "probe_timeout must be at least 1 second".to_string(),
            ));
        }
        if self.applications.is_empty() {
            return Err(HomelabError::ConfigInvalid(
                "no applications configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (index, service) in self.applications.iter().enumerate() {
            let name = service.name.trim();
            if name.is_empty() {
                return Err(HomelabError::ConfigInvalid(format!(
                    "application #{} has an empty name",
                    index + 1
                )));
            }
            if !seen.insert(name) {
                return Err(HomelabError::ConfigInvalid(format!(
                    "duplicate application name '{}'",
                    name
                )));
            }
            service.validate_url()?;
        }

        Ok(())
    }

    /// Healthcheck interval as a Duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Detail freshness window as a Duration
    pub fn detail_freshness(&self) -> Duration {
        Duration::from_secs(self.detail_freshness_secs)
    }

    /// Probe timeout as a Duration
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Names of all configured services, in order
    pub fn service_names(&self) -> Vec<&str> {
        self.applications.iter().map(|s| s.name.as_str()).collect()
    }
}

impl ServiceDescriptor {
    /// Create a generic descriptor with no auth
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: None,
            kind: ServiceKind::Generic,
            auth_header: None,
            auth_key: None,
            basic_auth_username: None,
            basic_auth_password: None,
        }
    }

    /// Set the integration kind
    pub fn with_kind(mut self, kind: ServiceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a header-based credential
    pub fn with_header_auth(mut self, header: impl Into<String>, key: impl Into<String>) -> Self {
        self.auth_header = Some(header.into());
        self.auth_key = Some(key.into());
        self
    }

    /// Set basic-auth credentials
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth_username = Some(username.into());
        self.basic_auth_password = Some(password.into());
        self
    }

    /// Header name and value, only when both are set and non-empty
    pub fn header_auth(&self) -> Option<(&str, &str)> {
        match (self.auth_header.as_deref(), self.auth_key.as_deref()) {
            (Some(header), Some(key)) if !header.is_empty() && !key.is_empty() => {
                Some((header, key))
            }
            _ => None,
        }
    }

    /// Basic-auth username and optional password
    pub fn basic_auth(&self) -> Option<(&str, Option<&str>)> {
        self.basic_auth_username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| (u, self.basic_auth_password.as_deref()))
    }

    /// Description, or an empty string
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    fn validate_url(&self) -> Result<(), HomelabError> {
        let url = reqwest::Url::parse(&self.url).map_err(|e| {
            HomelabError::ConfigInvalid(format!(
                "application '{}' has an invalid url '{}': {}",
                self.name, self.url, e
            ))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(HomelabError::ConfigInvalid(format!(
                "application '{}' uses unsupported scheme '{}'",
                self.name, other
            ))),
        }
    }
}
