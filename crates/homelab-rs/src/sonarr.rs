//! Sonarr series API

use crate::client::{HomelabClient, with_basic_auth};
use crate::config::ServiceDescriptor;
use crate::error::HomelabError;
use reqwest::header::ACCEPT;
use serde::Deserialize;

/// Header Sonarr expects its API key in
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// A series tracked by Sonarr (subset of the v3 resource)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResource {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ended: bool,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub monitored: bool,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub statistics: Option<SeriesStatistics>,
}

/// Episode and disk statistics for a series
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStatistics {
    #[serde(default)]
    pub episode_file_count: i64,
    #[serde(default)]
    pub episode_count: i64,
    #[serde(default)]
    pub total_episode_count: i64,
    #[serde(default)]
    pub size_on_disk: i64,
    #[serde(default)]
    pub percent_of_episodes: f64,
}

impl SeriesResource {
    /// Downloaded/aired episodes as "X/Y"
    pub fn episodes_display(&self) -> String {
        match &self.statistics {
            Some(stats) => format!("{}/{}", stats.episode_file_count, stats.episode_count),
            None => "-".to_string(),
        }
    }

    /// Bytes on disk (0 when unknown)
    pub fn size_on_disk(&self) -> u64 {
        self.statistics
            .as_ref()
            .map(|s| s.size_on_disk.max(0) as u64)
            .unwrap_or(0)
    }
}

/// Build the series URL from a configured service URL
pub fn series_url(service_url: &str) -> String {
    format!(
        "{}/api/v3/series?includeSeasonImages=false",
        service_url.trim_end_matches('/')
    )
}

impl HomelabClient {
    /// Fetch every series known to Sonarr
    pub async fn sonarr_series(
        &self,
        service: &ServiceDescriptor,
    ) -> Result<Vec<SeriesResource>, HomelabError> {
        let url = series_url(&service.url);
        let mut request = self.get(&url).header(ACCEPT, "application/json");
        if let Some(key) = service.auth_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.header(API_KEY_HEADER, key);
        }
        let request = with_basic_auth(request, service);

        let series: Vec<SeriesResource> = self.get_json(request, &url).await?;
        tracing::debug!("Sonarr {} returned {} series", service.name, series.len());
        Ok(series)
    }
}
