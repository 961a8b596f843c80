//! Pi-hole summary API

use crate::client::{HomelabClient, with_basic_auth};
use crate::config::ServiceDescriptor;
use crate::error::HomelabError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Pi-hole 24h summary counters
///
/// Depending on the Pi-hole version the API returns these as formatted
/// strings ("1,234") or as raw numbers, so every field is kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PiHoleSummary {
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
    #[serde(rename = "dns_queries_today", default, deserialize_with = "flexible_string")]
    pub dns_queries: String,
    #[serde(rename = "ads_blocked_today", default, deserialize_with = "flexible_string")]
    pub ads_blocked: String,
    #[serde(rename = "ads_percentage_today", default, deserialize_with = "flexible_string")]
    pub ads_percentage: String,
    #[serde(rename = "domains_being_blocked", default, deserialize_with = "flexible_string")]
    pub domains_blocked: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub unique_domains: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub queries_cached: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub queries_forwarded: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub clients_ever_seen: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub unique_clients: String,
}

impl PiHoleSummary {
    /// Metric/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Status", self.status.clone()),
            ("Total Queries", self.dns_queries.clone()),
            ("Queries Blocked", self.ads_blocked.clone()),
            ("Percentage Blocked", format!("{}%", self.ads_percentage)),
            ("Domains on Adlist", self.domains_blocked.clone()),
            ("Unique Domains", self.unique_domains.clone()),
            ("Queries Cached", self.queries_cached.clone()),
            ("Clients", self.clients_ever_seen.clone()),
        ]
    }
}

fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Build the summary URL from a configured service URL
///
/// Accepts either the admin page (`http://pi.hole/admin/`) or the bare
/// host (`http://pi.hole`). The auth token is attached as a query pair
/// by [`HomelabClient::pihole_summary`].
pub fn summary_url(service_url: &str) -> String {
    let base = service_url.trim_end_matches('/');
    let base = base.strip_suffix("/admin").unwrap_or(base);
    format!("{}/admin/api.php?summary", base)
}

/// Decode a summary body
///
/// Pi-hole answers a missing or rejected token with `[]`, which serde would
/// otherwise accept as an all-default struct.
pub fn decode_summary(body: Value) -> Result<PiHoleSummary, HomelabError> {
    if !body.is_object() {
        return Err(HomelabError::Decode(serde_json::Error::custom(
            "expected a summary object, is the API token valid?",
        )));
    }
    Ok(PiHoleSummary::deserialize(body)?)
}

impl HomelabClient {
    /// Fetch the Pi-hole summary counters
    pub async fn pihole_summary(
        &self,
        service: &ServiceDescriptor,
    ) -> Result<PiHoleSummary, HomelabError> {
        let url = summary_url(&service.url);
        let mut request = with_basic_auth(self.get(&url), service);
        if let Some(token) = service.auth_key.as_deref().filter(|t| !t.is_empty()) {
            request = request.query(&[("auth", token)]);
        }
        let body: Value = self.get_json(request, &url).await?;
        decode_summary(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceKind;
    use httpmock::{Method::GET, MockServer};
    use std::time::Duration;

    #[test]
    fn test_summary_url() {
        assert_eq!(
            summary_url("http://pi.hole/admin/"),
            "http://pi.hole/admin/api.php?summary"
        );
        assert_eq!(
            summary_url("http://10.0.0.2/"),
            "http://10.0.0.2/admin/api.php?summary"
        );
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(matches!(
            decode_summary(serde_json::json!([])),
            Err(HomelabError::Decode(_))
        ));
        assert!(matches!(
            decode_summary(serde_json::json!("denied")),
            Err(HomelabError::Decode(_))
        ));
        let summary = decode_summary(serde_json::json!({"status": "enabled"})).unwrap();
        assert_eq!(summary.status, "enabled");
    }

    #[test]
    fn test_decode_numbers_and_strings() {
        let raw = r#"{"dns_queries_today": 1234, "ads_blocked_today": "56",
                      "ads_percentage_today": 4.5, "status": "enabled"}"#;
        let summary: PiHoleSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.dns_queries, "1234");
        assert_eq!(summary.ads_blocked, "56");
        assert_eq!(summary.ads_percentage, "4.5");
        assert_eq!(summary.unique_domains, "");

        let rows = summary.rows();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[3], ("Percentage Blocked", "4.5%".to_string()));
    }

    #[tokio::test]
    async fn fetches_summary_with_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/api.php")
                .query_param("auth", "tok");
            then.status(200).json_body(serde_json::json!({
                "status": "enabled",
                "dns_queries_today": "10,000",
                "ads_blocked_today": "1,000",
                "ads_percentage_today": "10.0",
                "clients_ever_seen": "7"
            }));
        });

        let client = HomelabClient::new(Duration::from_secs(2)).unwrap();
        let service = ServiceDescriptor {
            auth_key: Some("tok".to_string()),
            ..ServiceDescriptor::new("Pi-hole", server.url("/admin/")).with_kind(ServiceKind::PiHole)
        };

        let summary = client.pihole_summary(&service).await.unwrap();
        mock.assert();
        assert_eq!(summary.status, "enabled");
        assert_eq!(summary.dns_queries, "10,000");
        assert_eq!(summary.clients_ever_seen, "7");
    }

    #[tokio::test]
    async fn rejected_token_is_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/admin/api.php");
            then.status(200).body("[]");
        });

        let client = HomelabClient::new(Duration::from_secs(2)).unwrap();
        let service =
            ServiceDescriptor::new("Pi-hole", server.base_url()).with_kind(ServiceKind::PiHole);

        let err = client.pihole_summary(&service).await.unwrap_err();
        assert!(matches!(err, HomelabError::Decode(_)));
    }

    #[tokio::test]
    async fn token_is_query_encoded() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/api.php")
                .query_param("auth", "a&b#c+d");
            then.status(200).json_body(serde_json::json!({"status": "enabled"}));
        });

        let client = HomelabClient::new(Duration::from_secs(2)).unwrap();
        let service = ServiceDescriptor {
            auth_key: Some("a&b#c+d".to_string()),
            ..ServiceDescriptor::new("Pi-hole", server.base_url()).with_kind(ServiceKind::PiHole)
        };

        let summary = client.pihole_summary(&service).await.unwrap();
        mock.assert();
        assert_eq!(summary.status, "enabled");
    }
}
