//! Error formatting utilities
//!
//! Turns SDK errors into short, actionable text for the detail pane and the
//! log file.

use homelab_rs::HomelabError;

/// Format a HomelabError into a user-friendly message
///
/// # Examples
///
/// ```
/// use homelab_pilot_core::errors::format_client_error;
/// use homelab_rs::HomelabError;
///
/// let error = HomelabError::Status { code: 401, url: "http://sonarr".into() };
/// assert!(format_client_error(&error).contains("API key"));
/// ```
pub fn format_client_error(error: &HomelabError) -> String {
    match error {
        HomelabError::Http(e) => {
            if e.is_timeout() {
                "Connection timed out".to_string()
            } else if e.is_builder() {
                "Invalid request - check the URL and auth header".to_string()
            } else {
                format_connection_error(&e.to_string())
            }
        }
        HomelabError::Timeout(secs) => format_timeout_error(*secs),
        HomelabError::Status { code, .. } => format_status_error(*code),
        HomelabError::Decode(_) => {
            "Unexpected response format - check the API token".to_string()
        }
        HomelabError::NoDetail(name) => format!("{} has no detail view", name),
        HomelabError::ConfigNotFound(path) => format!("Config not found: {}", path),
        HomelabError::ConfigInvalid(msg) => format!("Invalid config: {}", msg),
        _ => error.to_string(),
    }
}

/// Format a connection error message
fn format_connection_error(msg: &str) -> String {
    let lower = msg.to_lowercase();
    if lower.contains("certificate") || lower.contains("tls") || lower.contains("ssl") {
        "TLS/certificate error - check the service URL scheme".to_string()
    } else if lower.contains("refused") {
        "Connection refused - is the service running?".to_string()
    } else if lower.contains("dns") || lower.contains("resolve") {
        "DNS resolution failed - check the service hostname".to_string()
    } else if lower.contains("reset") {
        "Connection reset by peer".to_string()
    } else {
        format!("Connection failed: {}", msg)
    }
}

/// Format a non-200 HTTP status
fn format_status_error(code: u16) -> String {
    match code {
        401 | 403 => format!("Authentication failed (HTTP {}) - check the API key", code),
        404 => "Endpoint not found (HTTP 404) - check the service URL".to_string(),
        500..=599 => format!("Service error (HTTP {})", code),
        _ => format!("Unexpected HTTP status {}", code),
    }
}

/// Format a request timeout
pub fn format_timeout_error(timeout_secs: u64) -> String {
    format!("Request timed out after {}s", timeout_secs)
}
