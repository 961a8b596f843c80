//! Policy constants for the monitoring engine

use homelab_rs::config::{DEFAULT_DETAIL_FRESHNESS_SECS, DEFAULT_INTERVAL_SECS};
use std::time::Duration;

/// Delay before the very first sweep after startup
pub const INITIAL_SWEEP_DELAY: Duration = Duration::from_millis(10);

/// Default time between two sweeps
pub const HEALTHCHECK_INTERVAL: Duration = Duration::from_secs(DEFAULT_INTERVAL_SECS);

/// Default maximum age of a cached detail snapshot
pub const DETAIL_FRESHNESS: Duration = Duration::from_secs(DEFAULT_DETAIL_FRESHNESS_SECS);

// =============================================================================
// Status line
// =============================================================================

/// Status line before the first sweep completes
pub const STATUS_LOADING: &str = "loading...";

/// Status line when every service answered 200
pub const STATUS_ALL_HEALTHY: &str = "All healthy";

/// Status line naming the first unhealthy service
pub fn status_unhealthy(name: &str) -> String {
    format!("{} might be having issues...", name)
}

/// Prefix of the message shown when a detail fetch fails
pub const DETAIL_LOAD_FAILED: &str = "could not load detail";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_values() {
        assert!(INITIAL_SWEEP_DELAY < Duration::from_secs(1));
        assert_eq!(HEALTHCHECK_INTERVAL, Duration::from_secs(30));
        assert_eq!(DETAIL_FRESHNESS, Duration::from_secs(60));
    }

    #[test]
    fn test_status_unhealthy() {
        assert_eq!(status_unhealthy("Sonarr"), "Sonarr might be having issues...");
    }
}
