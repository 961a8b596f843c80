//! Reachability probe results

use std::collections::HashMap;

/// Status code recorded when no HTTP response was received
pub const NO_RESPONSE: u16 = 0;

/// HTTP status treated as healthy
pub const STATUS_OK: u16 = 200;

/// Coarse reachability classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

/// Result of a single probe
///
/// `status` keeps the raw HTTP code for display, or `0` when the request
/// never completed (DNS failure, refused connection, timeout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HealthOutcome {
    pub reachability: Reachability,
    pub status: u16,
}

/// Aggregated outcomes of one sweep, keyed by service name
pub type SweepResults = HashMap<String, HealthOutcome>;

impl HealthOutcome {
    /// Classify an HTTP status code (only 200 counts as reachable)
    pub fn from_status(status: u16) -> Self {
        let reachability = if status == STATUS_OK {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        };
        Self {
            reachability,
            status,
        }
    }

    /// Outcome for a request that produced no response
    pub fn unreachable() -> Self {
        Self {
            reachability: Reachability::Unreachable,
            status: NO_RESPONSE,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.reachability == Reachability::Reachable
    }

    /// True when the service answered, whatever the status
    pub fn responded(&self) -> bool {
        self.status != NO_RESPONSE
    }
}
