//! Health indicators for consistent UI representation
//!
//! Maps probe outcomes onto a small set of display states shared by the
//! service list, the status bar and the detail view.

use homelab_rs::HealthOutcome;

/// Universal health/status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthIndicator {
    /// Answered 200
    Healthy,
    /// Answered with a non-200 status
    Warning,
    /// No response at all (DNS, refused, timeout)
    Error,
    /// Not probed yet
    #[default]
    Pending,
}

impl HealthIndicator {
    /// Unicode symbol for this status
    pub fn symbol(&self) -> &'static str {
        match self {
            HealthIndicator::Healthy => "●",
            HealthIndicator::Warning => "◐",
            HealthIndicator::Error => "✗",
            HealthIndicator::Pending => "○",
        }
    }

    /// Human-readable label for this status
    pub fn label(&self) -> &'static str {
        match self {
            HealthIndicator::Healthy => "Healthy",
            HealthIndicator::Warning => "Degraded",
            HealthIndicator::Error => "Down",
            HealthIndicator::Pending => "Pending",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthIndicator::Healthy)
    }

    /// Check if this represents a warning or worse
    pub fn needs_attention(&self) -> bool {
        matches!(self, HealthIndicator::Warning | HealthIndicator::Error)
    }

    /// Severity level, higher is worse
    pub fn severity(&self) -> u8 {
        match self {
            HealthIndicator::Healthy => 0,
            HealthIndicator::Pending => 1,
            HealthIndicator::Warning => 2,
            HealthIndicator::Error => 3,
        }
    }

    /// Return the more severe of two indicators
    pub fn worst(self, other: HealthIndicator) -> HealthIndicator {
        if self.severity() >= other.severity() {
            self
        } else {
            other
        }
    }
}

impl std::fmt::Display for HealthIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Types that can report their health status
pub trait HasHealth {
    /// Return the current health indicator
    fn health(&self) -> HealthIndicator;

    fn is_healthy(&self) -> bool {
        self.health().is_healthy()
    }

    fn needs_attention(&self) -> bool {
        self.health().needs_attention()
    }
}

impl HasHealth for HealthOutcome {
    fn health(&self) -> HealthIndicator {
        if self.is_reachable() {
            HealthIndicator::Healthy
        } else if self.responded() {
            HealthIndicator::Warning
        } else {
            HealthIndicator::Error
        }
    }
}

impl HasHealth for Option<HealthOutcome> {
    fn health(&self) -> HealthIndicator {
        self.as_ref()
            .map(HasHealth::health)
            .unwrap_or(HealthIndicator::Pending)
    }
}

/// Worst indicator across a set of entities (Pending when empty)
pub fn aggregate_health<'a, H, I>(items: I) -> HealthIndicator
where
    H: HasHealth + 'a,
    I: IntoIterator<Item = &'a H>,
{
    items
        .into_iter()
        .map(HasHealth::health)
        .reduce(HealthIndicator::worst)
        .unwrap_or(HealthIndicator::Pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_health() {
        assert_eq!(HealthOutcome::from_status(200).health(), HealthIndicator::Healthy);
        assert_eq!(HealthOutcome::from_status(500).health(), HealthIndicator::Warning);
        assert_eq!(HealthOutcome::unreachable().health(), HealthIndicator::Error);
        assert_eq!(None::<HealthOutcome>.health(), HealthIndicator::Pending);
    }

    #[test]
    fn test_worst() {
        assert_eq!(
            HealthIndicator::Healthy.worst(HealthIndicator::Warning),
            HealthIndicator::Warning
        );
        assert_eq!(
            HealthIndicator::Error.worst(HealthIndicator::Pending),
            HealthIndicator::Error
        );
    }

    #[test]
    fn test_aggregate_health() {
        let outcomes = vec![
            HealthOutcome::from_status(200),
            HealthOutcome::from_status(404),
            HealthOutcome::from_status(200),
        ];
        assert_eq!(aggregate_health(&outcomes), HealthIndicator::Warning);

        let empty: Vec<HealthOutcome> = Vec::new();
        assert_eq!(aggregate_health(&empty), HealthIndicator::Pending);
    }

    #[test]
    fn test_symbols_distinct() {
        assert_ne!(HealthIndicator::Healthy.symbol(), HealthIndicator::Error.symbol());
        assert!(HealthIndicator::Error.needs_attention());
        assert!(!HealthIndicator::Pending.needs_attention());
    }
}
