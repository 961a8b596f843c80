//! Service registry and per-service runtime state
//!
//! The registry is the fixed, ordered set of monitored services built once
//! at startup. It is shared with the background sweep task, so it is cheap
//! to clone and never mutated. Runtime health lives next to it in
//! [`ServiceRuntimeState`], owned by the controller.

use crate::indicators::{HasHealth, HealthIndicator};
use homelab_rs::{DashboardConfig, HealthOutcome, HomelabError, ServiceDescriptor};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered, immutable set of monitored services
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    services: Arc<[ServiceDescriptor]>,
}

impl ServiceRegistry {
    /// Build a registry, rejecting empty or duplicate names
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self, HomelabError> {
        let mut seen = HashSet::new();
        for service in &services {
            if service.name.is_empty() {
                return Err(HomelabError::ConfigInvalid(
                    "service name must not be empty".to_string(),
                ));
            }
            if !seen.insert(service.name.as_str()) {
                return Err(HomelabError::ConfigInvalid(format!(
                    "duplicate service name '{}'",
                    service.name
                )));
            }
        }
        Ok(Self {
            services: services.into(),
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, HomelabError> {
        Self::new(config.applications.clone())
    }

    /// Services in configuration order
    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    pub fn get(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.services.iter().position(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Health and focus state of one service
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRuntimeState {
    pub descriptor: ServiceDescriptor,
    /// Last probe result, `None` until the first sweep lands
    pub outcome: Option<HealthOutcome>,
    /// True while this service's detail view is open
    pub active: bool,
}

impl ServiceRuntimeState {
    pub fn new(descriptor: ServiceDescriptor) -> Self {
        Self {
            descriptor,
            outcome: None,
            active: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn supports_detail(&self) -> bool {
        self.descriptor.kind.supports_detail()
    }

    /// Reachable on the last sweep
    pub fn is_up(&self) -> bool {
        self.outcome.is_some_and(|o| o.is_reachable())
    }

    /// Status code column: the last HTTP status, or "-" before the first sweep
    pub fn status_text(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.status.to_string(),
            None => "-".to_string(),
        }
    }
}

impl HasHealth for ServiceRuntimeState {
    fn health(&self) -> HealthIndicator {
        self.outcome.health()
    }
}
