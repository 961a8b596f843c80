//! homelab-rs: HTTP SDK for self-hosted homelab services
//!
//! This crate knows how to load the dashboard configuration, probe a service
//! endpoint for reachability and pull the detail payloads exposed by the
//! supported integrations (Pi-hole, Sonarr).
//!
//! # Example
//!
//! ```no_run
//! use homelab_rs::{DashboardConfig, HomelabClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::load_default()?;
//!     let client = HomelabClient::new(config.probe_timeout())?;
//!
//!     let results = client.sweep(&config.applications).await;
//!     for (name, outcome) in results {
//!         println!("{}: {}", name, outcome.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

// reqwest::Error makes HomelabError large, errors are on the cold path
#![allow(clippy::result_large_err)]

pub mod client;
pub mod config;
pub mod error;
pub mod pihole;
pub mod probe;
pub mod sonarr;

pub use client::{DetailPayload, HomelabClient};
pub use config::{DashboardConfig, ServiceDescriptor, ServiceKind};
pub use error::HomelabError;
pub use pihole::PiHoleSummary;
pub use probe::{HealthOutcome, Reachability, SweepResults};
pub use sonarr::{SeriesResource, SeriesStatistics};
