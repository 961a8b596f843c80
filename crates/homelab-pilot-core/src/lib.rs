//! homelab-pilot-core: Health-monitoring and view-state engine
//!
//! This crate owns every piece of state the dashboard mutates: the service
//! registry and its runtime health, the detail stats cache, the sweep
//! scheduler and the list/detail view state machine. It is intentionally
//! kept independent of any TUI framework so the controller can be driven
//! and tested with plain events.
//!
//! # Modules
//!
//! - [`registry`] - Service registry and per-service runtime state
//! - [`stats_cache`] - Detail snapshots with a freshness window
//! - [`scheduler`] - Health sweep timing (pure, returns next fire time)
//! - [`view`] - View state machine and key routing
//! - [`dashboard`] - The controller composing all of the above
//! - [`view_model`] - Render-ready projection of the dashboard
//! - [`async_state`] - Loading/error/data state for the detail pane
//! - [`indicators`] - Health indicators for consistent UI representation
//! - [`selection`] - Cursor handling for the service list
//! - [`formatting`] - Bytes, ages and truncation for display
//! - [`errors`] - Operator-facing error messages
//! - [`constants`] - Policy values (timeouts, freshness, delays)

pub mod async_state;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod formatting;
pub mod indicators;
pub mod registry;
pub mod scheduler;
pub mod selection;
pub mod stats_cache;
pub mod view;
pub mod view_model;

pub use async_state::*;
pub use dashboard::*;
pub use errors::*;
pub use formatting::*;
pub use indicators::*;
pub use registry::*;
pub use scheduler::*;
pub use selection::*;
pub use stats_cache::*;
pub use view::*;
pub use view_model::*;
